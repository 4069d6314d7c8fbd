//! Domain Layer
//!
//! The core of Pinwarden: reference classification and document walking,
//! without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Per-file scan results (FileReport)
//! - `value_objects/` - Immutable value types (Reference, AllowList, ScanPolicy)
//! - `services/` - Domain services (document walker)
//! - `policies/` - Business rules (pinning classifier and verdict)
//! - `ports/` - Interface definitions for infrastructure (Reporter, DocumentSource)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Classification is stateless and testable
//! 3. **Ports & Adapters** - All output goes through the `Reporter` port

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
