//! Common test utilities for Pinwarden CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated repository and home directories plus CLI runner
//! - Assertion macros: `assert_output_contains!`, `assert_exit!`
//! - Fixtures: Reusable workflow and action documents

#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
