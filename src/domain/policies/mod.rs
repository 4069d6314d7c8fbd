//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions that operate on domain values.

mod pinning;

pub use pinning::{
    evaluate, has_version_qualifier, is_immutable_pin, matches_allow_list, Evaluation,
};
