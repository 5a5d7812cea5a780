//! Core type definitions shared by the tool handlers
//!
//! Strongly-typed wrappers for the identifiers that appear in GitHub REST paths
//! and for the pagination arguments list-style tools accept.

pub mod pagination;
pub mod repository;

pub use pagination::*;
pub use repository::*;
