//! Duplicate detection module.
//!
//! Scanned files are grouped by content digest; groups with two or more
//! members are duplicate sets handed to the deletion policy.

pub mod groups;

pub use groups::{group_by_digest, DuplicateGroup, DuplicateIndex};
