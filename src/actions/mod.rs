//! File actions module.
//!
//! This module provides functionality for:
//! - Deciding which duplicates may be removed ([`policy`])
//! - Asking the operator before each removal ([`confirm`])
//! - Permanent single-file deletion ([`delete`])
//! - Pruning directories left empty afterwards ([`compact`])

pub mod compact;
pub mod confirm;
pub mod delete;
pub mod policy;

// Re-export commonly used types
pub use compact::{compact_empty_dirs, is_empty_dir, CompactReport};
pub use confirm::{is_affirmative, Confirm, LineConfirm, ScriptedConfirm, PROMPT};
pub use delete::{remove_file, DeleteError, DeleteResult};
pub use policy::{
    resolve_duplicates, resolve_group, DeletionOutcome, DeletionPolicy, DeletionReport,
};
