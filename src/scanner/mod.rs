//! Scanner module for directory traversal and file hashing.
//!
//! This module provides functionality for:
//! - Sequential, sorted directory walking using walkdir
//! - Content hashing with BLAKE3
//!
//! # Architecture
//!
//! - [`walker`]: Root validation, traversal and per-file hashing
//! - [`hasher`]: BLAKE3 file hashing (streaming)
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new(".")).unwrap();
//! for record in walker.walk() {
//!     match record {
//!         Ok(file) => println!("{} {}", file.digest_hex(), file.path.display()),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

pub mod hasher;
pub mod walker;

use std::io;
use std::path::{Path, PathBuf};

pub use hasher::{hash_to_hex, Hash, Hasher};
pub use walker::Walker;

/// A scanned regular file and its content digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Absolute path to the file
    pub path: PathBuf,
    /// BLAKE3 digest of the full content
    pub digest: Hash,
    /// File size in bytes at scan time
    pub size: u64,
}

impl FileRecord {
    #[must_use]
    pub fn new(path: PathBuf, digest: Hash, size: u64) -> Self {
        Self { path, digest, size }
    }

    /// Digest as a hexadecimal string.
    #[must_use]
    pub fn digest_hex(&self) -> String {
        hash_to_hex(&self.digest)
    }
}

/// Errors that can occur during directory scanning.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// The root path does not exist.
    #[error("Path not found: {0}")]
    RootNotFound(PathBuf),

    /// The root path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The directory walk itself failed (unreadable directory, vanished entry).
    #[error("Walk error at {path}: {source}")]
    Walk {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying walkdir error
        #[source]
        source: walkdir::Error,
    },

    /// A file could not be read for hashing.
    #[error(transparent)]
    Hash(#[from] HashError),
}

impl ScanError {
    /// Whether this error rejects the root itself rather than a file inside it.
    #[must_use]
    pub fn is_invalid_root(&self) -> bool {
        matches!(self, Self::RootNotFound(_) | Self::NotADirectory(_))
    }

    /// Path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::RootNotFound(p) | Self::NotADirectory(p) | Self::Walk { path: p, .. } => p,
            Self::Hash(e) => e.path(),
        }
    }

    /// Failure description without the path, for path-prefixed report lines.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::RootNotFound(_) => "path not found".to_string(),
            Self::NotADirectory(_) => "not a directory".to_string(),
            Self::Walk { source, .. } => walk_error_reason(source),
            Self::Hash(e) => e.reason(),
        }
    }
}

/// Errors that can occur during file hashing.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl HashError {
    pub(crate) fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }

    /// Path of the file that failed to hash.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(p) | Self::PermissionDenied(p) | Self::Io { path: p, .. } => p,
        }
    }

    /// Failure description without the path.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::NotFound(_) => "file not found".to_string(),
            Self::PermissionDenied(_) => "permission denied".to_string(),
            Self::Io { source, .. } => source.to_string(),
        }
    }
}

/// Underlying cause of a walk error; walkdir's own message embeds the path.
pub(crate) fn walk_error_reason(error: &walkdir::Error) -> String {
    match error.io_error() {
        Some(io) => io.to_string(),
        None => error.to_string(),
    }
}
