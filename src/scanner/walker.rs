//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct, which validates a root
//! directory, traverses it recursively and hashes every regular file it
//! meets. Traversal is single-threaded and lazy: nothing is read until the
//! iterator returned by [`Walker::walk`] is advanced.
//!
//! # Ordering
//!
//! Entries within a directory are visited sorted by file name, so two walks
//! over an unchanged tree produce records in the same order.
//!
//! # Symlinks
//!
//! Symbolic links are never followed and are not reported as files.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{FileRecord, Hasher, ScanError};

/// Directory walker producing one [`FileRecord`] per regular file.
#[derive(Debug)]
pub struct Walker {
    /// Absolute root path to walk
    root: PathBuf,
    /// Content hasher
    hasher: Hasher,
}

impl Walker {
    /// Create a walker for `path`, validating that it is an existing directory.
    ///
    /// The root is made absolute against the current directory; symlinks in
    /// it are left unresolved.
    ///
    /// # Errors
    ///
    /// - `RootNotFound` if nothing exists at `path`
    /// - `NotADirectory` if `path` is a file or other non-directory
    pub fn new(path: &Path) -> Result<Self, ScanError> {
        let root = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

        match std::fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(ScanError::NotADirectory(root)),
            Err(e) => {
                log::debug!("Root {} rejected: {}", root.display(), e);
                return Err(ScanError::RootNotFound(root));
            }
        }

        Ok(Self {
            root,
            hasher: Hasher::new(),
        })
    }

    /// The validated, absolute root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the directory tree, yielding file records.
    ///
    /// Errors are yielded as [`ScanError`] values rather than stopping
    /// iteration; the caller decides whether one error ends the scan.
    pub fn walk(&self) -> impl Iterator<Item = Result<FileRecord, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => {
                    let file_type = entry.file_type();
                    if file_type.is_dir() {
                        return None;
                    }
                    if !file_type.is_file() {
                        log::debug!("Skipping non-regular file: {}", entry.path().display());
                        return None;
                    }
                    Some(self.process_file_entry(&entry))
                }
                Err(e) => Some(Err(self.handle_walk_error(e))),
            })
    }

    fn process_file_entry(&self, entry: &DirEntry) -> Result<FileRecord, ScanError> {
        let path = entry.path();
        let size = entry
            .metadata()
            .map_err(|e| self.handle_walk_error(e))?
            .len();
        let digest = self.hasher.full_hash(path)?;

        log::trace!("Hashed {} ({} bytes)", path.display(), size);
        Ok(FileRecord::new(path.to_path_buf(), digest, size))
    }

    fn handle_walk_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);
        ScanError::Walk {
            path,
            source: error,
        }
    }
}
