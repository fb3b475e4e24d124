//! Grouping of scanned files by content digest.
//!
//! # Overview
//!
//! Grouping is a pure reduction over the scanner's output: every
//! [`FileRecord`] is folded into a [`DuplicateIndex`], keyed by digest.
//! Groups keep the order in which their digest was first discovered, and
//! members keep scan order. A group with two or more members is a
//! duplicate set.
//!
//! # Example
//!
//! ```
//! use dupesweep::duplicates::group_by_digest;
//! use dupesweep::scanner::{FileRecord, Hasher};
//! use std::path::PathBuf;
//!
//! let x = Hasher::hash_bytes(b"X");
//! let y = Hasher::hash_bytes(b"Y");
//! let records = vec![
//!     FileRecord::new(PathBuf::from("/data/a.txt"), x, 1),
//!     FileRecord::new(PathBuf::from("/data/hard mode/b.txt"), x, 1),
//!     FileRecord::new(PathBuf::from("/data/c.txt"), y, 1),
//! ];
//!
//! let index = group_by_digest(records);
//! assert_eq!(index.len(), 2);
//! assert_eq!(index.actionable().count(), 1);
//! assert_eq!(index.duplicate_files(), 2);
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::scanner::{hash_to_hex, FileRecord, Hash};

/// All scanned files sharing one digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// BLAKE3 digest shared by every member
    pub digest: Hash,
    /// Member paths in discovery order
    pub paths: Vec<PathBuf>,
    /// Size in bytes of the first discovered member
    pub size: u64,
}

impl DuplicateGroup {
    #[must_use]
    pub fn new(digest: Hash, size: u64) -> Self {
        Self {
            digest,
            paths: Vec::new(),
            size,
        }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// A group is actionable once it holds two or more files.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        self.paths.len() > 1
    }

    /// Digest as hexadecimal string.
    #[must_use]
    pub fn digest_hex(&self) -> String {
        hash_to_hex(&self.digest)
    }

    /// Whether `path` is a member of this group.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }
}

/// Immutable digest → paths index built from one scan.
#[derive(Debug, Clone, Default)]
pub struct DuplicateIndex {
    groups: Vec<DuplicateGroup>,
    positions: HashMap<Hash, usize>,
    total_files: usize,
}

impl DuplicateIndex {
    /// Fold scanned records into an index.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = FileRecord>,
    {
        records
            .into_iter()
            .fold(Self::default(), |mut index, record| {
                index.insert(record);
                index
            })
    }

    fn insert(&mut self, record: FileRecord) {
        self.total_files += 1;
        let slot = match self.positions.get(&record.digest) {
            Some(&slot) => slot,
            None => {
                self.groups
                    .push(DuplicateGroup::new(record.digest, record.size));
                self.positions.insert(record.digest, self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        self.groups[slot].paths.push(record.path);
    }

    /// All groups, including singletons, in first-discovery order.
    #[must_use]
    pub fn groups(&self) -> &[DuplicateGroup] {
        &self.groups
    }

    /// Groups with two or more members, in first-discovery order.
    pub fn actionable(&self) -> impl Iterator<Item = &DuplicateGroup> {
        self.groups.iter().filter(|g| g.is_actionable())
    }

    /// Look up the group for a digest.
    #[must_use]
    pub fn get(&self, digest: &Hash) -> Option<&DuplicateGroup> {
        self.positions.get(digest).map(|&slot| &self.groups[slot])
    }

    /// Number of distinct digests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records folded into the index.
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.total_files
    }

    /// Number of files that belong to an actionable group.
    #[must_use]
    pub fn duplicate_files(&self) -> usize {
        self.actionable().map(DuplicateGroup::len).sum()
    }

    /// Bytes held by redundant copies: all but one member of each actionable group.
    #[must_use]
    pub fn redundant_bytes(&self) -> u64 {
        self.actionable()
            .map(|g| g.size * (g.len() as u64 - 1))
            .sum()
    }
}

impl FromIterator<FileRecord> for DuplicateIndex {
    fn from_iter<I: IntoIterator<Item = FileRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

/// Group records by digest. Shorthand for [`DuplicateIndex::from_records`].
pub fn group_by_digest<I>(records: I) -> DuplicateIndex
where
    I: IntoIterator<Item = FileRecord>,
{
    DuplicateIndex::from_records(records)
}
