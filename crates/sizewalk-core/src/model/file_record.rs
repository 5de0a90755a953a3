/// Flat scan results: one record per file, keyed by display name.
///
/// A `SizeMap` is the whole output of a single scan. Nothing here is
/// shared between scans; every invocation builds a fresh map.
use compact_str::CompactString;
use std::collections::hash_map::{self, HashMap};

/// A single file as it appears in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Bare filename (shallow scans) or collision-free display name
    /// (recursive scans).
    pub name: CompactString,
    /// Logical file size in bytes.
    pub size: u64,
}

impl FileRecord {
    pub fn new(name: impl Into<CompactString>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Mapping from display name to size in bytes.
///
/// Iteration order is unspecified. Callers that need a stable order sort
/// the output themselves (see [`crate::analysis::largest_files`]).
#[derive(Debug, Default, Clone)]
pub struct SizeMap {
    entries: HashMap<CompactString, u64>,
}

impl SizeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a display name. Returns the previous size if the name was
    /// already present.
    pub fn insert(&mut self, name: impl Into<CompactString>, size: u64) -> Option<u64> {
        self.entries.insert(name.into(), size)
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every recorded size.
    pub fn total_size(&self) -> u64 {
        self.entries.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(name, &size)| (name.as_str(), size))
    }

    /// Consume the map into a `Vec<FileRecord>` in arbitrary order.
    pub fn into_records(self) -> Vec<FileRecord> {
        self.into_iter().collect()
    }
}

impl IntoIterator for SizeMap {
    type Item = FileRecord;
    type IntoIter = std::iter::Map<
        hash_map::IntoIter<CompactString, u64>,
        fn((CompactString, u64)) -> FileRecord,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .into_iter()
            .map(to_record as fn((CompactString, u64)) -> FileRecord)
    }
}

fn to_record((name, size): (CompactString, u64)) -> FileRecord {
    FileRecord::new(name, size)
}
