/// Top-N largest files analysis.
///
/// Ranks the records of a scan by size for the largest-files report.
use crate::model::{FileRecord, SizeMap};

/// Number of entries shown when the caller does not ask for a specific count.
pub const DEFAULT_TOP_N: usize = 10;

/// Get the `n` largest files from a scan, biggest first.
///
/// Returns every file when fewer than `n` exist, and nothing when `n` is 0.
/// Files of equal size come back in no particular order.
pub fn largest_files(sizes: &SizeMap, n: usize) -> Vec<FileRecord> {
    if n == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<FileRecord> = sizes
        .iter()
        .map(|(name, size)| FileRecord::new(name, size))
        .collect();
    ranked.sort_unstable_by(|a, b| b.size.cmp(&a.size));
    ranked.truncate(n);
    ranked
}
