/// Scanner module — shallow and recursive size listings.
///
/// Both listings are built on the lazy [`walk::regular_files`] iterator and
/// return a fresh [`SizeMap`]. Any filesystem error stops the scan and is
/// returned as-is; there is no retry and no partial result.
pub mod walk;

use crate::model::size::{format_count, format_size};
use crate::model::{NameAllocator, SizeMap};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walk::Depth;

/// Errors produced while listing a directory.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Reading the root or a file's metadata failed.
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scan root exists but is not a directory.
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The directory walker failed to read an entry.
    #[error("directory walk failed: {0}")]
    Walk(#[from] jwalk::Error),
}

/// List the regular files directly inside `root`, keyed by filename.
///
/// Subdirectories are not entered.
pub fn list_files(root: &Path) -> Result<SizeMap, ScanError> {
    let mut sizes = SizeMap::new();
    for file in walk::regular_files(root, Depth::Shallow)? {
        let file = file?;
        sizes.insert(file.name, file.size);
    }

    info!(
        "Shallow scan of {}: {} files, {}",
        root.display(),
        format_count(sizes.len() as u64),
        format_size(sizes.total_size())
    );
    Ok(sizes)
}

/// List every regular file below `root`, keyed by a collision-free display
/// name.
///
/// Files sharing a base filename are numbered in encounter order
/// (`a.txt`, `a.txt-2`, ...). Encounter order is filesystem order, so which
/// file keeps the bare name is platform-dependent.
pub fn list_files_recursive(root: &Path) -> Result<SizeMap, ScanError> {
    let mut names = NameAllocator::new();
    let mut sizes = SizeMap::new();

    for file in walk::regular_files(root, Depth::Recursive)? {
        let file = file?;
        let shown = names.assign(&file.name);
        if shown != file.name {
            debug!(
                path = %file.path.display(),
                name = %shown,
                "renamed duplicate filename"
            );
        }
        sizes.insert(shown, file.size);
    }

    info!(
        "Recursive scan of {}: {} files, {}",
        root.display(),
        format_count(sizes.len() as u64),
        format_size(sizes.total_size())
    );
    Ok(sizes)
}
