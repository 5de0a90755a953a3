/// Lazy enumeration of regular files under a directory.
///
/// Wraps `jwalk` in serial mode. Entries come back in whatever order the
/// filesystem yields them: sorting is off, so results are not stable across
/// platforms (or even across filesystems on one machine).
///
/// The iterator owns the walker and every open directory handle. Dropping
/// it, including on an early `?` return, closes them.
use crate::scanner::ScanError;
use compact_str::CompactString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// How far below the root to look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Direct children of the root only.
    Shallow,
    /// The root and every nested subdirectory.
    Recursive,
}

/// A regular file found during a walk.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Full path as produced by the walker (root-joined).
    pub path: PathBuf,
    /// Base filename, lossily converted to UTF-8.
    pub name: CompactString,
    /// Size in bytes, following symlinks.
    pub size: u64,
}

type RawEntry = Result<jwalk::DirEntry<((), ())>, jwalk::Error>;

/// Iterator over the regular files below a root. See [`regular_files`].
pub struct RegularFiles {
    inner: Box<dyn Iterator<Item = RawEntry>>,
}

/// Start a lazy walk of `root`.
///
/// The root itself is validated eagerly: a missing path yields
/// [`ScanError::Io`] and a non-directory yields [`ScanError::NotADirectory`]
/// before any entry is produced.
pub fn regular_files(root: &Path, depth: Depth) -> Result<RegularFiles, ScanError> {
    ensure_directory(root)?;

    let mut walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(false)
        .parallelism(jwalk::Parallelism::Serial)
        .min_depth(1);
    if depth == Depth::Shallow {
        walker = walker.max_depth(1);
    }

    Ok(RegularFiles {
        inner: Box::new(walker.into_iter()),
    })
}

impl Iterator for RegularFiles {
    type Item = Result<FileEntry, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(ScanError::Walk(err))),
            };
            match to_file_entry(&entry) {
                Ok(Some(file)) => return Some(Ok(file)),
                Ok(None) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

fn ensure_directory(root: &Path) -> Result<(), ScanError> {
    let metadata = fs::metadata(root).map_err(|source| ScanError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Classify one walker entry. `Ok(None)` means "not a regular file, skip".
///
/// Symlinks are resolved: a link to a regular file counts as that file,
/// links to directories and dangling links are skipped.
fn to_file_entry(entry: &jwalk::DirEntry<((), ())>) -> Result<Option<FileEntry>, ScanError> {
    let file_type = entry.file_type();
    let path = entry.path();

    if !file_type.is_file() && !file_type.is_symlink() {
        if !file_type.is_dir() {
            debug!(path = %path.display(), "skipping special file");
        }
        return Ok(None);
    }

    let metadata = match fs::metadata(&path) {
        Ok(m) => m,
        Err(e) if file_type.is_symlink() && e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "skipping dangling symlink");
            return Ok(None);
        }
        Err(source) => return Err(ScanError::Io { path, source }),
    };

    if !metadata.is_file() {
        debug!(path = %path.display(), "skipping symlink to non-file");
        return Ok(None);
    }

    Ok(Some(FileEntry {
        name: CompactString::new(entry.file_name().to_string_lossy()),
        size: metadata.len(),
        path,
    }))
}
