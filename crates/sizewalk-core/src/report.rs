/// Report rendering — the largest-files text report and the JSON shallow
/// listing.
///
/// Writers are generic over `io::Write` so tests can render into a
/// `Vec<u8>`; the `print_*` entry points lock stdout.
use crate::analysis::largest_files;
use crate::model::size::format_kib;
use crate::model::{FileRecord, SizeMap};
use crate::scanner::{self, ScanError};
use crate::ReportConfig;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

/// Errors produced while scanning for, or writing, a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("failed to write report: {0}")]
    Write(#[from] io::Error),

    #[error("failed to encode listing: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the largest-files report.
///
/// `n` is the count the caller asked for and is shown in the header as
/// given, even when `entries` holds fewer records or `n` is not positive.
pub fn write_largest_files<W: Write>(
    out: &mut W,
    directory: &Path,
    n: i64,
    entries: &[FileRecord],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "The {n} largest files in '{}' are:",
        directory.display()
    )?;
    writeln!(out)?;
    for (rank, record) in entries.iter().enumerate() {
        writeln!(
            out,
            "{}. {} - {}",
            rank + 1,
            record.name,
            format_kib(record.size)
        )?;
    }
    Ok(())
}

/// Scan `directory` recursively and print its `n` largest files to stdout.
///
/// A zero or negative `n` prints the header and no entries.
pub fn print_largest_files(directory: &Path, n: i64) -> Result<(), ReportError> {
    let sizes = scanner::list_files_recursive(directory)?;
    let top = largest_files(&sizes, usize::try_from(n).unwrap_or(0));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_largest_files(&mut out, directory, n, &top)?;
    out.flush()?;
    Ok(())
}

/// Write a size listing as a single JSON object, keys sorted by name.
pub fn write_size_map<W: Write>(out: &mut W, sizes: &SizeMap) -> Result<(), ReportError> {
    let sorted: BTreeMap<&str, u64> = sizes.iter().collect();
    serde_json::to_writer(&mut *out, &sorted)?;
    writeln!(out)?;
    Ok(())
}

/// Run one full invocation: optional shallow listing, then the report.
pub fn run(config: &ReportConfig) -> Result<(), ReportError> {
    if config.shallow {
        let sizes = scanner::list_files(&config.root)?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_size_map(&mut out, &sizes)?;
    }
    print_largest_files(&config.root, config.top_n)
}
