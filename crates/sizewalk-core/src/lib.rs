/// SizeWalk Core — scanning, analysis, and reporting.
///
/// This crate contains all business logic with no CLI or process-level
/// dependencies. The binary crate only parses arguments, installs logging
/// and maps errors to exit codes.
///
/// # Modules
///
/// - [`model`] — File records, the size map and the per-scan name allocator.
/// - [`scanner`] — Shallow and recursive directory listing.
/// - [`analysis`] — Post-scan ranking (largest files).
/// - [`report`] — Text and JSON rendering of scan results.
pub mod analysis;
pub mod model;
pub mod report;
pub mod scanner;

use std::path::PathBuf;

/// Everything one invocation needs to know, resolved from the command line.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory to scan.
    pub root: PathBuf,
    /// How many entries the largest-files report should show. Kept signed
    /// so the header can echo a non-positive request unchanged.
    pub top_n: i64,
    /// Also print the shallow listing of `root` before the report.
    pub shallow: bool,
}
