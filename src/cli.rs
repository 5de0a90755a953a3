//! Command-line parsing.
//!
//! The contract is one positional directory argument. Anything clap
//! rejects (no directory, a second positional, an unknown flag) collapses to
//! the one-line usage message and exit status 1; only `--help` and
//! `--version` keep clap's own output.

use clap::error::ErrorKind;
use clap::Parser;
use sizewalk_core::analysis::DEFAULT_TOP_N;
use sizewalk_core::ReportConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "sizewalk",
    version,
    about = "List file sizes in a directory tree and report the largest files"
)]
pub struct Args {
    /// Directory to scan
    pub directory: PathBuf,

    /// Number of largest files to report (zero or negative lists none)
    #[arg(
        short = 'n',
        long = "top",
        default_value_t = DEFAULT_TOP_N as i64,
        allow_negative_numbers = true
    )]
    pub top: i64,

    /// Print the shallow listing of the directory as JSON before the report
    #[arg(short, long)]
    pub shallow: bool,

    /// Log scan details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    pub fn into_config(self) -> ReportConfig {
        ReportConfig {
            root: self.directory,
            top_n: self.top,
            shallow: self.shallow,
        }
    }
}

/// Outcome of argument parsing.
#[derive(Debug)]
pub enum Invocation {
    Run(Args),
    /// Wrong arguments: print [`usage`] and exit with status 1.
    Usage,
    /// `--help` / `--version`: let clap print and exit.
    Exit(clap::Error),
}

pub fn parse<I, T>(argv: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Invocation::Run(args),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Invocation::Exit(err),
            _ => Invocation::Usage,
        },
    }
}

/// The name the program was invoked as, for the usage line.
pub fn program_name(argv: &[OsString]) -> String {
    match argv.first().and_then(|arg0| Path::new(arg0).file_name()) {
        Some(name) => name.to_string_lossy().into_owned(),
        None => "sizewalk".to_string(),
    }
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} directory_path")
}
