//! SizeWalk — directory file-size lister.
//!
//! Thin binary entry point. All logic lives in the `sizewalk-core` crate;
//! this file only parses arguments, installs logging and maps the outcome
//! to an exit status.

mod cli;

use anyhow::Context;
use cli::Invocation;
use std::ffi::OsString;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let argv: Vec<OsString> = std::env::args_os().collect();
    let program = cli::program_name(&argv);

    let args = match cli::parse(argv) {
        Invocation::Run(args) => args,
        Invocation::Usage => {
            println!("{}", cli::usage(&program));
            return Ok(ExitCode::from(1));
        }
        Invocation::Exit(err) => err.exit(),
    };

    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("SizeWalk starting");

    let config = args.into_config();
    sizewalk_core::report::run(&config)
        .with_context(|| format!("failed to report on '{}'", config.root.display()))?;

    Ok(ExitCode::SUCCESS)
}
