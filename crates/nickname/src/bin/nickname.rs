//! Print deterministic member nicknames for user identifiers.
//!
//! This binary delegates to `nickname::cli` for option resolution and output,
//! keeping the CLI behaviour testable without spawning a process.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use nickname::cli::{
    CliArgs, CliError, build_generator, load_settings, read_identifiers, resolve_options,
    write_nicknames,
};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let args = CliArgs::parse();
    let settings = load_settings()?;
    let options = resolve_options(&args, &settings);
    let generator = build_generator(&options)?;

    let identifiers = if args.identifiers().is_empty() {
        read_identifiers(io::stdin().lock())?
    } else {
        args.identifiers().to_vec()
    };

    let written = write_nicknames(
        &generator,
        &identifiers,
        options.format(),
        io::stdout().lock(),
    )?;
    debug!(count = written, "nicknames written");
    Ok(())
}
