//! Core library entry for the `data-block-id` CLI.

pub mod adapters;
pub mod cli;
pub mod data_block;
pub mod ports;

use std::ffi::OsString;
use std::io::{self, Write};

use log::debug;

pub use adapters::RandomIdGenerator;
pub use data_block::{DataBlockId, DEFAULT_PREFIX};
pub use ports::IdGenerator;

/// Run the CLI with the provided arguments, printing to stdout.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or stdout cannot be written.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let stdout = io::stdout();
    run_with(args, &RandomIdGenerator::new(), &mut stdout.lock())
}

/// Run the CLI with an explicit generator and output sink.
///
/// Only the first argument is read, verbatim; the rest are ignored.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or `out` cannot be written.
pub fn run_with<I, T, W>(args: I, generator: &dyn IdGenerator, out: &mut W) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = cli::Cli::parse_verbatim(args).map_err(|err| err.to_string())?;

    let extra = cli.extra();
    if !extra.is_empty() {
        debug!("ignoring {} extra argument(s): {:?}", extra.len(), extra);
    }

    let block = DataBlockId::generate(cli.prefix_or_default(), generator);
    debug!("generated {}", block.id());

    block
        .write_line(out)
        .and_then(|()| out.flush())
        .map_err(|err| format!("failed to write output: {err}"))
}
