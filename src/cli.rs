//! CLI argument definitions.

use std::ffi::{OsStr, OsString};
use std::iter;

use clap::Parser;

use crate::data_block::DEFAULT_PREFIX;

/// Top-level CLI parser for `data-block-id`.
///
/// Every argument after the program name is a value: there are no flags,
/// and `--`, `-h` or `--version` are prefixes like any other string.
#[derive(Debug, Parser)]
#[command(
    name = "data-block-id",
    about = "Print a random UUID behind a data block prefix",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Prefix printed before the identifier, then any ignored arguments.
    #[arg(value_name = "PREFIX")]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parses `args` (program name first) without interpreting any of the
    /// remaining arguments as options.
    ///
    /// # Errors
    ///
    /// Returns the clap error if parsing fails.
    pub fn parse_verbatim<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args.next().unwrap_or_else(|| OsString::from("data-block-id"));
        // A leading escape makes clap take everything after it as positional.
        Self::try_parse_from(iter::once(bin).chain(iter::once(OsString::from("--"))).chain(args))
    }

    /// The first argument, if one was given.
    #[must_use]
    pub fn prefix(&self) -> Option<&OsStr> {
        self.args.first().map(OsString::as_os_str)
    }

    /// The supplied prefix, or [`DEFAULT_PREFIX`] when none was given.
    #[must_use]
    pub fn prefix_or_default(&self) -> &OsStr {
        self.prefix().unwrap_or(OsStr::new(DEFAULT_PREFIX))
    }

    /// Arguments after the prefix. They are accepted and ignored.
    #[must_use]
    pub fn extra(&self) -> &[OsString] {
        self.args.get(1..).unwrap_or_default()
    }
}
