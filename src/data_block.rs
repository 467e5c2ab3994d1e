//! Data block identifiers: a prefix and a UUID joined by one space.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io::{self, Write};

use uuid::Uuid;

use crate::ports::IdGenerator;

/// Prefix used when the caller does not supply one.
pub const DEFAULT_PREFIX: &str = "_csp.data_block_id";

/// A prefixed identifier, rendered as `<prefix> <uuid>`.
///
/// The prefix is kept verbatim, including bytes that are not valid UTF-8.
/// An empty prefix therefore renders with a leading space, and whitespace
/// inside the prefix is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataBlockId {
    prefix: OsString,
    id: Uuid,
}

impl DataBlockId {
    /// Pairs `prefix` with an existing identifier.
    #[must_use]
    pub fn new(prefix: impl Into<OsString>, id: Uuid) -> Self {
        Self { prefix: prefix.into(), id }
    }

    /// Pairs `prefix` with a freshly generated identifier.
    #[must_use]
    pub fn generate(prefix: impl Into<OsString>, generator: &dyn IdGenerator) -> Self {
        Self::new(prefix, generator.generate_id())
    }

    /// The prefix, exactly as supplied.
    #[must_use]
    pub fn prefix(&self) -> &OsStr {
        &self.prefix
    }

    /// The identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Writes `<prefix> <uuid>\n` to `out`, copying the prefix bytes unchanged.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.prefix.as_encoded_bytes())?;
        writeln!(out, " {}", self.id.hyphenated())
    }
}

/// Lossy for prefixes that are not valid UTF-8; use [`DataBlockId::write_line`]
/// for exact output.
impl fmt::Display for DataBlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix.to_string_lossy(), self.id.hyphenated())
    }
}
