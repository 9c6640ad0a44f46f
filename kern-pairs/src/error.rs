//! Errors that end an analysis

use read_fonts::ReadError;

/// An error that prevents any kerning pairs from being extracted.
///
/// Problems local to a single lookup or subtable are not errors; they are
/// logged and the analysis continues with the remaining data.
#[derive(Debug)]
pub enum Error {
    /// The font has no `GPOS` table.
    NoGpos,
    /// The `GPOS` table has no `kern` feature, or the feature is empty.
    NoKernFeature,
    /// The font data could not be parsed.
    Read(ReadError),
}

impl From<ReadError> for Error {
    fn from(src: ReadError) -> Self {
        Error::Read(src)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoGpos => write!(f, "The font has no GPOS table"),
            Error::NoKernFeature => write!(f, "The font has no kern feature"),
            Error::Read(err) => write!(f, "Failed to read font: '{err}'"),
        }
    }
}

impl std::error::Error for Error {}
