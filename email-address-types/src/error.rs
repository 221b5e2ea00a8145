//! Error-related types.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// A format error.
///
/// This error is returned when a raw address (or a header token containing an address) is not in
/// the expected format, e.g., when the address does not match the address grammar or a delimiter
/// is missing.
#[derive(Clone, Debug, Eq, Error, Hash, Ord, PartialEq, PartialOrd)]
pub struct FormatError {
    kind: FormatErrorKind,
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Format error: {}", self.kind)
    }
}

/// The reason of a [`FormatError`].
#[derive(Clone, Copy, Debug, Eq, Error, Hash, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub enum FormatErrorKind {
    #[error("address not in proper format")]
    InvalidAddress,
    #[error("could not find closing quote")]
    MissingClosingQuote,
    #[error("could not find opening bracket")]
    MissingOpeningBracket,
    #[error("missing closing bracket")]
    MissingClosingBracket,
}

impl FormatError {
    pub fn new(kind: FormatErrorKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> FormatErrorKind {
        self.kind
    }
}

impl From<FormatErrorKind> for FormatError {
    fn from(kind: FormatErrorKind) -> Self {
        Self::new(kind)
    }
}
