use std::fmt;

use thiserror::Error;

/// Unified error type for the basalt type layer.
///
/// Every fallible conversion in the workspace reports through this enum.
/// All variants describe recoverable data-quality or usage errors: a failed
/// call leaves no partial result behind, so the caller can reject the single
/// offending record and continue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text could not be parsed as a value of the target type.
    ///
    /// Raised during text-based ingestion when a literal is malformed or out
    /// of range for the column's type: `"abc"` offered to an integer
    /// column, day 31 in a 30-day month, a decimal exceeding its declared
    /// precision. Carries the offending literal and the target type name so
    /// the caller can report exactly which value was rejected.
    ///
    /// Parsing is deterministic; retries never apply. The caller decides
    /// whether to skip the row, fail the batch, or surface the message.
    #[error("cannot parse '{literal}' as {target}")]
    ParseError {
        literal: String,
        target: &'static str,
    },

    /// Invalid API parameter.
    ///
    /// A problem with arguments passed to basalt APIs: precision/scale pairs
    /// outside a decimal kind's bounds, calendar components that do not form
    /// a real date, or raw encodings that cannot be decoded. The message
    /// states what was invalid and why.
    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),

    /// The requested operation is outside this layer's responsibility.
    ///
    /// Structured kinds (arrays, maps, structs) and engine-internal markers
    /// have no single-value text form here; their parsing belongs to the
    /// structured-value layer above the datum codec.
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Internal error indicating a bug or violated precondition.
    ///
    /// Should never occur during normal operation. The usual cause is a
    /// datum whose tag disagrees with the logical type supplied alongside
    /// it, which callers are required to keep in agreement.
    #[error("An internal operation failed: {0}")]
    Internal(String),
}

impl Error {
    /// Create a [`Error::ParseError`] for a rejected literal.
    #[inline]
    pub fn parse_error(literal: impl Into<String>, target: &'static str) -> Self {
        Error::ParseError {
            literal: literal.into(),
            target,
        }
    }

    /// Create an [`Error::InvalidArgumentError`] from any displayable error.
    #[inline]
    pub fn invalid_argument<E: fmt::Display>(err: E) -> Self {
        Error::InvalidArgumentError(err.to_string())
    }
}
