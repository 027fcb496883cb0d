//! Error types for color parsing.
//!
//! Conversions themselves are total and never fail; the only fallible
//! surface is strict hex parsing.

use thiserror::Error;

/// Failure modes of [`Rgb::parse_hex`](crate::Rgb::parse_hex).
///
/// The lossy [`Rgb::from_hex`](crate::Rgb::from_hex) swallows these and
/// substitutes black instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexParseError {
    /// Input does not have exactly six hex digits after the optional `#`.
    #[error("expected 6 hex digits, got {0}")]
    InvalidLength(usize),

    /// Input contains a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit in {0:?}")]
    InvalidDigit(String),
}
