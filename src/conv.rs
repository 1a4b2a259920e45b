//! Parse errors and shared input limits.

use thiserror::Error;

/// Inputs at or above this length are rejected before any parsing work
/// is done.
pub(crate) const MAX_INPUT_LEN: usize = 7000;

/// An error returned when parsing a decimal128 from a string.
///
/// No variant is recoverable: parsing is pure, so the same input always
/// produces the same error.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The input was empty.
    #[error("cannot parse a decimal128 from an empty string")]
    Empty,

    /// The input was at least 7000 bytes long.
    #[error("input of {0} bytes exceeds the 7000 byte limit")]
    TooLong(usize),

    /// The input did not match the numeral grammar.
    #[error("invalid decimal128 literal {input:?}: {reason}")]
    Invalid {
        /// The rejected input.
        input: String,
        /// What made it invalid.
        reason: &'static str,
    },

    /// Fitting the value into 34 significant digits would discard a
    /// non-zero digit. Only [`Decimal128::parse`][crate::Decimal128::parse]
    /// returns this;
    /// [`parse_with_rounding`][crate::Decimal128::parse_with_rounding]
    /// rounds half-to-even instead.
    #[error("{input:?} does not fit in 34 significant digits")]
    InexactRounding {
        /// The rejected input.
        input: String,
    },

    /// The value cannot be scaled into the exponent range
    /// [-6176, 6111] without losing non-zero digits.
    #[error("{input:?} overflows the decimal128 range")]
    Overflow {
        /// The rejected input.
        input: String,
    },
}

impl ParseError {
    pub(crate) fn invalid(input: &str, reason: &'static str) -> Self {
        Self::Invalid {
            input: input.into(),
            reason,
        }
    }

    pub(crate) fn inexact(input: &str) -> Self {
        Self::InexactRounding {
            input: input.into(),
        }
    }

    pub(crate) fn overflow(input: &str) -> Self {
        Self::Overflow {
            input: input.into(),
        }
    }
}
