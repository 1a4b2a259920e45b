//! An IEEE 754-2008 decimal128 interchange codec.
//!
//! [`Decimal128`] converts between decimal numerals (including signed
//! zero, scientific notation, and the special values Infinity and NaN)
//! and the fixed 16-byte little-endian decimal128 interchange encoding
//! used by BSON. It is a codec, not an arithmetic type: values are
//! parsed, stored, and stringified exactly, but never added, multiplied,
//! or compared numerically.
//!
//! ```
//! use decimal128::Decimal128;
//!
//! let d: Decimal128 = "-1.5".parse()?;
//! assert_eq!(d.to_bytes()[15], 0xb0);
//! assert_eq!(d.to_string(), "-1.5");
//! # Ok::<(), decimal128::ParseError>(())
//! ```
//!
//! Parsing comes in two flavors: [`Decimal128::parse`] fails when the
//! input carries more precision than the 34-digit significand can hold,
//! while [`Decimal128::parse_with_rounding`] applies round-half-to-even
//! to the excess digits.
//!
//! # Cargo features
//!
//! - `serde`: Serialize/deserialize values through the Extended JSON
//!   object form `{"$numberDecimal": "<string>"}`.

#![forbid(unsafe_code)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]

mod arith;
mod atod;
mod conv;
mod dec128;
mod dtoa;
#[cfg(feature = "serde")]
mod extjson;

pub use conv::ParseError;
pub use dec128::Decimal128;
