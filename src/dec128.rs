//! The 128-bit interchange word.

use core::fmt;

/// The bit in front of the sign bit.
const SIGN_SHIFT: u32 = 127;
const SIGN_MASK: u128 = 1 << SIGN_SHIFT;

/// Top two bits of the combination field.
const COMB_TOP2: u128 = 0x3 << 125;
/// Top four bits of the combination field.
const COMB_TOP4: u128 = 0xf << 123;
/// Top five bits of the combination field.
const COMB_TOP5: u128 = 0x1f << 122;

/// Mask over the 14-bit biased exponent.
const EXP_MASK: u128 = 0x3fff;

const FORM1_EXP_SHIFT: u32 = 113;
const FORM2_EXP_SHIFT: u32 = 111;

const FORM1_COEFF_MASK: u128 = (1 << 113) - 1;
const FORM2_COEFF_MASK: u128 = (1 << 111) - 1;
/// The `100` prefix implied in front of a form-2 coefficient.
const FORM2_IMPLICIT: u128 = 1 << 113;

pub(crate) const BIAS: i16 = 6176;
pub(crate) const MAX_EXP: i16 = 6111;
pub(crate) const MIN_EXP: i16 = -6176;
pub(crate) const DIGITS: u32 = 34;
pub(crate) const MAX_COEFF: u128 = 10u128.pow(34) - 1;

/// An IEEE 754-2008 decimal128 interchange value.
///
/// The bits are organized as follows:
///
/// ```text
/// | sign | combination | rest of the exponent and coefficient |
/// | 127  | 126-122     | 121-0                                |
/// ```
///
/// If the combination field starts in `11`, the exponent continues from
/// bit 124 (form 2) and the coefficient gets an implicit `100` prefix;
/// otherwise the exponent occupies bits 126-113 (form 1) and the
/// coefficient the low 113 bits. All canonical values use form 1: the
/// largest coefficient, 10^34 - 1, fits in 113 bits. Form-2 words are
/// reachable only through [`from_bytes`][Self::from_bytes] and
/// [`from_bits`][Self::from_bits] and decode as zero.
///
/// Equality is bitwise, so `0` and `-0`, or `1` and `1.0`, compare
/// unequal: they are distinct interchange words.
#[derive(Copy, Clone, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct Decimal128(u128);

impl Decimal128 {
    /// Positive zero with exponent 0.
    pub const ZERO: Self = Self::from_parts(false, 0, 0);

    /// The canonical (quiet, unsigned) NaN.
    pub const NAN: Self = Self(COMB_TOP5);

    /// Positive Infinity.
    pub const INFINITY: Self = Self::inf(false);

    /// Negative Infinity.
    pub const NEG_INFINITY: Self = Self::inf(true);

    /// Packs a finite value.
    ///
    /// The caller is responsible for `exp` in [-6176, 6111] and `coeff`
    /// at most 10^34 - 1.
    pub(crate) const fn from_parts(sign: bool, exp: i16, coeff: u128) -> Self {
        debug_assert!(exp >= MIN_EXP && exp <= MAX_EXP);
        debug_assert!(coeff <= MAX_COEFF);

        let sign = (sign as u128) << SIGN_SHIFT;
        let biased = (exp + BIAS) as u128;
        let bits = if coeff >> FORM1_EXP_SHIFT == 0 {
            sign | (biased << FORM1_EXP_SHIFT) | coeff
        } else {
            // The implicit prefix carries the coefficient's bit 113.
            sign | COMB_TOP2 | (biased << FORM2_EXP_SHIFT) | (coeff & FORM2_COEFF_MASK)
        };
        Self(bits)
    }

    pub(crate) const fn inf(sign: bool) -> Self {
        Self(((sign as u128) << SIGN_SHIFT) | COMB_TOP4)
    }

    /// Reports whether the sign bit is set.
    ///
    /// NaN carries a sign bit like any other value, even though
    /// [`Display`][fmt::Display] never prints it.
    pub const fn signbit(&self) -> bool {
        self.0 & SIGN_MASK != 0
    }

    /// Reports whether the sign bit is set and the value is not NaN.
    pub const fn is_sign_negative(&self) -> bool {
        !self.is_nan() && self.signbit()
    }

    /// Reports whether the sign bit is clear and the value is not NaN.
    pub const fn is_sign_positive(&self) -> bool {
        !self.is_nan() && !self.signbit()
    }

    /// Reports whether the value is a NaN.
    pub const fn is_nan(&self) -> bool {
        self.0 & COMB_TOP5 == COMB_TOP5
    }

    /// Reports whether the value is positive or negative Infinity.
    pub const fn is_infinite(&self) -> bool {
        self.0 & COMB_TOP5 == COMB_TOP4
    }

    /// Reports whether the value is neither Infinity nor NaN.
    pub const fn is_finite(&self) -> bool {
        !self.is_special()
    }

    /// Reports whether the value is Infinity or NaN.
    const fn is_special(&self) -> bool {
        self.0 & COMB_TOP4 == COMB_TOP4
    }

    /// Reports whether the value is zero of either sign.
    ///
    /// Coefficients above 10^34 - 1 are non-canonical and decode as
    /// zero.
    pub const fn is_zero(&self) -> bool {
        if !self.is_finite() {
            return false;
        }
        let coeff = self.coeff();
        coeff == 0 || coeff > MAX_COEFF
    }

    const fn is_form1(&self) -> bool {
        self.0 & COMB_TOP2 != COMB_TOP2
    }

    /// Returns the biased exponent.
    ///
    /// The result is only meaningful for finite values.
    pub(crate) const fn biased_exp(&self) -> u16 {
        debug_assert!(self.is_finite());

        let bits = if self.is_form1() {
            (self.0 >> FORM1_EXP_SHIFT) & EXP_MASK
        } else {
            (self.0 >> FORM2_EXP_SHIFT) & EXP_MASK
        };
        bits as u16
    }

    /// Returns the unbiased exponent, in [-6176, 6207].
    ///
    /// Only form-2 words can exceed 6111; they are non-canonical and
    /// decode as zero, but keep their exponent.
    pub(crate) const fn unbiased_exp(&self) -> i16 {
        self.biased_exp() as i16 - BIAS
    }

    /// Returns the raw coefficient, implicit form-2 prefix included.
    ///
    /// The result can exceed 10^34 - 1 for a non-canonical word; the
    /// caller decides how to treat it.
    pub(crate) const fn coeff(&self) -> u128 {
        debug_assert!(self.is_finite());

        if self.is_form1() {
            self.0 & FORM1_COEFF_MASK
        } else {
            FORM2_IMPLICIT | (self.0 & FORM2_COEFF_MASK)
        }
    }

    /// Creates a value from its 16-byte little-endian interchange
    /// encoding, as stored in a BSON decimal128 element.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(u128::from_le_bytes(bytes))
    }

    /// Returns the 16-byte little-endian interchange encoding.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0.to_le_bytes()
    }

    /// Creates a value directly from the 128-bit interchange word.
    pub const fn from_bits(bits: u128) -> Self {
        Self(bits)
    }

    /// Returns the 128-bit interchange word.
    pub const fn to_bits(self) -> u128 {
        self.0
    }
}

impl Default for Decimal128 {
    fn default() -> Self {
        Self::ZERO
    }
}

macro_rules! from_unsigned_impl {
    ($($ty:ty)+) => {
        $(impl From<$ty> for Decimal128 {
            /// The conversion is always exact.
            fn from(v: $ty) -> Self {
                Self::from_parts(false, 0, u128::from(v))
            }
        })+
    };
}
from_unsigned_impl!(u8 u16 u32 u64);

macro_rules! from_signed_impl {
    ($($ty:ty)+) => {
        $(impl From<$ty> for Decimal128 {
            /// The conversion is always exact.
            fn from(v: $ty) -> Self {
                Self::from_parts(v < 0, 0, u128::from(v.unsigned_abs()))
            }
        })+
    };
}
from_signed_impl!(i8 i16 i32 i64);

impl fmt::Debug for Decimal128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = self.signbit() as u8;
        if self.is_nan() {
            write!(f, "[{sign},NaN]")
        } else if self.is_infinite() {
            write!(f, "[{sign},inf]")
        } else {
            write!(f, "[{sign},{},{}]", self.coeff(), self.unbiased_exp())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(high: u64, low: u64) -> u128 {
        (u128::from(high) << 64) | u128::from(low)
    }

    #[test]
    fn test_from_parts() {
        let cases: [(bool, i16, u128, u64, u64); 6] = [
            (false, 0, 0, 0x3040000000000000, 0),
            (false, 0, 1, 0x3040000000000000, 1),
            (true, -1, 15, 0xb03e000000000000, 15),
            (true, 0, 0, 0xb040000000000000, 0),
            (false, MAX_EXP, MAX_COEFF, 0x5fffed09bead87c0, 0x378d8e63ffffffff),
            (false, MIN_EXP, 1, 0x0000000000000000, 1),
        ];
        for (i, (sign, exp, coeff, high, low)) in cases.into_iter().enumerate() {
            let d = Decimal128::from_parts(sign, exp, coeff);
            assert_eq!(d.to_bits(), bits(high, low), "#{i}");
            assert_eq!(d.signbit(), sign, "#{i}");
            assert_eq!(d.unbiased_exp(), exp, "#{i}");
            assert_eq!(d.coeff(), coeff, "#{i}");
        }
    }

    #[test]
    fn test_specials() {
        assert_eq!(Decimal128::NAN.to_bits(), bits(0x7c00000000000000, 0));
        assert_eq!(Decimal128::INFINITY.to_bits(), bits(0x7800000000000000, 0));
        assert_eq!(
            Decimal128::NEG_INFINITY.to_bits(),
            bits(0xf800000000000000, 0),
        );

        assert!(Decimal128::NAN.is_nan());
        assert!(!Decimal128::NAN.is_infinite());
        assert!(!Decimal128::NAN.is_finite());
        assert!(!Decimal128::NAN.is_sign_negative());
        assert!(!Decimal128::NAN.is_sign_positive());

        assert!(Decimal128::INFINITY.is_infinite());
        assert!(!Decimal128::INFINITY.is_nan());
        assert!(Decimal128::INFINITY.is_sign_positive());
        assert!(Decimal128::NEG_INFINITY.is_infinite());
        assert!(Decimal128::NEG_INFINITY.is_sign_negative());
    }

    #[test]
    fn test_zero() {
        assert!(Decimal128::ZERO.is_zero());
        assert!(Decimal128::from_parts(true, 0, 0).is_zero());
        assert!(!Decimal128::from_parts(false, 0, 1).is_zero());
        assert!(!Decimal128::NAN.is_zero());
        assert!(!Decimal128::INFINITY.is_zero());

        // Signed zeros are distinct words.
        assert_ne!(Decimal128::ZERO, Decimal128::from_parts(true, 0, 0));
    }

    #[test]
    fn test_non_canonical_form2() {
        // Top two combination bits set, but not a special value.
        let d = Decimal128::from_bits(bits(0x6c10000000000000, 0));
        assert!(d.is_finite());
        assert!(!d.is_form1());
        assert!(d.coeff() > MAX_COEFF);
        assert!(d.is_zero());
    }

    #[test]
    fn test_bytes_round_trip() {
        let d = Decimal128::from_parts(true, -1, 15);
        let want: [u8; 16] = [
            0x0f, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x3e, 0xb0,
        ];
        assert_eq!(d.to_bytes(), want);
        assert_eq!(Decimal128::from_bytes(want), d);
    }

    #[test]
    fn test_from_integers() {
        assert_eq!(Decimal128::from(0u8), Decimal128::ZERO);
        assert_eq!(Decimal128::from(42u64), Decimal128::from_parts(false, 0, 42));
        assert_eq!(Decimal128::from(-7i32), Decimal128::from_parts(true, 0, 7));
        assert_eq!(
            Decimal128::from(i64::MIN),
            Decimal128::from_parts(true, 0, 9223372036854775808),
        );
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", Decimal128::from_parts(true, -1, 15)),
            "[1,15,-1]",
        );
        assert_eq!(format!("{:?}", Decimal128::NAN), "[0,NaN]");
        assert_eq!(format!("{:?}", Decimal128::NEG_INFINITY), "[1,inf]");
    }
}
