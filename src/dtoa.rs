//! Decimal128 to numeral conversion.

use core::fmt::{self, Write};

use crate::arith;
use crate::dec128::{Decimal128, MAX_COEFF};

impl fmt::Display for Decimal128 {
    /// Renders the canonical numeral for the value.
    ///
    /// Notation is chosen from the decoded digits, not from however
    /// the value was originally written: with `sci_exp` the exponent
    /// of the leading digit, scientific notation is used when
    /// `sci_exp >= 34`, `sci_exp <= -7`, or the stored exponent is
    /// positive, and plain notation otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            // NaN never takes a sign.
            return f.write_str("NaN");
        }
        if self.signbit() {
            f.write_char('-')?;
        }
        if self.is_infinite() {
            return f.write_str("Infinity");
        }

        let exp = i32::from(self.unbiased_exp());
        let coeff = self.coeff();
        // Coefficients above 10^34 - 1 are non-canonical and decode as
        // zero, keeping their exponent.
        let coeff = if coeff > MAX_COEFF { 0 } else { coeff };

        // Peel nine digits at a time off the least significant end.
        // Four rounds cover any canonical coefficient.
        let mut buf = [0u8; 36];
        let mut v = coeff;
        for chunk in buf.rchunks_mut(9) {
            let (q, mut r) = arith::quorem1e9(v);
            for d in chunk.iter_mut().rev() {
                *d = (r % 10) as u8;
                r /= 10;
            }
            v = q;
        }
        debug_assert_eq!(v, 0);

        let digits = match buf.iter().position(|&d| d != 0) {
            Some(i) => &buf[i..],
            // Zero is a single digit.
            None => &buf[35..],
        };
        let ndigits = digits.len() as i32;

        let sci_exp = ndigits - 1 + exp;
        if sci_exp >= 34 || sci_exp <= -7 || exp > 0 {
            f.write_char(char::from(b'0' + digits[0]))?;
            if ndigits > 1 {
                f.write_char('.')?;
                for &d in &digits[1..] {
                    f.write_char(char::from(b'0' + d))?;
                }
            }
            return if sci_exp >= 0 {
                write!(f, "E+{sci_exp}")
            } else {
                write!(f, "E{sci_exp}")
            };
        }

        if exp >= 0 {
            // The plain branch only sees exponent zero.
            for &d in digits {
                f.write_char(char::from(b'0' + d))?;
            }
            return Ok(());
        }

        // Digits in front of the radix point, possibly none.
        let radix = ndigits + exp;
        if radix > 0 {
            for &d in &digits[..radix as usize] {
                f.write_char(char::from(b'0' + d))?;
            }
        } else {
            f.write_char('0')?;
        }
        f.write_char('.')?;
        for _ in radix..0 {
            f.write_char('0')?;
        }
        for &d in &digits[radix.max(0) as usize..] {
            f.write_char(char::from(b'0' + d))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn str_of(s: &str) -> String {
        Decimal128::parse(s).unwrap().to_string()
    }

    #[test]
    fn test_plain() {
        let cases: [(&str, &str); 8] = [
            ("0", "0"),
            ("-0", "-0"),
            ("1", "1"),
            ("-1.5", "-1.5"),
            ("123.450", "123.450"),
            ("0.000001", "0.000001"),
            ("-0.000", "-0.000"),
            ("12345678901234567890123456789012.34", "12345678901234567890123456789012.34"),
        ];
        for (i, (s, want)) in cases.into_iter().enumerate() {
            assert_eq!(str_of(s), want, "#{i}: {s}");
        }
    }

    #[test]
    fn test_scientific() {
        let cases: [(&str, &str); 7] = [
            // A positive exponent always forces scientific form.
            ("15E1", "1.5E+2"),
            ("1E3", "1E+3"),
            ("0E+6111", "0E+6111"),
            // Leading-digit exponent at or past 34.
            ("1.2345E+40", "1.2345E+40"),
            // Leading-digit exponent at or below -7.
            ("0.0000001", "1E-7"),
            ("1E-6176", "1E-6176"),
            ("-5.5E-100", "-5.5E-100"),
        ];
        for (i, (s, want)) in cases.into_iter().enumerate() {
            assert_eq!(str_of(s), want, "#{i}: {s}");
        }
    }

    #[test]
    fn test_notation_threshold() {
        // 1E-6 is the last plain rendering; 1E-7 tips to scientific.
        assert_eq!(str_of("1E-6"), "0.000001");
        assert_eq!(str_of("1E-7"), "1E-7");

        // 34 digits stay plain at exponent zero, and the same value
        // scaled one digit up goes scientific.
        let plain = "9999999999999999999999999999999999";
        assert_eq!(str_of(plain), plain);
        assert_eq!(
            str_of("9999999999999999999999999999999999E+1"),
            "9.999999999999999999999999999999999E+34",
        );
    }

    #[test]
    fn test_trimmed_value_reproduces_magnitude() {
        let got = str_of("10000000000000000000000000000000000");
        assert_eq!(got, format!("1.{}E+34", "0".repeat(33)));
    }

    #[test]
    fn test_specials() {
        assert_eq!(Decimal128::NAN.to_string(), "NaN");
        assert_eq!(Decimal128::INFINITY.to_string(), "Infinity");
        assert_eq!(Decimal128::NEG_INFINITY.to_string(), "-Infinity");

        // The sign of a NaN pattern is never printed.
        let signed_nan = Decimal128::from_bits(Decimal128::NAN.to_bits() | (1 << 127));
        assert_eq!(signed_nan.to_string(), "NaN");
    }

    #[test]
    fn test_non_canonical_decodes_as_zero() {
        // Combination field `11` without the special-value marker:
        // the coefficient is out of range and reads as zero, but the
        // exponent survives.
        let word = |biased: u128| (0x3u128 << 125) | (biased << 111) | 42;

        assert_eq!(Decimal128::from_bits(word(6176)).to_string(), "0");
        assert_eq!(Decimal128::from_bits(word(6196)).to_string(), "0E+20");
        assert_eq!(Decimal128::from_bits(word(6174)).to_string(), "0.00");
    }

    #[test]
    fn test_round_trip_examples() {
        let cases: [&str; 6] = [
            "0.001",
            "-0",
            "1.5E+3",
            "9.999999999999999999999999999999999E+6144",
            "1E-6176",
            "123456789.123456789",
        ];
        for (i, s) in cases.into_iter().enumerate() {
            let d = Decimal128::parse(s).unwrap();
            assert_eq!(Decimal128::parse(&d.to_string()).unwrap(), d, "#{i}: {s}");
        }
    }
}
