//! Numeral to decimal128 conversion.

use core::str::FromStr;

use smallvec::SmallVec;

use crate::arith;
use crate::conv::{ParseError, MAX_INPUT_LEN};
use crate::dec128::{Decimal128, DIGITS, MAX_EXP, MIN_EXP};

/// Digits kept for the coefficient.
const WINDOW: usize = DIGITS as usize;

impl Decimal128 {
    /// Parses a decimal numeral without rounding.
    ///
    /// The accepted grammar is an optional sign, digits with at most
    /// one radix point, and an optional `E`/`e` exponent suffix, or
    /// the case-insensitive literals `Infinity`, `inf`, and `NaN`.
    ///
    /// Values whose significant digits do not fit in the 34-digit
    /// coefficient fail with [`ParseError::InexactRounding`]; use
    /// [`parse_with_rounding`][Self::parse_with_rounding] to round
    /// them half-to-even instead. Values too small for the minimum
    /// exponent clamp to signed zero in both modes.
    ///
    /// ```
    /// use decimal128::Decimal128;
    ///
    /// let d = Decimal128::parse("1.5E3")?;
    /// assert_eq!(d.to_string(), "1.5E+3");
    /// assert!(Decimal128::parse("1.0000000000000000000000000000000001").is_err());
    /// # Ok::<(), decimal128::ParseError>(())
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        from_numeral(s, false)
    }

    /// Parses a decimal numeral, rounding half-to-even when the value
    /// has more than 34 significant digits.
    ///
    /// A rounding carry out of the most significant digit at the
    /// maximum exponent saturates to signed Infinity.
    ///
    /// ```
    /// use decimal128::Decimal128;
    ///
    /// let d = Decimal128::parse_with_rounding("10000000000000000000000000000000051")?;
    /// assert_eq!(d.to_string(), "1.000000000000000000000000000000005E+34");
    /// # Ok::<(), decimal128::ParseError>(())
    /// ```
    pub fn parse_with_rounding(s: &str) -> Result<Self, ParseError> {
        from_numeral(s, true)
    }
}

impl FromStr for Decimal128 {
    type Err = ParseError;

    /// Strict parsing, as [`Decimal128::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn from_numeral(input: &str, round: bool) -> Result<Decimal128, ParseError> {
    if input.len() >= MAX_INPUT_LEN {
        return Err(ParseError::TooLong(input.len()));
    }
    let (sign, rest) = match input.as_bytes().split_first() {
        Some((&b'-', rest)) => (true, rest),
        Some((&b'+', rest)) => (false, rest),
        Some(_) => (false, input.as_bytes()),
        None => return Err(ParseError::Empty),
    };
    if !matches!(rest.first(), Some(&(b'0'..=b'9' | b'.'))) {
        return parse_special(sign, rest, input);
    }

    // Digits from the first non-zero digit onward. Everything read is
    // kept so that rounding can see past the 34-digit window.
    let mut sig: SmallVec<[u8; WINDOW + 2]> = SmallVec::new();
    let mut digits_read = 0usize;
    let mut radix_shift = 0i64;
    let mut saw_radix = false;

    let mut s = rest;
    while let Some((&c, tail)) = s.split_first() {
        match c {
            b'.' => {
                if saw_radix {
                    return Err(ParseError::invalid(input, "more than one radix point"));
                }
                saw_radix = true;
            }
            b'0'..=b'9' => {
                if c != b'0' || !sig.is_empty() {
                    sig.push(c - b'0');
                }
                if saw_radix {
                    radix_shift += 1;
                }
                digits_read += 1;
            }
            _ => break,
        }
        s = tail;
    }
    if digits_read == 0 {
        return Err(ParseError::invalid(input, "no digits"));
    }

    let mut exp: i64 = match s.split_first() {
        None => 0,
        Some((&(b'e' | b'E'), tail)) => {
            parse_exp(tail).ok_or_else(|| ParseError::invalid(input, "malformed exponent"))?
        }
        Some(_) => return Err(ParseError::invalid(input, "trailing characters")),
    };
    exp = exp.saturating_sub(radix_shift);

    // Significant digits: the run from the first non-zero digit with
    // trailing zeros trimmed. Zero when the value is zero.
    let mut significant = sig.len();
    while significant > 0 && sig[significant - 1] == 0 {
        significant -= 1;
    }

    let mut digits = [0u8; WINDOW];
    let n_stored = sig.len().clamp(1, WINDOW);
    digits[..sig.len().min(WINDOW)].copy_from_slice(&sig[..sig.len().min(WINDOW)]);
    let mut n_digits = sig.len().max(1);
    let mut last_digit = n_stored - 1;

    // Pull the exponent down to the ceiling by widening the digit
    // window with trailing zeros.
    while exp > i64::from(MAX_EXP) {
        last_digit += 1;
        if last_digit >= WINDOW {
            if significant == 0 {
                exp = i64::from(MAX_EXP);
                break;
            }
            return Err(ParseError::overflow(input));
        }
        exp -= 1;
    }

    // Push the exponent up to the floor, and drop digits read past the
    // 34-digit window, by narrowing from the least significant end.
    while exp < i64::from(MIN_EXP) || n_stored < n_digits {
        if last_digit == 0 {
            // The window is exhausted: the value is too small for the
            // minimum exponent and clamps to signed zero.
            exp = i64::from(MIN_EXP);
            significant = 0;
            break;
        }
        if n_stored < n_digits {
            n_digits -= 1;
        } else {
            last_digit -= 1;
        }
        if exp < i64::from(MAX_EXP) {
            exp += 1;
        } else if significant == 0 {
            exp = i64::from(MAX_EXP);
            break;
        } else {
            return Err(ParseError::overflow(input));
        }
    }

    // The kept window is shorter than the significant run, so at least
    // one non-zero digit is being discarded.
    let kept = last_digit + 1;
    if kept < significant {
        if !round {
            return Err(ParseError::inexact(input));
        }
        let round_digit = sig[kept];
        let round_up = match round_digit {
            6.. => true,
            5 => digits[last_digit] % 2 == 1 || sig[kept + 1..significant].iter().any(|&d| d != 0),
            _ => false,
        };
        if round_up {
            let mut i = last_digit;
            loop {
                if digits[i] < 9 {
                    digits[i] += 1;
                    break;
                }
                digits[i] = 0;
                if i == 0 {
                    // Carry out of the top digit at the exponent
                    // ceiling saturates.
                    if exp >= i64::from(MAX_EXP) {
                        return Ok(Decimal128::inf(sign));
                    }
                    exp += 1;
                    digits[0] = 1;
                    break;
                }
                i -= 1;
            }
        }
    }

    let coeff = if significant == 0 {
        0
    } else {
        digits[..kept]
            .iter()
            .fold(0u128, |c, &d| c * 10 + u128::from(d))
    };
    debug_assert!(arith::digits(coeff) <= DIGITS);

    Ok(Decimal128::from_parts(sign, exp as i16, coeff))
}

/// Recognizes the whole-value literals `Infinity`, `inf`, and `NaN`,
/// case-insensitively.
fn parse_special(sign: bool, rest: &[u8], input: &str) -> Result<Decimal128, ParseError> {
    if rest.eq_ignore_ascii_case(b"infinity") || rest.eq_ignore_ascii_case(b"inf") {
        return Ok(Decimal128::inf(sign));
    }
    if rest.eq_ignore_ascii_case(b"nan") {
        // There is a single NaN pattern; a parsed sign is dropped.
        return Ok(Decimal128::NAN);
    }
    Err(ParseError::invalid(input, "unrecognized literal"))
}

/// Parses an exponent suffix: an optional sign and one or more digits.
///
/// Saturates instead of overflowing; every saturated value is far
/// outside [-6176, 6111], so clamping is unaffected.
fn parse_exp(s: &[u8]) -> Option<i64> {
    let (neg, digits) = match s.split_first() {
        Some((&b'-', tail)) => (true, tail),
        Some((&b'+', tail)) => (false, tail),
        _ => (false, s),
    };
    if digits.is_empty() {
        return None;
    }
    let mut exp = 0i64;
    for &c in digits {
        if !c.is_ascii_digit() {
            return None;
        }
        exp = exp.saturating_mul(10).saturating_add(i64::from(c - b'0'));
    }
    Some(if neg { -exp } else { exp })
}
