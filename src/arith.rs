//! Fixed-width arithmetic helpers for the 113-bit significand.
//!
//! The interchange format never needs more than `u128`, so everything
//! here is a thin wrapper over native operators.

/// Returns `(q, r)` such that
///
/// ```text
/// q = v / 10^9
/// r = v % 10^9
/// ```
///
/// One step of the digit extraction used by the stringifier: each call
/// peels nine decimal digits off the least-significant end.
pub(crate) const fn quorem1e9(v: u128) -> (u128, u32) {
    const D: u128 = 1_000_000_000;

    (v / D, (v % D) as u32)
}

/// Returns the number of decimal digits in `x`.
///
/// The result is in [1, 39].
pub(crate) const fn digits(mut x: u128) -> u32 {
    // Ensure that `x` is non-zero so that `digits(0) == 1`.
    //
    // `x|1` cannot change the result: it never increases the bit length
    // of a non-zero `x`, and the largest integer below any power of ten
    // is all-nines, which is odd.
    x |= 1;

    let r = ((bitlen(x) + 1) * 1233) / 4096;
    // `r` is in [0, 38], so the table lookup cannot panic.
    r + (x >= POW10[r as usize]) as u32
}

/// Returns the minimum number of bits required to represent `x`.
const fn bitlen(x: u128) -> u32 {
    u128::BITS - x.leading_zeros()
}

/// All 128-bit powers of 10.
const POW10: [u128; 39] = {
    let mut tab = [0u128; 39];
    let mut i = 0;
    while i < tab.len() {
        tab[i] = 10u128.pow(i as u32);
        i += 1;
    }
    tab
};
