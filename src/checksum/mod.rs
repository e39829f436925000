//! Check-digit algorithms.
//!
//! Pure functions over digit sequences (`&[u8]`, every element 0-9). Nothing here
//! draws random numbers or allocates beyond the returned value.
//!
//! The generic building blocks live in this module; per-registry post-processing
//! of the weighted sums lives in [`national`].

pub mod national;

/// Repeating weight cycle for the mod-11 check digit, applied from the rightmost digit.
const MOD11_WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];

/// Luhn-style control digit.
///
/// Walks the digits from least to most significant, doubling every digit at an
/// even position in that order and adding the decimal digits of each product.
/// Always yields a single digit.
#[must_use]
pub fn luhn_control_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let value = if i % 2 == 0 {
                u32::from(d) * 2
            } else {
                u32::from(d)
            };
            value / 10 + value % 10
        })
        .sum();

    if sum % 10 == 0 {
        0
    } else {
        to_digit((sum / 10 + 1) * 10 - sum)
    }
}

/// Weighted mod-11 check digit with the cyclic weights `2..=7`.
///
/// Returns `None` when the remainder is 1: no digit makes such a candidate valid,
/// and callers are expected to discard it and draw again.
#[must_use]
pub fn mod11_check_digit(digits: &[u8]) -> Option<u8> {
    let sum: u32 = digits
        .iter()
        .rev()
        .zip(MOD11_WEIGHTS.iter().cycle())
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();

    match sum % 11 {
        0 => Some(0),
        1 => None,
        r => Some(to_digit(11 - r)),
    }
}

/// Plain weighted sum, aligned from the most significant digit.
///
/// `digits` and `weights` must have the same length.
#[must_use]
pub fn weighted_sum(digits: &[u8], weights: &[u32]) -> u32 {
    debug_assert_eq!(digits.len(), weights.len(), "weight vector length mismatch");

    digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum()
}

/// Narrow a value already reduced below 10.
#[allow(clippy::cast_possible_truncation)]
const fn to_digit(value: u32) -> u8 {
    (value % 10) as u8
}
