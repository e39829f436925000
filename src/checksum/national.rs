//! Registry-specific check rules built on [`weighted_sum`].

use super::{to_digit, weighted_sum};

/// Czech IČO weights over the 7-digit base.
pub const CZECH_WEIGHTS: [u32; 7] = [8, 7, 6, 5, 4, 3, 2];

/// Australian ABN weights over the 11-digit working value.
pub const ABN_WEIGHTS: [u32; 11] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

/// Polish NIP weights over the first 9 digits.
pub const NIP_WEIGHTS: [u32; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];

/// Polish REGON weights for the 9-digit form.
pub const REGON_9_WEIGHTS: [u32; 8] = [8, 9, 2, 3, 4, 5, 6, 7];

/// Polish REGON weights for the 14-digit form.
pub const REGON_14_WEIGHTS: [u32; 13] = [2, 4, 8, 5, 0, 9, 7, 3, 6, 1, 2, 4, 8];

/// Brazilian CNPJ weight cycle, consumed continuously across both passes.
pub const CNPJ_WEIGHTS: [u32; 13] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2, 6];

/// Check digit for a 7-digit Czech organisation number base.
#[must_use]
pub fn czech_check_digit(base: &[u8; 7]) -> u8 {
    let sum = weighted_sum(base, &CZECH_WEIGHTS);
    to_digit((11 - sum % 11) % 10)
}

/// Leading two-digit check value of an ABN, from its trailing 9 digits.
///
/// The base is prefixed with two zeros before weighting. The result is always in `11..=99`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn abn_check_value(base: &[u8; 9]) -> u8 {
    let mut working = [0u8; 11];
    working[2..].copy_from_slice(base);

    let sum = weighted_sum(&working, &ABN_WEIGHTS);
    (99 - sum % 89) as u8
}

/// NIP checksum over the first 9 digits: weighted sum mod 11.
///
/// A result of 10 matches no digit, so such candidates can never be valid.
#[must_use]
pub fn nip_checksum(prefix: &[u8; 9]) -> u32 {
    weighted_sum(prefix, &NIP_WEIGHTS) % 11
}

/// REGON check value over every digit but the last.
///
/// Returns `None` if `prefix` has neither 8 nor 13 digits. A remainder of 10 maps to 0.
#[must_use]
pub fn regon_check_digit(prefix: &[u8]) -> Option<u8> {
    let weights: &[u32] = match prefix.len() {
        8 => &REGON_9_WEIGHTS,
        13 => &REGON_14_WEIGHTS,
        _ => return None,
    };

    let sum = weighted_sum(prefix, weights) % 11;
    Some(if sum == 10 { 0 } else { to_digit(sum) })
}

/// Both CNPJ check digits for a 12-digit base.
///
/// Each pass weighs the sequence grown so far, and the weight cycle keeps
/// advancing between passes.
#[must_use]
pub fn cnpj_check_digits(base: &[u8; 12]) -> [u8; 2] {
    let mut digits = [0u8; 14];
    digits[..12].copy_from_slice(base);
    let mut factors = CNPJ_WEIGHTS.iter().cycle();

    for pass in 0..2 {
        let len = 12 + pass;
        let checksum: u32 = digits[..len]
            .iter()
            .zip(factors.by_ref())
            .map(|(&d, &w)| u32::from(d) * w)
            .sum::<u32>()
            % 11;
        digits[len] = if checksum < 2 {
            0
        } else {
            to_digit(11 - checksum)
        };
    }

    [digits[12], digits[13]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_czech_known_value() {
        assert_eq!(czech_check_digit(&[9, 0, 6, 4, 2, 7, 4]), 1);
    }

    #[test]
    fn test_czech_remainder_one_maps_to_zero() {
        // 6 * 2 = 12, 12 mod 11 = 1
        assert_eq!(czech_check_digit(&[0, 0, 0, 0, 0, 0, 6]), 0);
    }

    #[test]
    fn test_abn_known_value() {
        assert_eq!(abn_check_value(&[5, 7, 9, 3, 9, 6, 1, 7, 0]), 93);
    }

    #[test]
    fn test_abn_all_zero() {
        assert_eq!(abn_check_value(&[0; 9]), 99);
    }

    #[test]
    fn test_nip_known_value() {
        assert_eq!(nip_checksum(&[2, 7, 6, 7, 5, 4, 9, 4, 6]), 3);
    }

    #[test]
    fn test_regon_9_known_value() {
        assert_eq!(regon_check_digit(&[7, 8, 8, 4, 3, 5, 9, 7]), Some(0));
    }

    #[test]
    fn test_regon_14_zero_weight_position() {
        // Only the fifth digit is non-zero and its weight is 0.
        let mut prefix = [0u8; 13];
        prefix[4] = 9;
        assert_eq!(regon_check_digit(&prefix), Some(0));

        prefix[0] = 1;
        assert_eq!(regon_check_digit(&prefix), Some(2));
    }

    #[test]
    fn test_regon_rejects_other_lengths() {
        assert_eq!(regon_check_digit(&[1, 2, 3]), None);
        assert_eq!(regon_check_digit(&[0; 9]), None);
    }

    #[test]
    fn test_cnpj_known_value() {
        assert_eq!(cnpj_check_digits(&[3, 7, 2, 0, 5, 3, 2, 2, 0, 0, 0, 5]), [0, 0]);
        // 11.222.333/0001-81
        assert_eq!(cnpj_check_digits(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]), [8, 1]);
    }

    #[test]
    fn test_cnpj_second_pass_continues_cycle() {
        let mut base = [0u8; 12];
        base[0] = 1;
        // first pass: 1 * 5 = 5, check 6
        // second pass resumes at weight 6: 1 * 6 + 6 * 2 = 18, check 4
        // (a restarted cycle would give 1 * 5 + 6 * 6 = 41, check 3)
        assert_eq!(cnpj_check_digits(&base), [6, 4]);
    }
}
