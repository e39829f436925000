//! One generator per identifier scheme.
//!
//! Every function draws only from the supplied [`RandomSource`] and returns a fresh
//! string. Schemes whose rule cannot accept every candidate redraw the whole
//! candidate until it validates; there is no retry cap.

use tracing::trace;

use crate::checksum::national::{
    abn_check_value, cnpj_check_digits, czech_check_digit, nip_checksum, regon_check_digit,
};
use crate::checksum::{luhn_control_digit, mod11_check_digit};
use crate::domain::{GenerateOptions, RegonLength, Scheme};
use crate::error::{AppError, Result};
use crate::random::RandomSource;
use crate::service::pattern::fill_pattern;

/// Valid leading letters of a Spanish organisation number.
const SPANISH_LEADING_LETTERS: [char; 17] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'N', 'P', 'Q', 'R', 'S', 'U', 'V', 'W',
];

/// Valid leading digits of a Swedish organisation number.
const SWEDISH_LEADING_DIGITS: [u8; 8] = [1, 2, 3, 5, 6, 7, 8, 9];

/// Valid leading digits of a Norwegian organisation number.
const NORWEGIAN_LEADING_DIGITS: [u8; 2] = [8, 9];

const SA_PTY_LTD_PATTERN: &str = "{DIGITS:4}/{DIGITS:4-10}/07";
const SA_CLOSE_CORPORATION_PATTERN: &str =
    "CK{DIGITS:2}/{DIGITS:4-10}/23|{DIGITS:4}/{DIGITS:4-10}/23";
const SA_LISTED_COMPANY_PATTERN: &str = "{DIGITS:4}/{DIGITS:4-10}/06";
const SA_TRUST_PATTERN: &str = "IT{DIGITS:2-4}/{DIGITS:2-10}";

/// Generate an identifier for `scheme`.
///
/// # Errors
///
/// Returns [`AppError::InvalidConfig`] if REGON is asked for a length other than 9 or 14.
pub fn generate<R: RandomSource + ?Sized>(
    scheme: Scheme,
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<String> {
    let id = match scheme {
        Scheme::Ein => ein(rng),
        Scheme::DunsNumber => duns_number(rng),
        Scheme::SpanishOrganisationNumber => spanish_organisation_number(rng),
        Scheme::SwedishOrganisationNumber => swedish_organisation_number(rng),
        Scheme::CzechOrganisationNumber => czech_organisation_number(rng),
        Scheme::FrenchSirenNumber => french_siren_number(rng),
        Scheme::FrenchSiretNumber => french_siret_number(rng),
        Scheme::NorwegianOrganisationNumber => norwegian_organisation_number(rng),
        Scheme::AustralianBusinessNumber => australian_business_number(rng),
        Scheme::PolishTaxpayerIdentificationNumber => polish_taxpayer_identification_number(rng),
        Scheme::PolishRegisterOfNationalEconomy => {
            polish_register_of_national_economy(rng, options.length.unwrap_or(9))?
        }
        Scheme::BrazilianCompanyNumber => brazilian_company_number(rng, options.formatted),
        Scheme::SouthAfricanPtyLtdRegistrationNumber => {
            south_african_pty_ltd_registration_number(rng)?
        }
        Scheme::SouthAfricanCloseCorporationRegistrationNumber => {
            south_african_close_corporation_registration_number(rng)?
        }
        Scheme::SouthAfricanListedCompanyRegistrationNumber => {
            south_african_listed_company_registration_number(rng)?
        }
        Scheme::SouthAfricanTrustRegistrationNumber => {
            south_african_trust_registration_number(rng)?
        }
    };

    Ok(id)
}

/// US EIN, `NN-NNNNNNN`.
pub fn ein<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let mut digits = [0u8; 9];
    rng.fill_digits(&mut digits);
    insert_separators(&digits_to_string(&digits), &[(2, '-')])
}

/// DUNS number, `NN-NNN-NNNN`.
pub fn duns_number<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let mut digits = [0u8; 9];
    rng.fill_digits(&mut digits);
    insert_separators(&digits_to_string(&digits), &[(2, '-'), (5, '-')])
}

/// Spanish organisation number: one leading letter and 7 digits.
pub fn spanish_organisation_number<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let letter = *rng.sample_one(&SPANISH_LEADING_LETTERS);
    let mut digits = [0u8; 7];
    rng.fill_digits(&mut digits);

    let mut id = String::with_capacity(8);
    id.push(letter);
    id.push_str(&digits_to_string(&digits));
    id
}

/// Swedish organisation number: 9-digit base plus a Luhn control digit.
///
/// The third digit is at least 2.
pub fn swedish_organisation_number<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let mut digits = [0u8; 10];
    digits[0] = *rng.sample_one(&SWEDISH_LEADING_DIGITS);
    digits[1] = rng.digit();
    digits[2] = rng.uniform_int(2..=9);
    rng.fill_digits(&mut digits[3..9]);
    digits[9] = luhn_control_digit(&digits[..9]);
    digits_to_string(&digits)
}

/// Czech organisation number: 7 digits and a weighted check digit.
pub fn czech_organisation_number<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let mut base = [0u8; 7];
    rng.fill_digits(&mut base);
    let check = czech_check_digit(&base);

    let mut id = digits_to_string(&base);
    id.push(digit_char(check));
    id
}

/// French SIREN: 8 digits plus a Luhn control digit.
pub fn french_siren_number<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    digits_to_string(&siren_digits(rng))
}

/// French SIRET: a SIREN, a 4-digit location code below 100, and a Luhn control digit.
pub fn french_siret_number<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let siren = siren_digits(rng);
    let location = rng.uniform_int(0..=99);

    let mut digits = [0u8; 14];
    digits[..9].copy_from_slice(&siren);
    digits[11] = location / 10;
    digits[12] = location % 10;
    digits[13] = luhn_control_digit(&digits[..13]);
    digits_to_string(&digits)
}

fn siren_digits<R: RandomSource + ?Sized>(rng: &mut R) -> [u8; 9] {
    let mut digits = [0u8; 9];
    rng.fill_digits(&mut digits[..8]);
    digits[8] = luhn_control_digit(&digits[..8]);
    digits
}

/// Norwegian organisation number: leading 8 or 9, 7 digits, mod-11 check digit.
///
/// Bases whose remainder is 1 have no check digit and are redrawn.
pub fn norwegian_organisation_number<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let (base, check) = redraw_until(Scheme::NorwegianOrganisationNumber, || {
        let mut base = [0u8; 8];
        base[0] = *rng.sample_one(&NORWEGIAN_LEADING_DIGITS);
        rng.fill_digits(&mut base[1..]);
        mod11_check_digit(&base).map(|check| (base, check))
    });

    let mut id = digits_to_string(&base);
    id.push(digit_char(check));
    id
}

/// Australian Business Number: two check digits followed by a 9-digit base.
pub fn australian_business_number<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let mut base = [0u8; 9];
    rng.fill_digits(&mut base);
    let check = abn_check_value(&base);
    format!("{check:02}{}", digits_to_string(&base))
}

/// Polish NIP: 10 digits, the first three non-zero.
///
/// Redrawn until the weighted sum of the first 9 digits mod 11 equals the last digit.
pub fn polish_taxpayer_identification_number<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let (prefix, last) = redraw_until(Scheme::PolishTaxpayerIdentificationNumber, || {
        let mut prefix = [0u8; 9];
        for d in &mut prefix[..3] {
            *d = rng.non_zero_digit();
        }
        rng.fill_digits(&mut prefix[3..]);
        let last = rng.digit();
        (nip_checksum(&prefix) == u32::from(last)).then_some((prefix, last))
    });

    let mut id = digits_to_string(&prefix);
    id.push(digit_char(last));
    id
}

/// Polish REGON of 9 or 14 digits.
///
/// Redrawn until the check value of all but the last digit equals the last digit.
///
/// # Errors
///
/// Returns [`AppError::InvalidConfig`] if `length` is neither 9 nor 14.
pub fn polish_register_of_national_economy<R: RandomSource + ?Sized>(
    rng: &mut R,
    length: u32,
) -> Result<String> {
    let length = RegonLength::try_from(length)?;

    let digits = redraw_until(Scheme::PolishRegisterOfNationalEconomy, || {
        let mut digits = vec![0u8; length.digits()];
        rng.fill_digits(&mut digits);
        let valid = digits
            .split_last()
            .and_then(|(last, prefix)| regon_check_digit(prefix).map(|check| check == *last))
            .unwrap_or(false);
        valid.then_some(digits)
    });

    Ok(digits_to_string(&digits))
}

/// Brazilian CNPJ: 8 digits, branch `000N` with N non-zero, two check digits.
///
/// `formatted` renders `NN.NNN.NNN/NNNN-NN`.
pub fn brazilian_company_number<R: RandomSource + ?Sized>(rng: &mut R, formatted: bool) -> String {
    let mut base = [0u8; 12];
    rng.fill_digits(&mut base[..8]);
    base[11] = rng.non_zero_digit();
    let [first, second] = cnpj_check_digits(&base);

    let mut number = digits_to_string(&base);
    number.push(digit_char(first));
    number.push(digit_char(second));

    if formatted {
        insert_separators(&number, &[(2, '.'), (5, '.'), (8, '/'), (12, '-')])
    } else {
        number
    }
}

/// South African private company, `NNNN/N{4,10}/07`.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the built-in pattern fails to parse.
pub fn south_african_pty_ltd_registration_number<R: RandomSource + ?Sized>(
    rng: &mut R,
) -> Result<String> {
    fill_pattern(SA_PTY_LTD_PATTERN, rng).map_err(AppError::Internal)
}

/// South African close corporation, `CKNN/N{4,10}/23` or `NNNN/N{4,10}/23`.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the built-in pattern fails to parse.
pub fn south_african_close_corporation_registration_number<R: RandomSource + ?Sized>(
    rng: &mut R,
) -> Result<String> {
    fill_pattern(SA_CLOSE_CORPORATION_PATTERN, rng).map_err(AppError::Internal)
}

/// South African listed company, `NNNN/N{4,10}/06`.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the built-in pattern fails to parse.
pub fn south_african_listed_company_registration_number<R: RandomSource + ?Sized>(
    rng: &mut R,
) -> Result<String> {
    fill_pattern(SA_LISTED_COMPANY_PATTERN, rng).map_err(AppError::Internal)
}

/// South African trust, `ITN{2,4}/N{2,10}`.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the built-in pattern fails to parse.
pub fn south_african_trust_registration_number<R: RandomSource + ?Sized>(
    rng: &mut R,
) -> Result<String> {
    fill_pattern(SA_TRUST_PATTERN, rng).map_err(AppError::Internal)
}

/// Draw candidates until one is accepted.
fn redraw_until<T>(scheme: Scheme, mut draw: impl FnMut() -> Option<T>) -> T {
    let mut rejected: u64 = 0;

    loop {
        if let Some(value) = draw() {
            if rejected > 0 {
                metrics::counter!("bizid_candidates_rejected_total", "scheme" => scheme.as_str())
                    .increment(rejected);
            }
            return value;
        }

        rejected += 1;
        trace!(%scheme, rejected, "Candidate rejected, redrawing");
    }
}

fn digit_char(d: u8) -> char {
    char::from(b'0' + d)
}

fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| digit_char(d)).collect()
}

/// Insert each separator before the character at its offset in `value`.
fn insert_separators(value: &str, separators: &[(usize, char)]) -> String {
    let mut out = String::with_capacity(value.len() + separators.len());
    for (i, c) in value.chars().enumerate() {
        if let Some(&(_, sep)) = separators.iter().find(|(at, _)| *at == i) {
            out.push(sep);
        }
        out.push(c);
    }
    out
}
