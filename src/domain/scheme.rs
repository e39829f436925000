//! Identifier schemes and their descriptors.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// National identifier scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// US Employer Identification Number.
    Ein,
    /// Dun & Bradstreet DUNS number.
    DunsNumber,
    /// Spanish organisation number (CIF).
    SpanishOrganisationNumber,
    /// Swedish organisation number.
    SwedishOrganisationNumber,
    /// Czech organisation number (IČO).
    CzechOrganisationNumber,
    /// French SIREN.
    FrenchSirenNumber,
    /// French SIRET.
    FrenchSiretNumber,
    /// Norwegian organisation number.
    NorwegianOrganisationNumber,
    /// Australian Business Number.
    AustralianBusinessNumber,
    /// Polish taxpayer identification number (NIP).
    PolishTaxpayerIdentificationNumber,
    /// Polish register of national economy (REGON).
    PolishRegisterOfNationalEconomy,
    /// Brazilian company number (CNPJ).
    BrazilianCompanyNumber,
    /// South African private company registration number.
    SouthAfricanPtyLtdRegistrationNumber,
    /// South African close corporation registration number.
    SouthAfricanCloseCorporationRegistrationNumber,
    /// South African listed company registration number.
    SouthAfricanListedCompanyRegistrationNumber,
    /// South African trust registration number.
    SouthAfricanTrustRegistrationNumber,
}

impl Scheme {
    /// Every supported scheme.
    pub const ALL: [Self; 16] = [
        Self::Ein,
        Self::DunsNumber,
        Self::SpanishOrganisationNumber,
        Self::SwedishOrganisationNumber,
        Self::CzechOrganisationNumber,
        Self::FrenchSirenNumber,
        Self::FrenchSiretNumber,
        Self::NorwegianOrganisationNumber,
        Self::AustralianBusinessNumber,
        Self::PolishTaxpayerIdentificationNumber,
        Self::PolishRegisterOfNationalEconomy,
        Self::BrazilianCompanyNumber,
        Self::SouthAfricanPtyLtdRegistrationNumber,
        Self::SouthAfricanCloseCorporationRegistrationNumber,
        Self::SouthAfricanListedCompanyRegistrationNumber,
        Self::SouthAfricanTrustRegistrationNumber,
    ];

    /// Wire name, also used as the metrics label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ein => "ein",
            Self::DunsNumber => "duns_number",
            Self::SpanishOrganisationNumber => "spanish_organisation_number",
            Self::SwedishOrganisationNumber => "swedish_organisation_number",
            Self::CzechOrganisationNumber => "czech_organisation_number",
            Self::FrenchSirenNumber => "french_siren_number",
            Self::FrenchSiretNumber => "french_siret_number",
            Self::NorwegianOrganisationNumber => "norwegian_organisation_number",
            Self::AustralianBusinessNumber => "australian_business_number",
            Self::PolishTaxpayerIdentificationNumber => "polish_taxpayer_identification_number",
            Self::PolishRegisterOfNationalEconomy => "polish_register_of_national_economy",
            Self::BrazilianCompanyNumber => "brazilian_company_number",
            Self::SouthAfricanPtyLtdRegistrationNumber => {
                "south_african_pty_ltd_registration_number"
            }
            Self::SouthAfricanCloseCorporationRegistrationNumber => {
                "south_african_close_corporation_registration_number"
            }
            Self::SouthAfricanListedCompanyRegistrationNumber => {
                "south_african_listed_company_registration_number"
            }
            Self::SouthAfricanTrustRegistrationNumber => "south_african_trust_registration_number",
        }
    }

    /// Static description of how this scheme is built.
    #[must_use]
    pub const fn descriptor(self) -> SchemeDescriptor {
        let (check, policy, digits) = match self {
            Self::Ein | Self::DunsNumber => (CheckRule::None, GenerationPolicy::Direct, 9),
            Self::SpanishOrganisationNumber => (CheckRule::None, GenerationPolicy::Direct, 7),
            Self::SwedishOrganisationNumber => (CheckRule::Luhn, GenerationPolicy::Direct, 10),
            Self::CzechOrganisationNumber => (CheckRule::Czech, GenerationPolicy::Direct, 8),
            Self::FrenchSirenNumber => (CheckRule::Luhn, GenerationPolicy::Direct, 9),
            Self::FrenchSiretNumber => (CheckRule::Luhn, GenerationPolicy::Direct, 14),
            Self::NorwegianOrganisationNumber => {
                (CheckRule::Mod11, GenerationPolicy::Rejection, 9)
            }
            Self::AustralianBusinessNumber => (CheckRule::Abn, GenerationPolicy::Direct, 11),
            Self::PolishTaxpayerIdentificationNumber => {
                (CheckRule::Nip, GenerationPolicy::Rejection, 10)
            }
            Self::PolishRegisterOfNationalEconomy => {
                (CheckRule::Regon, GenerationPolicy::Rejection, 9)
            }
            Self::BrazilianCompanyNumber => (CheckRule::Cnpj, GenerationPolicy::Direct, 14),
            Self::SouthAfricanPtyLtdRegistrationNumber
            | Self::SouthAfricanCloseCorporationRegistrationNumber
            | Self::SouthAfricanListedCompanyRegistrationNumber
            | Self::SouthAfricanTrustRegistrationNumber => {
                (CheckRule::Pattern, GenerationPolicy::PatternFill, 0)
            }
        };

        SchemeDescriptor {
            scheme: self,
            check,
            policy,
            digits,
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == s)
            .ok_or_else(|| AppError::NotFound(format!("scheme '{s}'")))
    }
}

/// Check rule a scheme applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckRule {
    /// No check digit.
    None,
    /// Luhn-style control digit.
    Luhn,
    /// Weighted mod 11, cyclic weights 2..7.
    Mod11,
    /// Czech weighted sum.
    Czech,
    /// ABN weighted mod 89.
    Abn,
    /// NIP weighted mod 11 compared to the last digit.
    Nip,
    /// REGON weighted mod 11 compared to the last digit.
    Regon,
    /// CNPJ two-pass weighted mod 11.
    Cnpj,
    /// Shape only, filled from a pattern.
    Pattern,
}

/// How a candidate becomes an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPolicy {
    /// Check digits always computable; drawn once.
    Direct,
    /// Candidates redrawn until the check relationship holds.
    Rejection,
    /// Pattern fill without a checksum.
    PatternFill,
}

/// Descriptor of a scheme, as listed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeDescriptor {
    /// Scheme.
    pub scheme: Scheme,
    /// Check rule.
    pub check: CheckRule,
    /// Generation policy.
    pub policy: GenerationPolicy,
    /// Count of decimal digits in the output, 0 if variable.
    pub digits: u8,
}

/// REGON lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegonLength {
    /// 9-digit form.
    #[default]
    Nine,
    /// 14-digit form.
    Fourteen,
}

impl RegonLength {
    /// Number of digits.
    #[must_use]
    pub const fn digits(self) -> usize {
        match self {
            Self::Nine => 9,
            Self::Fourteen => 14,
        }
    }
}

impl TryFrom<u32> for RegonLength {
    type Error = AppError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            9 => Ok(Self::Nine),
            14 => Ok(Self::Fourteen),
            _ => Err(AppError::InvalidConfig(
                "Length should be 9 or 14".to_string(),
            )),
        }
    }
}

/// Per-call generation options.
///
/// `formatted` applies to the Brazilian company number; `length` to REGON.
/// Other schemes ignore both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct GenerateOptions {
    /// Insert separators where the scheme defines them.
    #[serde(default)]
    pub formatted: bool,

    /// Requested length (9 or 14 for REGON; defaults to 9).
    #[serde(default)]
    pub length: Option<u32>,
}
