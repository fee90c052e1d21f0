//! Value objects: equality by value, not identity.

use serde::{Deserialize, Serialize};

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; two
/// CPFs with the same digits are the same CPF regardless of how they were typed.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Keep only ASCII digits.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Apply the `999.999.999-99` CPF mask.
///
/// Non-digits are dropped first. When fewer than 11 digits remain the digits
/// are returned unmasked; extra digits beyond the eleventh are appended as-is.
pub fn format_cpf(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() < 11 {
        return digits;
    }
    format!(
        "{}.{}.{}-{}{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11],
        &digits[11..]
    )
}

/// Brazilian individual taxpayer number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    /// Normalize user input (punctuation stripped).
    pub fn new(raw: &str) -> Self {
        Self(digits_only(raw))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    /// Whether exactly 11 digits were supplied.
    pub fn is_complete(&self) -> bool {
        self.0.len() == 11
    }

    pub fn masked(&self) -> String {
        format_cpf(&self.0)
    }
}

impl ValueObject for Cpf {}

impl core::fmt::Display for Cpf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.masked())
    }
}

/// Brazilian postal code (CEP).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn new(raw: &str) -> Self {
        Self(digits_only(raw))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    /// Address lookup only makes sense for a full 8-digit CEP.
    pub fn is_lookup_ready(&self) -> bool {
        self.0.len() == 8
    }
}

impl ValueObject for ZipCode {}

impl core::fmt::Display for ZipCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_lookup_ready() {
            write!(f, "{}-{}", &self.0[0..5], &self.0[5..])
        } else {
            f.write_str(&self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_eleven_digits() {
        assert_eq!(format_cpf("12345678901"), "123.456.789-01");
        assert_eq!(format_cpf("123.456.789-01"), "123.456.789-01");
    }

    #[test]
    fn short_input_is_returned_as_digits() {
        assert_eq!(format_cpf("123.456"), "123456");
        assert_eq!(format_cpf(""), "");
    }

    #[test]
    fn extra_digits_are_appended() {
        assert_eq!(format_cpf("123456789012"), "123.456.789-012");
    }

    #[test]
    fn cpf_normalizes_input() {
        let a = Cpf::new("123.456.789-01");
        let b = Cpf::new("12345678901");
        assert_eq!(a, b);
        assert!(a.is_complete());
        assert_eq!(a.to_string(), "123.456.789-01");
    }

    #[test]
    fn zip_code_lookup_readiness() {
        assert!(ZipCode::new("01001-000").is_lookup_ready());
        assert!(!ZipCode::new("0100100").is_lookup_ready());
        assert_eq!(ZipCode::new("01001000").to_string(), "01001-000");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: masking never adds or drops digits.
            #[test]
            fn mask_preserves_digits(raw in "[0-9 .\\-/a-z]{0,20}") {
                prop_assert_eq!(digits_only(&format_cpf(&raw)), digits_only(&raw));
            }

            /// Property: any 11-digit input is fully masked.
            #[test]
            fn eleven_digits_always_masked(digits in "[0-9]{11}") {
                let masked = format_cpf(&digits);
                prop_assert_eq!(masked.len(), 14);
                prop_assert_eq!(&masked[3..4], ".");
                prop_assert_eq!(&masked[7..8], ".");
                prop_assert_eq!(&masked[11..12], "-");
            }
        }
    }
}
