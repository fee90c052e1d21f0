//! Postal address value object shared by members and churches.

use serde::{Deserialize, Serialize};

use crate::validation::Validator;
use crate::value_object::{ValueObject, ZipCode};

/// Postal address as exchanged with the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub complement: Option<String>,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub zip_code: String,
}

impl Address {
    pub fn zip(&self) -> ZipCode {
        ZipCode::new(&self.zip_code)
    }

    /// One-line rendering for tables.
    pub fn summary(&self) -> String {
        let mut line = format!("{}, {}", self.street, self.number);
        if let Some(c) = self.complement.as_deref().filter(|c| !c.trim().is_empty()) {
            line.push_str(" - ");
            line.push_str(c);
        }
        format!("{line}, {} - {}/{}", self.neighborhood, self.city, self.state)
    }

    /// Every field but the complement is mandatory.
    pub fn check(&self, v: &mut Validator) {
        v.required("address.street", &self.street, "street is required")
            .required("address.number", &self.number, "number is required")
            .required("address.neighborhood", &self.neighborhood, "neighborhood is required")
            .required("address.zipCode", &self.zip_code, "zip code is required")
            .required("address.city", &self.city, "city is required")
            .required("address.state", &self.state, "state is required")
            .required("address.country", &self.country, "country is required")
            .required("address.nationality", &self.nationality, "nationality is required");
    }
}

impl ValueObject for Address {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_skips_blank_complement() {
        let address = Address {
            street: "Rua A".into(),
            number: "10".into(),
            complement: Some(" ".into()),
            neighborhood: "Centro".into(),
            city: "Recife".into(),
            state: "PE".into(),
            ..Address::default()
        };
        assert_eq!(address.summary(), "Rua A, 10, Centro - Recife/PE");
    }

    #[test]
    fn decodes_null_complement() {
        let address: Address =
            serde_json::from_str(r#"{"street":"Rua A","complement":null,"zipCode":"50000-000"}"#)
                .unwrap();
        assert!(address.complement.is_none());
        assert!(address.zip().is_lookup_ready());
    }
}
