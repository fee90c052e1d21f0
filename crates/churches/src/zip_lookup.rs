//! Address suggestions from a CEP lookup service (ViaCEP response shape).

use serde::Deserialize;

use ecclesia_core::Address;

/// Country filled in for every CEP hit.
pub const LOOKUP_COUNTRY: &str = "Brasil";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum ErrorFlag {
    Bool(bool),
    Text(String),
}

/// One lookup response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddressSuggestion {
    #[serde(default)]
    pub cep: String,
    #[serde(default, rename = "logradouro")]
    pub street: String,
    #[serde(default, rename = "bairro")]
    pub neighborhood: String,
    #[serde(default, rename = "localidade")]
    pub city: String,
    #[serde(default, rename = "uf")]
    pub state: String,
    #[serde(default)]
    erro: Option<ErrorFlag>,
}

impl AddressSuggestion {
    /// The service answers 200 with `{"erro": true}` for unknown codes.
    pub fn is_miss(&self) -> bool {
        match &self.erro {
            Some(ErrorFlag::Bool(b)) => *b,
            Some(ErrorFlag::Text(s)) => s.eq_ignore_ascii_case("true"),
            None => false,
        }
    }

    /// Overwrite the fields the lookup knows about.
    pub fn apply_to(&self, address: &mut Address) {
        address.street = self.street.clone();
        address.neighborhood = self.neighborhood.clone();
        address.city = self.city.clone();
        address.state = self.state.clone();
        address.country = LOOKUP_COUNTRY.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_fills_address_and_keeps_number() {
        let hit: AddressSuggestion = serde_json::from_str(
            r#"{"cep":"01001-000","logradouro":"Praça da Sé","complemento":"lado ímpar",
                "bairro":"Sé","localidade":"São Paulo","uf":"SP","ibge":"3550308"}"#,
        )
        .unwrap();
        assert!(!hit.is_miss());

        let mut address = Address {
            number: "100".into(),
            ..Address::default()
        };
        hit.apply_to(&mut address);
        assert_eq!(address.street, "Praça da Sé");
        assert_eq!(address.city, "São Paulo");
        assert_eq!(address.country, "Brasil");
        assert_eq!(address.number, "100");
    }

    #[test]
    fn miss_is_detected_in_both_spellings() {
        let a: AddressSuggestion = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        let b: AddressSuggestion = serde_json::from_str(r#"{"erro": "true"}"#).unwrap();
        assert!(a.is_miss() && b.is_miss());
    }
}
