use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ecclesia_core::{Address, ChurchId, DomainResult, Entity, MemberId, Validator, digits_only};

/// Kind of legal registry a church is recorded under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistryType {
    /// Company registry (`00.000.000/0000-00`).
    #[default]
    Cnpj,
    /// Any other registry (nine digits).
    Other,
}

impl RegistryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryType::Cnpj => "CNPJ",
            RegistryType::Other => "OTHER",
        }
    }

    /// Apply the registry mask to raw input.
    ///
    /// Partial input is returned as digits.
    pub fn format_number(&self, raw: &str) -> String {
        let d = digits_only(raw);
        match self {
            RegistryType::Cnpj if d.len() == 14 => format!(
                "{}.{}.{}/{}-{}",
                &d[0..2],
                &d[2..5],
                &d[5..8],
                &d[8..12],
                &d[12..14]
            ),
            _ => d,
        }
    }
}

/// Church address; the backend keeps its own row id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChurchAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub address: Address,
}

/// Church as returned by `GET /churches`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Church {
    pub id: ChurchId,
    pub name: String,
    #[serde(default)]
    pub trade_name: String,
    #[serde(default)]
    pub registry_type: RegistryType,
    #[serde(default)]
    pub registry_number: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub foundation_date: Option<NaiveDate>,
    #[serde(default)]
    pub pastor_local_id: Option<MemberId>,
    #[serde(default)]
    pub pastor_local_name: Option<String>,
    #[serde(default)]
    pub address: ChurchAddress,
}

impl Church {
    pub fn formatted_registry(&self) -> String {
        self.registry_type.format_number(&self.registry_number)
    }
}

impl Entity for Church {
    type Id = ChurchId;

    fn id(&self) -> ChurchId {
        self.id
    }
}

/// Body of `POST /churches` and `PUT /churches/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChurchRequest {
    pub name: String,
    pub trade_name: String,
    #[serde(default)]
    pub registry_type: RegistryType,
    pub registry_number: String,
    pub foundation_date: Option<NaiveDate>,
    #[serde(default)]
    pub pastor_local_id: Option<MemberId>,
    pub address: Address,
}

impl ChurchRequest {
    pub fn validate(&self) -> DomainResult<()> {
        let mut v = Validator::new();
        v.required("name", &self.name, "name is required")
            .required("tradeName", &self.trade_name, "trade name is required")
            .required("registryNumber", &self.registry_number, "registry number is required")
            .present(
                "foundationDate",
                self.foundation_date.as_ref(),
                "foundation date is required",
            );
        self.address.check(&mut v);
        v.finish()
    }
}

impl From<&Church> for ChurchRequest {
    fn from(c: &Church) -> Self {
        Self {
            name: c.name.clone(),
            trade_name: c.trade_name.clone(),
            registry_type: c.registry_type,
            registry_number: c.registry_number.clone(),
            foundation_date: c.foundation_date,
            pastor_local_id: c.pastor_local_id,
            address: c.address.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHURCH_JSON: &str = r#"{
        "id": 3,
        "name": "Igreja Evangélica Central",
        "tradeName": "Central",
        "registryType": "CNPJ",
        "registryNumber": "12345678000199",
        "city": "Recife",
        "country": "Brasil",
        "foundationDate": "1987-09-12",
        "pastorLocalId": null,
        "pastorLocalName": null,
        "address": {"id": 9, "street": "Rua B", "number": "200", "complement": null,
                    "neighborhood": "Boa Vista", "city": "Recife", "state": "PE",
                    "country": "Brasil", "zipCode": "50050000"}
    }"#;

    #[test]
    fn decodes_backend_shape_with_flattened_address() {
        let church: Church = serde_json::from_str(CHURCH_JSON).unwrap();
        assert_eq!(church.address.id, Some(9));
        assert_eq!(church.address.address.street, "Rua B");
        assert_eq!(church.formatted_registry(), "12.345.678/0001-99");
        assert!(church.pastor_local_id.is_none());
    }

    #[test]
    fn request_from_church_needs_nationality() {
        let church: Church = serde_json::from_str(CHURCH_JSON).unwrap();
        let mut req = ChurchRequest::from(&church);
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().unwrap().has("address.nationality"));

        req.address.nationality = "Brasileira".into();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn other_registries_stay_unmasked() {
        assert_eq!(RegistryType::Other.format_number("123-456-789"), "123456789");
        assert_eq!(RegistryType::Cnpj.format_number("1234"), "1234");
    }
}
