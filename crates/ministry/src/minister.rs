use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ecclesia_core::{
    Address, ChurchId, Cpf, DomainResult, Entity, MemberId, MinisterId, Validator, name_matches,
};

use crate::MinisterialPosition;

/// Ministerial record as returned by `GET /ministers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Minister {
    pub id: MinisterId,
    pub position: MinisterialPosition,
    #[serde(default)]
    pub consecration_date: Option<NaiveDate>,
    pub id_member: MemberId,
    pub full_name: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub id_church: Option<ChurchId>,
    #[serde(default)]
    pub church_name: Option<String>,
    #[serde(default)]
    pub church_trade_name: Option<String>,
    #[serde(default)]
    pub church_city: Option<String>,
    #[serde(default)]
    pub church_county: Option<String>,
    #[serde(default)]
    pub address_church: Option<Address>,
}

impl Minister {
    pub fn cpf(&self) -> Cpf {
        Cpf::new(&self.cpf)
    }
}

impl Entity for Minister {
    type Id = MinisterId;

    fn id(&self) -> MinisterId {
        self.id
    }
}

/// Compact minister view embedded in meeting reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinisterInfo {
    pub id: MinisterId,
    pub full_name: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub consecration_date: Option<NaiveDate>,
    #[serde(default)]
    pub id_church: Option<ChurchId>,
    #[serde(default)]
    pub church_name: Option<String>,
    #[serde(default)]
    pub church_trade_name: Option<String>,
    pub position: MinisterialPosition,
}

impl From<&Minister> for MinisterInfo {
    fn from(m: &Minister) -> Self {
        Self {
            id: m.id,
            full_name: m.full_name.clone(),
            cpf: m.cpf.clone(),
            telephone: m.telephone.clone(),
            consecration_date: m.consecration_date,
            id_church: m.id_church,
            church_name: m.church_name.clone(),
            church_trade_name: m.church_trade_name.clone(),
            position: m.position,
        }
    }
}

/// Body of `POST /ministers` (consecration) and `PUT /ministers/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinisterRequest {
    pub position: Option<MinisterialPosition>,
    pub consecration_date: Option<NaiveDate>,
    pub id_member: Option<MemberId>,
    pub id_church: Option<ChurchId>,
}

impl MinisterRequest {
    pub fn validate(&self) -> DomainResult<()> {
        Validator::new()
            .present("idMember", self.id_member.as_ref(), "a member must be selected")
            .present("idChurch", self.id_church.as_ref(), "a church must be selected")
            .present("position", self.position.as_ref(), "a position must be selected")
            .present(
                "consecrationDate",
                self.consecration_date.as_ref(),
                "consecration date is required",
            )
            .finish()
    }
}

impl From<&Minister> for MinisterRequest {
    fn from(m: &Minister) -> Self {
        Self {
            position: Some(m.position),
            consecration_date: m.consecration_date,
            id_member: Some(m.id_member),
            id_church: m.id_church,
        }
    }
}

/// Ministers whose name contains `term`.
pub fn search<'a>(ministers: &'a [Minister], term: &str) -> Vec<&'a Minister> {
    ministers
        .iter()
        .filter(|m| name_matches(&m.full_name, term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minister() -> Minister {
        serde_json::from_str(
            r#"{"id":5,"position":"DEACON","consecrationDate":"2020-02-02","idMember":12,
                "fullName":"Ana Souza","cpf":"12345678901","telephone":"81","email":"a@x.org",
                "idChurch":3,"churchName":"Central","churchTradeName":"IC",
                "churchCity":"Recife","churchCounty":"Brasil","addressChurch":null}"#,
        )
        .unwrap()
    }

    #[test]
    fn decodes_backend_shape() {
        let m = minister();
        assert_eq!(m.position, MinisterialPosition::Deacon);
        assert_eq!(m.id_member, MemberId::new(12));
        assert!(m.address_church.is_none());
    }

    #[test]
    fn request_requires_every_selection() {
        let err = MinisterRequest::default().validate().unwrap_err();
        assert_eq!(err.field_errors().unwrap().len(), 4);
        assert!(MinisterRequest::from(&minister()).validate().is_ok());
    }

    #[test]
    fn info_keeps_position() {
        let info = MinisterInfo::from(&minister());
        assert_eq!(info.position.label(), "Diácono");
        assert_eq!(search(&[minister()], "sou").len(), 1);
    }
}
