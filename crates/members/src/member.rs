use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ecclesia_core::{Address, ChurchId, Cpf, DomainResult, Entity, MemberId, Validator, name_matches};

/// Member as returned by `GET /members`.
///
/// Church fields are denormalized by the backend for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub full_name: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub rg: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub baptism_date: Option<NaiveDate>,
    #[serde(default)]
    pub entry_date: Option<NaiveDate>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub address: Address,
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
    pub photo_url: Option<String>,
}

impl Member {
    pub fn cpf(&self) -> Cpf {
        Cpf::new(&self.cpf)
    }

    /// Credentials can only be printed once a photo has been uploaded.
    pub fn has_photo(&self) -> bool {
        self.photo_url.as_deref().is_some_and(|u| !u.trim().is_empty())
    }
}

impl Entity for Member {
    type Id = MemberId;

    fn id(&self) -> MemberId {
        self.id
    }
}

/// Body of `POST /members` and `PUT /members/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRequest {
    pub full_name: String,
    pub cpf: String,
    pub rg: String,
    pub telephone: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub baptism_date: Option<NaiveDate>,
    pub entry_date: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub address: Address,
    pub id_church: Option<ChurchId>,
}

fn default_active() -> bool {
    true
}

impl MemberRequest {
    pub fn validate(&self) -> DomainResult<()> {
        let mut v = Validator::new();
        v.required("fullName", &self.full_name, "full name is required")
            .required("email", &self.email, "email is required")
            .required("cpf", &self.cpf, "CPF is required")
            .required("rg", &self.rg, "RG is required")
            .required("telephone", &self.telephone, "telephone is required")
            .present("dateOfBirth", self.date_of_birth.as_ref(), "date of birth is required")
            .present("baptismDate", self.baptism_date.as_ref(), "baptism date is required")
            .present("entryDate", self.entry_date.as_ref(), "entry date is required");
        self.address.check(&mut v);
        v.present("idChurch", self.id_church.as_ref(), "church is required");
        v.finish()
    }
}

/// Edit forms start from the stored record.
impl From<&Member> for MemberRequest {
    fn from(m: &Member) -> Self {
        Self {
            full_name: m.full_name.clone(),
            cpf: m.cpf.clone(),
            rg: m.rg.clone(),
            telephone: m.telephone.clone(),
            email: m.email.clone(),
            date_of_birth: m.date_of_birth,
            baptism_date: m.baptism_date,
            entry_date: m.entry_date,
            active: m.active,
            address: m.address.clone(),
            id_church: m.id_church,
        }
    }
}

/// Members whose name contains `term` (see [`name_matches`]).
pub fn search<'a>(members: &'a [Member], term: &str) -> Vec<&'a Member> {
    members
        .iter()
        .filter(|m| name_matches(&m.full_name, term))
        .collect()
}
