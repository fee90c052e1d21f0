//! Identity cards printed for members and ministers.

use serde::{Deserialize, Serialize};

use ecclesia_core::format_cpf;
use ecclesia_ministry::translate_position;

/// Whose credential is requested; the wire value is the backend's `type`
/// query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredentialKind {
    #[serde(rename = "membro")]
    Member,
    #[serde(rename = "ministro")]
    Minister,
}

impl CredentialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "membro",
            Self::Minister => "ministro",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Member => "Failed to load the member credential data.",
            Self::Minister => "Failed to load the minister credential data.",
        }
    }
}

/// Payload of `GET /credentials`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialData {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub church_name: String,
    #[serde(default)]
    pub church_trade_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Backend photo paths are relative to the server origin.
pub fn resolve_photo_url(origin: &str, path: Option<&str>) -> Option<String> {
    let path = path.map(str::trim).filter(|p| !p.is_empty())?;
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }
    let origin = origin.trim_end_matches('/');
    if path.starts_with('/') {
        Some(format!("{origin}{path}"))
    } else {
        Some(format!("{origin}/{path}"))
    }
}

/// Display-ready credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialCard {
    pub church_name: String,
    pub church_trade_name: String,
    pub full_name: String,
    pub position: String,
    pub cpf: String,
    pub date_of_birth: String,
    pub photo_url: Option<String>,
}

impl CredentialCard {
    pub fn new(data: &CredentialData, origin: &str) -> Self {
        let position = match data.position.as_deref().map(str::trim) {
            Some(p) if !p.is_empty() => translate_position(Some(p)),
            _ => "MEMBRO".to_string(),
        };
        Self {
            church_name: data.church_name.to_uppercase(),
            church_trade_name: data.church_trade_name.clone(),
            full_name: data.full_name.clone(),
            position,
            cpf: format_cpf(&data.cpf),
            date_of_birth: data.date_of_birth.clone(),
            photo_url: resolve_photo_url(origin, data.photo_url.as_deref()),
        }
    }
}

impl core::fmt::Display for CredentialCard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{}", self.church_name)?;
        writeln!(f, "{}", self.church_trade_name)?;
        writeln!(f)?;
        writeln!(f, "{}", self.full_name)?;
        writeln!(f, "{}", self.position)?;
        writeln!(f, "CPF: {}", self.cpf)?;
        writeln!(f, "Nascimento: {}", self.date_of_birth)?;
        match &self.photo_url {
            Some(url) => write!(f, "Foto: {url}"),
            None => write!(f, "Foto 3x4 do Membro"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(position: Option<&str>, photo: Option<&str>) -> CredentialData {
        CredentialData {
            id: 1,
            full_name: "Ana Souza".into(),
            date_of_birth: "1990-05-01".into(),
            cpf: "12345678901".into(),
            church_name: "Igreja Central".into(),
            church_trade_name: "Central".into(),
            position: position.map(Into::into),
            photo_url: photo.map(Into::into),
        }
    }

    #[test]
    fn minister_card_translates_position() {
        let card = CredentialCard::new(
            &data(Some("DEACON"), Some("/uploads/1.png")),
            "http://localhost:8080",
        );
        assert_eq!(card.church_name, "IGREJA CENTRAL");
        assert_eq!(card.position, "Diácono");
        assert_eq!(card.cpf, "123.456.789-01");
        assert_eq!(card.photo_url.as_deref(), Some("http://localhost:8080/uploads/1.png"));
    }

    #[test]
    fn member_card_without_photo() {
        let card = CredentialCard::new(&data(None, Some("  ")), "http://h/");
        assert_eq!(card.position, "MEMBRO");
        assert!(card.photo_url.is_none());
        let text = card.to_string();
        assert!(text.contains("Nascimento: 1990-05-01"));
        assert!(text.ends_with("Foto 3x4 do Membro"));
    }

    #[test]
    fn absolute_photo_urls_are_kept() {
        assert_eq!(
            resolve_photo_url("http://h", Some("https://cdn/x.jpg")).as_deref(),
            Some("https://cdn/x.jpg")
        );
        assert_eq!(resolve_photo_url("http://h/", Some("x.jpg")).as_deref(), Some("http://h/x.jpg"));
    }

    #[test]
    fn kind_wire_values() {
        assert_eq!(serde_json::to_string(&CredentialKind::Minister).unwrap(), "\"ministro\"");
        assert_eq!(CredentialKind::Member.as_str(), "membro");
    }
}
