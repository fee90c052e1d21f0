use core::str::FromStr;

use serde::{Deserialize, Serialize};

use ecclesia_core::{DomainError, DomainResult, MemberId, MinisterId, Validator};

/// Template the backend renders into a PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    RecommendationLetter,
    RecommendationLetterMember,
    RecommendationLetterMinister,
    Certificate,
    Office,
    CommunicationOffice,
    EventInvitationOffice,
    SolicitationOffice,
    PublicPermitRequestOffice,
}

impl DocumentType {
    pub const ALL: [DocumentType; 9] = [
        Self::RecommendationLetter,
        Self::RecommendationLetterMember,
        Self::RecommendationLetterMinister,
        Self::Certificate,
        Self::Office,
        Self::CommunicationOffice,
        Self::EventInvitationOffice,
        Self::SolicitationOffice,
        Self::PublicPermitRequestOffice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RecommendationLetter => "RECOMMENDATION_LETTER",
            Self::RecommendationLetterMember => "RECOMMENDATION_LETTER_MEMBER",
            Self::RecommendationLetterMinister => "RECOMMENDATION_LETTER_MINISTER",
            Self::Certificate => "CERTIFICATE",
            Self::Office => "OFFICE",
            Self::CommunicationOffice => "COMMUNICATION_OFFICE",
            Self::EventInvitationOffice => "EVENT_INVITATION_OFFICE",
            Self::SolicitationOffice => "SOLICITATION_OFFICE",
            Self::PublicPermitRequestOffice => "PUBLIC_PERMIT_REQUEST_OFFICE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::RecommendationLetter => "Carta de Recomendação",
            Self::RecommendationLetterMember => "Carta de Recomendação de Membro",
            Self::RecommendationLetterMinister => "Carta de Recomendação de Ministro",
            Self::Certificate => "Certificado",
            Self::Office => "Ofício",
            Self::CommunicationOffice => "Comunicado",
            Self::EventInvitationOffice => "Convite para Evento",
            Self::SolicitationOffice => "Solicitações",
            Self::PublicPermitRequestOffice => "Solicitação de Alvará/Licença",
        }
    }

    /// Letters are issued about a specific member or minister.
    pub fn is_recommendation(&self) -> bool {
        matches!(
            self,
            Self::RecommendationLetter
                | Self::RecommendationLetterMember
                | Self::RecommendationLetterMinister
        )
    }

    /// Office documents start from an editable server-side template.
    pub fn has_template(&self) -> bool {
        matches!(
            self,
            Self::Office
                | Self::CommunicationOffice
                | Self::EventInvitationOffice
                | Self::SolicitationOffice
                | Self::PublicPermitRequestOffice
        )
    }
}

impl core::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| {
                DomainError::validation("documentType", format!("unknown document type '{s}'"))
            })
    }
}

/// Body of `POST /documents/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    pub document_type: DocumentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_member: Option<MemberId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_minister: Option<MinisterId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl DocumentRequest {
    fn bare(document_type: DocumentType) -> Self {
        Self {
            document_type,
            id_member: None,
            id_minister: None,
            purpose: None,
            recipient: None,
            subject: None,
        }
    }

    pub fn member_letter(id: MemberId, purpose: impl Into<String>) -> Self {
        Self {
            id_member: Some(id),
            purpose: non_blank(purpose.into()),
            ..Self::bare(DocumentType::RecommendationLetterMember)
        }
    }

    pub fn minister_letter(id: MinisterId, purpose: impl Into<String>) -> Self {
        Self {
            id_minister: Some(id),
            purpose: non_blank(purpose.into()),
            ..Self::bare(DocumentType::RecommendationLetterMinister)
        }
    }

    /// Office document; the edited template body travels as `purpose`.
    pub fn office(
        document_type: DocumentType,
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient: non_blank(recipient.into()),
            subject: non_blank(subject.into()),
            purpose: non_blank(body.into()),
            ..Self::bare(document_type)
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        let mut v = Validator::new();
        match self.document_type {
            DocumentType::RecommendationLetterMember => {
                v.present("idMember", self.id_member.as_ref(), "select a member");
            }
            DocumentType::RecommendationLetterMinister => {
                v.present("idMinister", self.id_minister.as_ref(), "select a minister");
            }
            DocumentType::RecommendationLetter => {
                v.check(
                    self.id_member.is_some() || self.id_minister.is_some(),
                    "idMember",
                    "select a person",
                );
            }
            _ => {}
        }
        v.finish()
    }

    /// Id of the person a letter is about, used to name the download.
    pub fn subject_id(&self) -> Option<i64> {
        self.id_member
            .map(i64::from)
            .or_else(|| self.id_minister.map(i64::from))
    }

    /// File name offered for the generated PDF.
    pub fn file_name(&self, now_unix_ms: i64) -> String {
        match self.subject_id() {
            Some(id) if self.document_type.is_recommendation() => letter_file_name(id),
            _ => office_file_name(self.document_type, now_unix_ms),
        }
    }
}

fn non_blank(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

pub fn letter_file_name(person_id: i64) -> String {
    format!("documento_{person_id}.pdf")
}

pub fn office_file_name(document_type: DocumentType, unix_ms: i64) -> String {
    format!("{}_{unix_ms}.pdf", document_type.as_str().to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_letter_serializes_only_what_it_has() {
        let req = DocumentRequest::member_letter(MemberId::new(4), "");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["documentType"], "RECOMMENDATION_LETTER_MEMBER");
        assert_eq!(json["idMember"], 4);
        assert!(json.get("purpose").is_none());
        assert!(json.get("idMinister").is_none());
    }

    #[test]
    fn letters_need_their_person() {
        let mut req = DocumentRequest::minister_letter(MinisterId::new(2), "Transferência");
        assert!(req.validate().is_ok());
        req.id_minister = None;
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().unwrap().has("idMinister"));

        let office = DocumentRequest::office(DocumentType::CommunicationOffice, "", "", "");
        assert!(office.validate().is_ok());
    }

    #[test]
    fn file_names() {
        let letter = DocumentRequest::member_letter(MemberId::new(12), "x");
        assert_eq!(letter.file_name(0), "documento_12.pdf");

        let office = DocumentRequest::office(DocumentType::EventInvitationOffice, "a", "b", "c");
        assert_eq!(
            office.file_name(1_700_000_000_000),
            "event_invitation_office_1700000000000.pdf"
        );
    }

    #[test]
    fn parses_loose_spelling() {
        assert_eq!(
            "solicitation-office".parse::<DocumentType>().unwrap(),
            DocumentType::SolicitationOffice
        );
        assert!("memo".parse::<DocumentType>().is_err());
        assert!(DocumentType::Office.has_template());
        assert!(!DocumentType::Certificate.is_recommendation());
    }
}
