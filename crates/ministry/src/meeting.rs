use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ecclesia_core::{DomainResult, Entity, MeetingId, MinisterId, Validator};

use crate::MinisterInfo;

/// Meeting report as returned by `GET /meetings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: MeetingId,
    pub date: NaiveDate,
    pub summary: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub participant_ids: Option<Vec<MinisterId>>,
    #[serde(default)]
    pub participants: Option<Vec<MinisterInfo>>,
}

impl Meeting {
    /// Participant ids, falling back to the embedded participant list.
    pub fn participant_ids(&self) -> Vec<MinisterId> {
        match (&self.participant_ids, &self.participants) {
            (Some(ids), _) => ids.clone(),
            (None, Some(people)) => people.iter().map(|p| p.id).collect(),
            (None, None) => Vec::new(),
        }
    }

    /// File name offered for the downloaded report.
    pub fn report_file_name(id: MeetingId) -> String {
        format!("relatorio-reuniao-{id}.pdf")
    }
}

impl Entity for Meeting {
    type Id = MeetingId;

    fn id(&self) -> MeetingId {
        self.id
    }
}

/// Body of `POST /meetings` and `PUT /meetings/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRequest {
    pub date: Option<NaiveDate>,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub participant_ids: Vec<MinisterId>,
}

impl MeetingRequest {
    pub fn validate(&self) -> DomainResult<()> {
        Validator::new()
            .present("date", self.date.as_ref(), "date is required")
            .required("summary", &self.summary, "summary is required")
            .finish()
    }

    /// Drop repeated participants, keeping first occurrence order.
    pub fn normalized(mut self) -> Self {
        let mut seen = Vec::with_capacity(self.participant_ids.len());
        self.participant_ids.retain(|id| {
            if seen.contains(id) {
                false
            } else {
                seen.push(*id);
                true
            }
        });
        self.notes = self.notes.filter(|n| !n.trim().is_empty());
        self
    }
}

impl From<&Meeting> for MeetingRequest {
    fn from(m: &Meeting) -> Self {
        Self {
            date: Some(m.date),
            summary: m.summary.clone(),
            notes: m.notes.clone(),
            participant_ids: m.participant_ids(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participants_fall_back_to_embedded_list() {
        let meeting: Meeting = serde_json::from_str(
            r#"{"id":1,"date":"2024-03-10","summary":"Assembleia",
                "participants":[{"id":4,"fullName":"Ana","position":"SHEPHERD"},
                                {"id":9,"fullName":"Rui","position":"DEACON"}]}"#,
        )
        .unwrap();
        assert_eq!(
            meeting.participant_ids(),
            vec![MinisterId::new(4), MinisterId::new(9)]
        );
        let req = MeetingRequest::from(&meeting);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn normalization_dedupes_and_drops_blank_notes() {
        let req = MeetingRequest {
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            summary: "Reunião".into(),
            notes: Some("  ".into()),
            participant_ids: vec![MinisterId::new(2), MinisterId::new(1), MinisterId::new(2)],
        }
        .normalized();
        assert_eq!(req.participant_ids, vec![MinisterId::new(2), MinisterId::new(1)]);
        assert!(req.notes.is_none());
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("notes").is_none());
        assert_eq!(json["participantIds"][0], 2);
    }

    #[test]
    fn date_and_summary_are_required() {
        let err = MeetingRequest::default().validate().unwrap_err();
        let errors = err.field_errors().unwrap();
        assert!(errors.has("date") && errors.has("summary"));
    }

    #[test]
    fn report_file_name_uses_id() {
        assert_eq!(
            Meeting::report_file_name(MeetingId::new(7)),
            "relatorio-reuniao-7.pdf"
        );
    }
}
