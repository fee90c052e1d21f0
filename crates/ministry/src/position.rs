use core::str::FromStr;

use serde::{Deserialize, Serialize};

use ecclesia_core::DomainError;

/// Consecrated ministerial position.
///
/// The wire form is the SCREAMING_SNAKE name; [`MinisterialPosition::label`]
/// is the title printed on credentials and listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MinisterialPosition {
    President,
    VicePresident,
    AuxiliaryPastor,
    Shepherd,
    Deacon,
    Deaconess,
    Evangelist,
    Missionary,
    Cooperator,
}

impl MinisterialPosition {
    pub const ALL: [MinisterialPosition; 9] = [
        Self::President,
        Self::VicePresident,
        Self::AuxiliaryPastor,
        Self::Shepherd,
        Self::Deacon,
        Self::Deaconess,
        Self::Evangelist,
        Self::Missionary,
        Self::Cooperator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::President => "PRESIDENT",
            Self::VicePresident => "VICE_PRESIDENT",
            Self::AuxiliaryPastor => "AUXILIARY_PASTOR",
            Self::Shepherd => "SHEPHERD",
            Self::Deacon => "DEACON",
            Self::Deaconess => "DEACONESS",
            Self::Evangelist => "EVANGELIST",
            Self::Missionary => "MISSIONARY",
            Self::Cooperator => "COOPERATOR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::President => "Pastor Presidente",
            Self::VicePresident => "Vice-Presidente",
            Self::AuxiliaryPastor => "Pastor Auxiliar",
            Self::Shepherd => "Pastor",
            Self::Deacon => "Diácono",
            Self::Deaconess => "Diaconisa",
            Self::Evangelist => "Evangelista",
            Self::Missionary => "Missionário",
            Self::Cooperator => "Cooperador",
        }
    }
}

impl core::fmt::Display for MinisterialPosition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MinisterialPosition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| DomainError::validation("position", format!("unknown position '{s}'")))
    }
}

/// Display title for a raw position string.
///
/// Matching ignores case only. Anything else is shown exactly as received,
/// and a missing or empty value is "".
pub fn translate_position(raw: Option<&str>) -> String {
    let Some(value) = raw.filter(|v| !v.is_empty()) else {
        return String::new();
    };
    let wanted = value.to_ascii_uppercase();
    MinisterialPosition::ALL
        .into_iter()
        .find(|p| p.as_str() == wanted)
        .map_or_else(|| value.to_string(), |p| p.label().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_is_case_insensitive() {
        assert_eq!(translate_position(Some("president")), "Pastor Presidente");
        assert_eq!(translate_position(Some("VICE_PRESIDENT")), "Vice-Presidente");
    }

    #[test]
    fn translation_does_not_rewrite_separators() {
        assert_eq!(translate_position(Some("vice_president")), "Vice-Presidente");
        assert_eq!(translate_position(Some("vice president")), "vice president");
        assert_eq!(translate_position(Some("auxiliary-pastor")), "auxiliary-pastor");
        assert_eq!(translate_position(Some(" DEACON ")), " DEACON ");
    }

    #[test]
    fn cli_parsing_stays_lenient() {
        assert_eq!(
            "vice president".parse::<MinisterialPosition>().unwrap(),
            MinisterialPosition::VicePresident
        );
    }

    #[test]
    fn unknown_and_missing_values() {
        assert_eq!(translate_position(Some("BISHOP")), "BISHOP");
        assert_eq!(translate_position(Some("")), "");
        assert_eq!(translate_position(None), "");
    }

    #[test]
    fn wire_form_round_trips_through_serde() {
        let json = serde_json::to_string(&MinisterialPosition::AuxiliaryPastor).unwrap();
        assert_eq!(json, "\"AUXILIARY_PASTOR\"");
        for p in MinisterialPosition::ALL {
            assert_eq!(p.as_str().parse::<MinisterialPosition>().unwrap(), p);
        }
    }
}
