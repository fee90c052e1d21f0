use std::borrow::Cow;

use ecclesia_core::PermissionId;
use serde::{Deserialize, Serialize};

/// Permission identifier.
///
/// Permissions are modeled as opaque strings (e.g. "MEMBER_WRITE"); the
/// backend owns the catalogue, the console only edits role assignments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Permission as listed by `GET /permissions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionResponse {
    pub id: PermissionId,
    pub name: String,
}

/// Editable set of permission names for a single role.
///
/// Order follows first insertion so the update body is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSelection {
    names: Vec<String>,
}

impl PermissionSelection {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::default();
        for name in names {
            selection.grant(name);
        }
        selection
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn grant(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.names.push(name);
        }
    }

    pub fn revoke(&mut self, name: &str) {
        self.names.retain(|n| n != name);
    }

    /// Flip a checkbox.
    pub fn toggle(&mut self, name: &str, checked: bool) {
        if checked {
            self.grant(name);
        } else {
            self.revoke(name);
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }

    /// Names that are not part of `catalogue`.
    pub fn unknown<'a>(&'a self, catalogue: &[PermissionResponse]) -> Vec<&'a str> {
        self.names
            .iter()
            .filter(|n| !catalogue.iter().any(|p| &p.name == *n))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_is_idempotent_and_ordered() {
        let mut sel = PermissionSelection::new(["A", "B", "A"]);
        sel.grant("C");
        sel.grant("B");
        assert_eq!(sel.names(), &["A", "B", "C"]);
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut sel = PermissionSelection::new(["A"]);
        sel.toggle("B", true);
        sel.toggle("A", false);
        assert_eq!(sel.into_names(), vec!["B".to_string()]);
    }

    #[test]
    fn reports_names_missing_from_catalogue() {
        let catalogue = vec![PermissionResponse {
            id: PermissionId::new(1),
            name: "A".into(),
        }];
        let sel = PermissionSelection::new(["A", "Z"]);
        assert_eq!(sel.unknown(&catalogue), vec!["Z"]);
    }
}
