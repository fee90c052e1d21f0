//! Field-level validation for request payloads.
//!
//! Payloads are validated locally before they are sent, mirroring the
//! required-field rules of the backend forms. Errors are collected (not
//! short-circuited) so a caller can report every missing field at once.

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// A single field failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered collection of field failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Whether `field` has at least one failure.
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for e in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

/// Builder that accumulates field failures.
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text must contain something other than whitespace.
    pub fn required(&mut self, field: &str, value: &str, message: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(field, message);
        }
        self
    }

    /// Optional value must be present.
    pub fn present<T>(&mut self, field: &str, value: Option<&T>, message: &str) -> &mut Self {
        if value.is_none() {
            self.errors.push(field, message);
        }
        self
    }

    /// Text must have at least `min` characters (only checked when non-empty).
    pub fn min_len(&mut self, field: &str, value: &str, min: usize, message: &str) -> &mut Self {
        if !value.is_empty() && value.chars().count() < min {
            self.errors.push(field, message);
        }
        self
    }

    /// Arbitrary rule.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) -> &mut Self {
        if !ok {
            self.errors.push(field, message);
        }
        self
    }

    pub fn finish(&mut self) -> DomainResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(core::mem::take(&mut self.errors)))
        }
    }
}
