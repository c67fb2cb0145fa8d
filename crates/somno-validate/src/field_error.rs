use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// A single field-scoped rejection, addressed by field path so the form
/// layer can render it next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[error("{field}: {message}")]
#[ts(export)]
pub struct FieldError {
    /// Field path, e.g. `phone` or `medications[2].name`.
    pub field: String,
    pub message: String,
}

/// Every failure found in one pass over a candidate record. Validation never
/// short-circuits; the caller re-renders all errors at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[error("validation failed on {} field(s)", .0.len())]
#[ts(export)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

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

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Empty set becomes `Ok(())`, anything else is returned whole.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}
