use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use somno_core::models::form_kind::FormKind;
use somno_store::{ClinicStore, StoreError};
use ts_rs::TS;
use uuid::Uuid;

/// Where the intake workflow routes next: one of the eight forms, or the
/// patient detail view once every kind has at least one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "step", rename_all = "snake_case")]
#[ts(export)]
pub enum IntakeStep {
    Form { kind: FormKind },
    Complete,
}

/// Explicit workflow state for one patient. Rebuilt from the store on each
/// request rather than carried through session or URL parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeSession {
    pub patient_id: Uuid,
    pub completed_kinds: BTreeSet<FormKind>,
}

impl IntakeSession {
    /// A fresh session with no completed forms.
    pub fn new(patient_id: Uuid) -> Self {
        Self {
            patient_id,
            completed_kinds: BTreeSet::new(),
        }
    }

    /// Re-derive the session from the store: a kind counts as completed
    /// once the patient has at least one record of it, whatever its date.
    pub fn load<S: ClinicStore>(store: &S, patient_id: Uuid) -> Result<Self, StoreError> {
        let mut session = Self::new(patient_id);
        for kind in FormKind::SEQUENCE {
            if !store.list_forms(patient_id, kind)?.is_empty() {
                session.record(kind);
            }
        }
        Ok(session)
    }

    /// Mark a kind as having at least one record.
    pub fn record(&mut self, kind: FormKind) {
        self.completed_kinds.insert(kind);
    }

    /// The first kind in fixed order 1..8 without a record, or `Complete`.
    /// A validation failure never calls `record`, so retries land on the
    /// same step.
    pub fn next_step(&self) -> IntakeStep {
        FormKind::SEQUENCE
            .into_iter()
            .find(|kind| !self.completed_kinds.contains(kind))
            .map(|kind| IntakeStep::Form { kind })
            .unwrap_or(IntakeStep::Complete)
    }

    pub fn is_complete(&self) -> bool {
        self.next_step() == IntakeStep::Complete
    }
}
