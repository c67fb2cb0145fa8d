use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One medication row on the supplementary form. Lives and dies with its
/// parent record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Medication {
    pub name: String,
    pub quality: Option<String>,
    pub dosage: String,
    pub quantity: Option<String>,
    pub condition: String,
    pub self_prescribed: bool,
}

/// Form 8 — hospitalization history, current treatments, and medications.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupplementaryInformation {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub form_date: Date,

    pub hospitalization_history: Option<String>,
    pub health_treatment_details: Option<String>,
    pub willing_participate: bool,
    pub final_notes: Option<String>,

    /// Owned ordered sequence, persisted with the form as one unit.
    pub medications: Vec<Medication>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SupplementaryInformation {
    pub fn new(patient_id: Uuid, form_date: Date) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            patient_id,
            form_date,
            hospitalization_history: None,
            health_treatment_details: None,
            willing_participate: false,
            final_notes: None,
            medications: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
