use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InterpretingPhysician {
    Sharafkhaneh,
    Ansarin,
    /// Requires `other_physician` to carry the name.
    Other,
}

/// Form 4 — ordered study types and the interpreting physician.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PhysicalExamination {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub form_date: Date,

    /// Referring physician, free text.
    pub physician: Option<String>,

    // Ordered study types
    pub baseline_diagnostic: bool,
    pub full_night_titration: bool,
    pub split_night: bool,
    pub re_titration: bool,
    pub home_sleep_testing: bool,

    pub interpreting_physician: InterpretingPhysician,
    pub other_physician: Option<String>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PhysicalExamination {
    pub fn new(patient_id: Uuid, form_date: Date) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            patient_id,
            form_date,
            physician: None,
            baseline_diagnostic: false,
            full_night_titration: false,
            split_night: false,
            re_titration: false,
            home_sleep_testing: false,
            interpreting_physician: InterpretingPhysician::Sharafkhaneh,
            other_physician: None,
            created_at: now,
            updated_at: now,
        }
    }
}
