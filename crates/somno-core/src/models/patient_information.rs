use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One prior treatment attempt. Lives and dies with its parent form.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentHistory {
    pub treatment_type: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub result: Option<String>,
}

/// Form 1 — presenting symptoms and prior sleep-study history.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientInformation {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub form_date: Date,

    // Symptom checklist
    pub snoring: bool,
    pub witnessed_apnea: bool,
    pub morning_confusion: bool,
    pub morning_dry_mouth: bool,
    pub morning_nausea: bool,
    pub excessive_daytime_sleepiness: bool,
    pub depression: bool,
    pub decreased_libido: bool,

    // Previous sleep studies
    pub previous_sleep_test: bool,
    pub previous_apnea_diagnosis: bool,
    pub previous_pap_therapy: bool,
    pub previous_surgery: bool,
    pub oxygen_supplement: bool,

    pub comments: Option<String>,

    /// Owned ordered sequence, persisted with the form as one unit.
    pub treatments: Vec<TreatmentHistory>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PatientInformation {
    pub fn new(patient_id: Uuid, form_date: Date) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            patient_id,
            form_date,
            snoring: false,
            witnessed_apnea: false,
            morning_confusion: false,
            morning_dry_mouth: false,
            morning_nausea: false,
            excessive_daytime_sleepiness: false,
            depression: false,
            decreased_libido: false,
            previous_sleep_test: false,
            previous_apnea_diagnosis: false,
            previous_pap_therapy: false,
            previous_surgery: false,
            oxygen_supplement: false,
            comments: None,
            treatments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
