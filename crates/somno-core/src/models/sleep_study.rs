use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StudyType {
    Diagnostic,
    Titration,
    SplitNight,
    HomeStudy,
}

/// A polysomnography result. Independent of the intake sequence.
///
/// The AHI severity band is computed on read and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SleepStudyResult {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub study_date: Date,
    /// The physical examination that ordered this study, if recorded.
    pub physical_exam_id: Option<Uuid>,

    pub ahi: Option<f64>,
    pub rdi: Option<f64>,
    pub min_oxygen_saturation: Option<u8>,
    pub sleep_efficiency: Option<f64>,
    pub total_sleep_time_min: Option<u32>,

    pub study_type: StudyType,
    pub recommendations: Option<String>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SleepStudyResult {
    pub fn new(patient_id: Uuid, study_date: Date, study_type: StudyType) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            patient_id,
            study_date,
            physical_exam_id: None,
            ahi: None,
            rdi: None,
            min_oxygen_saturation: None,
            sleep_efficiency: None,
            total_sleep_time_min: None,
            study_type,
            recommendations: None,
            created_at: now,
            updated_at: now,
        }
    }
}
