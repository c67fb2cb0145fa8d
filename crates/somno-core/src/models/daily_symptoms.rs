use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Rating of today's symptom against the patient's usual day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Comparison {
    Less,
    Same,
    More,
    No,
}

/// Form 5 — same-day symptom tracking: naps, caffeine, alcohol, and
/// relative symptom ratings.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailySymptomAssessment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub form_date: Date,

    // Naps
    pub morning_naps_count: u32,
    pub morning_naps_duration_min: u32,
    pub night_naps_count: u32,
    pub night_naps_duration_min: u32,
    pub recent_naps_count: u32,
    pub recent_naps_duration_min: u32,

    // Substance use
    pub caffeine_count_today: u32,
    pub caffeine_count_recent: u32,
    pub alcohol_count_today: u32,
    pub alcohol_count_recent: u32,

    // Symptom comparisons
    pub sleepiness_today: Comparison,
    pub tiredness_today: Comparison,
    pub physical_activity: Comparison,
    pub feeling_sick: Comparison,
    pub anxiety_today: Comparison,
    pub depression_today: Comparison,
    pub sleepy_now: Comparison,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DailySymptomAssessment {
    pub fn new(patient_id: Uuid, form_date: Date) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            patient_id,
            form_date,
            morning_naps_count: 0,
            morning_naps_duration_min: 0,
            night_naps_count: 0,
            night_naps_duration_min: 0,
            recent_naps_count: 0,
            recent_naps_duration_min: 0,
            caffeine_count_today: 0,
            caffeine_count_recent: 0,
            alcohol_count_today: 0,
            alcohol_count_recent: 0,
            sleepiness_today: Comparison::Same,
            tiredness_today: Comparison::Same,
            physical_activity: Comparison::Same,
            feeling_sick: Comparison::Same,
            anxiety_today: Comparison::Same,
            depression_today: Comparison::Same,
            sleepy_now: Comparison::Same,
            created_at: now,
            updated_at: now,
        }
    }
}
