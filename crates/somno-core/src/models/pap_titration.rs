use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MorningFeeling {
    MuchBetter,
    Better,
    Same,
    Worse,
    MuchWorse,
}

/// Five-level rating used for the PAP experience questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ExperienceLevel {
    None,
    Little,
    Moderate,
    Good,
    Excellent,
}

/// Form 7 — device-fitting feedback after a PAP titration night.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PapTitration {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub form_date: Date,

    pub morning_feeling: MorningFeeling,

    // PAP experience
    pub pap_improvement: ExperienceLevel,
    pub mask_ease: ExperienceLevel,
    pub device_acceptance: ExperienceLevel,

    // Device feedback
    pub low_value: Option<String>,
    pub same_value: Option<String>,
    pub more_value: Option<String>,
    pub ear_pressure: Option<String>,
    pub tap_value: Option<String>,
    pub joint_pain: Option<String>,
    pub tired_eyes: Option<String>,
    pub red_eyes: Option<String>,
    pub clear_vision: Option<String>,
    pub dark_vision: Option<String>,
    pub blurry_vision: Option<String>,

    // Free-text feedback
    pub summary_response: Option<String>,
    pub mask_reminder: Option<String>,
    pub discomfort_description: Option<String>,
    pub mask_changes: Option<String>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PapTitration {
    pub fn new(patient_id: Uuid, form_date: Date) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            patient_id,
            form_date,
            morning_feeling: MorningFeeling::Same,
            pap_improvement: ExperienceLevel::None,
            mask_ease: ExperienceLevel::None,
            device_acceptance: ExperienceLevel::None,
            low_value: None,
            same_value: None,
            more_value: None,
            ear_pressure: None,
            tap_value: None,
            joint_pain: None,
            tired_eyes: None,
            red_eyes: None,
            clear_vision: None,
            dark_vision: None,
            blurry_vision: None,
            summary_response: None,
            mask_reminder: None,
            discomfort_description: None,
            mask_changes: None,
            created_at: now,
            updated_at: now,
        }
    }
}
