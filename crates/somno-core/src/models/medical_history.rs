use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Current/past status of one tracked condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionStatus {
    pub current: bool,
    pub past: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SleepQuality {
    VeryBad,
    Bad,
    Average,
    Good,
    Excellent,
}

/// Form 3 — sleep-schedule narrative and condition history.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicalHistory {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub form_date: Date,

    // Sleep schedule narrative
    pub sleep_thoughts: Option<String>,
    pub wake_time: Option<String>,
    pub morning_routine: Option<String>,
    pub wake_activities: Option<String>,
    pub drowsy_activities: Option<String>,
    pub sleep_paralysis: Option<String>,
    pub cataplexy: Option<String>,

    // Tracked conditions, current and past
    pub diabetes: ConditionStatus,
    pub hypertension: ConditionStatus,
    pub stroke: ConditionStatus,
    pub heart_problems: ConditionStatus,
    pub heart_attack: ConditionStatus,
    pub angina: ConditionStatus,
    pub arrhythmia: ConditionStatus,
    pub asthma: ConditionStatus,
    pub tuberculosis: ConditionStatus,
    pub lung_disease: ConditionStatus,
    pub nasal_congestion: ConditionStatus,
    pub jaw_problems: ConditionStatus,
    pub neurological: ConditionStatus,
    pub prostate: ConditionStatus,
    pub alcohol_problem: ConditionStatus,
    pub addiction: ConditionStatus,
    pub depression: ConditionStatus,
    pub fainting: ConditionStatus,

    pub sleep_quality: Option<SleepQuality>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MedicalHistory {
    pub fn new(patient_id: Uuid, form_date: Date) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            patient_id,
            form_date,
            sleep_thoughts: None,
            wake_time: None,
            morning_routine: None,
            wake_activities: None,
            drowsy_activities: None,
            sleep_paralysis: None,
            cataplexy: None,
            diabetes: ConditionStatus::default(),
            hypertension: ConditionStatus::default(),
            stroke: ConditionStatus::default(),
            heart_problems: ConditionStatus::default(),
            heart_attack: ConditionStatus::default(),
            angina: ConditionStatus::default(),
            arrhythmia: ConditionStatus::default(),
            asthma: ConditionStatus::default(),
            tuberculosis: ConditionStatus::default(),
            lung_disease: ConditionStatus::default(),
            nasal_congestion: ConditionStatus::default(),
            jaw_problems: ConditionStatus::default(),
            neurological: ConditionStatus::default(),
            prostate: ConditionStatus::default(),
            alcohol_problem: ConditionStatus::default(),
            addiction: ConditionStatus::default(),
            depression: ConditionStatus::default(),
            fainting: ConditionStatus::default(),
            sleep_quality: None,
            created_at: now,
            updated_at: now,
        }
    }
}
