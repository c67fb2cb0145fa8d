use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Form 2 — Epworth Sleepiness Scale.
///
/// Eight situational dozing questions scored 0–3, each individually
/// skippable, plus eight yes/no sleep-symptom questions. `total_score` is
/// derived from the answered questions and never entered by staff.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EpworthScale {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub form_date: Date,

    // Dozing likelihood, 0 (never) to 3 (high chance)
    pub sitting_reading: Option<u8>,
    pub watching_tv: Option<u8>,
    pub sitting_inactive: Option<u8>,
    pub car_passenger: Option<u8>,
    pub lying_down: Option<u8>,
    pub sitting_talking: Option<u8>,
    pub after_lunch: Option<u8>,
    pub in_traffic: Option<u8>,

    // Supplementary yes/no questions
    pub loud_snoring: bool,
    pub wake_breathless: bool,
    pub wake_tired: bool,
    pub sleep_difficulty: bool,
    pub restful_sleep: bool,
    pub unusual_behaviors: bool,
    pub nightmares: bool,
    pub sleep_driving: bool,

    pub other_symptoms: Option<String>,

    /// Sum of the answered dozing questions (0–24). Derived on save.
    pub total_score: Option<u8>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl EpworthScale {
    pub fn new(patient_id: Uuid, form_date: Date) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            patient_id,
            form_date,
            sitting_reading: None,
            watching_tv: None,
            sitting_inactive: None,
            car_passenger: None,
            lying_down: None,
            sitting_talking: None,
            after_lunch: None,
            in_traffic: None,
            loud_snoring: false,
            wake_breathless: false,
            wake_tired: false,
            sleep_difficulty: false,
            restful_sleep: false,
            unusual_behaviors: false,
            nightmares: false,
            sleep_driving: false,
            other_symptoms: None,
            total_score: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The eight dozing answers in questionnaire order.
    pub fn answers(&self) -> [Option<u8>; 8] {
        [
            self.sitting_reading,
            self.watching_tv,
            self.sitting_inactive,
            self.car_passenger,
            self.lying_down,
            self.sitting_talking,
            self.after_lunch,
            self.in_traffic,
        ]
    }
}
