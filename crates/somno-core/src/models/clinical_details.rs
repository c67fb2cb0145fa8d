use jiff::Timestamp;
use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Form 6 — sleep schedule, work pattern, and airway examination findings.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalExaminationDetails {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub form_date: Date,

    // Sleep schedule
    pub weekday_bedtime: Option<Time>,
    pub weekday_waketime: Option<Time>,
    pub weekend_bedtime: Option<Time>,
    pub weekend_waketime: Option<Time>,

    // Work schedule
    pub shift_work: bool,
    pub shift_work_description: Option<String>,

    // Throat examination
    pub small_mouth_throat: bool,
    pub small_mouth_soft_palate: bool,
    pub normal_mouth_soft_palate: bool,
    pub normal_mouth_visible_uvula: bool,
    pub normal_mouth_visible_tonsils: bool,
    pub mouth_with_large_tonsils: bool,
    pub large_tongue: bool,

    // Nasal examination
    pub nasal_congestion_right: bool,
    pub nasal_congestion_left: bool,
    pub nasal_deviation: bool,

    // Additional symptoms
    pub loud_snoring: bool,
    pub choking_episodes: bool,
    pub witnessed_apnea: bool,
    pub restless_sleep: bool,
    pub sleep_walking: bool,
    pub night_terrors: bool,
    pub morning_headaches: bool,
    pub dry_mouth: bool,
    pub nightmares: bool,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ClinicalExaminationDetails {
    pub fn new(patient_id: Uuid, form_date: Date) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            patient_id,
            form_date,
            weekday_bedtime: None,
            weekday_waketime: None,
            weekend_bedtime: None,
            weekend_waketime: None,
            shift_work: false,
            shift_work_description: None,
            small_mouth_throat: false,
            small_mouth_soft_palate: false,
            normal_mouth_soft_palate: false,
            normal_mouth_visible_uvula: false,
            normal_mouth_visible_tonsils: false,
            mouth_with_large_tonsils: false,
            large_tongue: false,
            nasal_congestion_right: false,
            nasal_congestion_left: false,
            nasal_deviation: false,
            loud_snoring: false,
            choking_episodes: false,
            witnessed_apnea: false,
            restless_sleep: false,
            sleep_walking: false,
            night_terrors: false,
            morning_headaches: false,
            dry_mouth: false,
            nightmares: false,
            created_at: now,
            updated_at: now,
        }
    }
}
