use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// The long-lived patient record. Every intake form and sleep study result
/// hangs off one of these.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: Uuid,
    /// Clinic-assigned identifier, unique across the registry.
    pub patient_id: String,
    pub first_name: String,
    pub last_name: String,
    /// National ID, exactly 10 digits when present. Unique.
    pub national_id: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub gender: Gender,
    pub birth_date: Date,
    pub height_cm: i32,
    pub weight_kg: f64,
    pub neck_circumference_cm: Option<f64>,
    /// Derived from height and weight immediately before every save.
    /// Never entered by staff.
    pub bmi: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Patient {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        patient_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        gender: Gender,
        birth_date: Date,
        height_cm: i32,
        weight_kg: f64,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            patient_id: patient_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            national_id: None,
            phone: phone.into(),
            email: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
            gender,
            birth_date,
            height_cm,
            weight_kg,
            neck_circumference_cm: None,
            bmi: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
