use somno_core::models::patient::Patient;

use crate::field_error::FieldErrors;

pub const HEIGHT_CM_RANGE: std::ops::RangeInclusive<i32> = 50..=250;
pub const WEIGHT_KG_RANGE: std::ops::RangeInclusive<f64> = 20.0..=300.0;

/// Validate a candidate patient record. Collects every failure.
pub fn validate_patient(patient: &Patient) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if patient.patient_id.trim().is_empty() {
        errors.push("patient_id", "patient id is required");
    }
    if patient.first_name.trim().is_empty() {
        errors.push("first_name", "first name is required");
    }
    if patient.last_name.trim().is_empty() {
        errors.push("last_name", "last name is required");
    }

    if patient.phone.trim().is_empty() {
        errors.push("phone", "phone is required");
    } else if !patient.phone.starts_with("09") {
        errors.push("phone", "phone must start with 09");
    }

    if let Some(national_id) = &patient.national_id
        && national_id.chars().count() != 10
    {
        errors.push("national_id", "national id must be exactly 10 digits");
    }

    if !HEIGHT_CM_RANGE.contains(&patient.height_cm) {
        errors.push("height_cm", "height must be between 50 and 250 cm");
    }
    if !WEIGHT_KG_RANGE.contains(&patient.weight_kg) {
        errors.push("weight_kg", "weight must be between 20 and 300 kg");
    }

    errors.into_result()
}
