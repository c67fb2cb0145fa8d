use somno_core::models::sleep_study::SleepStudyResult;

use crate::field_error::FieldErrors;

/// Validate a candidate sleep study result. Out-of-range values are
/// rejected, never clamped.
pub fn validate_study(study: &SleepStudyResult) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Some(ahi) = study.ahi
        && ahi < 0.0
    {
        errors.push("ahi", "AHI cannot be negative");
    }
    if let Some(saturation) = study.min_oxygen_saturation
        && saturation > 100
    {
        errors.push(
            "min_oxygen_saturation",
            "oxygen saturation must be between 0 and 100",
        );
    }
    if let Some(efficiency) = study.sleep_efficiency
        && !(0.0..=100.0).contains(&efficiency)
    {
        errors.push(
            "sleep_efficiency",
            "sleep efficiency must be between 0 and 100",
        );
    }

    errors.into_result()
}
