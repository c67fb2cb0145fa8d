use crate::error::ScoringError;

/// Body Mass Index from height in centimeters and weight in kilograms,
/// rounded half-up to two decimal places.
pub fn bmi(height_cm: f64, weight_kg: f64) -> Result<f64, ScoringError> {
    if height_cm <= 0.0 {
        return Err(ScoringError::NonPositiveHeight(height_cm));
    }
    let height_m = height_cm / 100.0;
    Ok(round2(weight_kg / (height_m * height_m)))
}

/// Epworth total over the eight dozing answers. An unanswered question is
/// skipped, not counted as zero, so a partially filled scale yields a
/// partial sum.
pub fn epworth_total(answers: &[Option<u8>; 8]) -> u8 {
    answers.iter().flatten().sum()
}

// f64::round is half-away-from-zero; inputs here are positive, so this is
// plain half-up.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
