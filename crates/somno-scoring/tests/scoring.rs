use somno_scoring::{AhiSeverity, EpworthSeverity, ScoringError, bmi, epworth_total};

#[test]
fn bmi_pins_known_values() {
    assert_eq!(bmi(180.0, 81.0).unwrap(), 25.00);
    assert_eq!(bmi(150.0, 45.0).unwrap(), 20.00);
}

#[test]
fn bmi_rounds_to_two_decimals() {
    // 70 / 1.73^2 = 23.3887... -> 23.39
    assert_eq!(bmi(173.0, 70.0).unwrap(), 23.39);
}

#[test]
fn bmi_rejects_non_positive_height() {
    assert_eq!(bmi(0.0, 80.0), Err(ScoringError::NonPositiveHeight(0.0)));
    assert_eq!(bmi(-170.0, 80.0), Err(ScoringError::NonPositiveHeight(-170.0)));
}

#[test]
fn bmi_is_deterministic_over_valid_ranges() {
    for height in [50, 120, 180, 250] {
        for weight in [20.0, 81.5, 300.0] {
            let first = bmi(height as f64, weight).unwrap();
            let second = bmi(height as f64, weight).unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn epworth_total_sums_all_answers() {
    let answers = [
        Some(0),
        Some(1),
        Some(2),
        Some(3),
        Some(0),
        Some(1),
        Some(2),
        Some(3),
    ];
    assert_eq!(epworth_total(&answers), 12);
}

#[test]
fn epworth_total_skips_unanswered_questions() {
    let answers = [
        None,
        Some(3),
        Some(3),
        Some(3),
        Some(3),
        Some(3),
        Some(3),
        Some(3),
    ];
    assert_eq!(epworth_total(&answers), 21);
}

#[test]
fn epworth_total_of_blank_scale_is_zero() {
    assert_eq!(epworth_total(&[None; 8]), 0);
}

#[test]
fn ahi_severity_boundaries_are_half_open() {
    assert_eq!(AhiSeverity::classify(Some(4.9)), AhiSeverity::Normal);
    assert_eq!(AhiSeverity::classify(Some(5.0)), AhiSeverity::Mild);
    assert_eq!(AhiSeverity::classify(Some(14.9)), AhiSeverity::Mild);
    assert_eq!(AhiSeverity::classify(Some(15.0)), AhiSeverity::Moderate);
    assert_eq!(AhiSeverity::classify(Some(29.9)), AhiSeverity::Moderate);
    assert_eq!(AhiSeverity::classify(Some(30.0)), AhiSeverity::Severe);
    assert_eq!(AhiSeverity::classify(None), AhiSeverity::Unknown);
}

#[test]
fn epworth_severity_bands() {
    assert_eq!(EpworthSeverity::classify(Some(0)), EpworthSeverity::Normal);
    assert_eq!(EpworthSeverity::classify(Some(9)), EpworthSeverity::Normal);
    assert_eq!(EpworthSeverity::classify(Some(10)), EpworthSeverity::Mild);
    assert_eq!(EpworthSeverity::classify(Some(11)), EpworthSeverity::Mild);
    assert_eq!(EpworthSeverity::classify(Some(12)), EpworthSeverity::Moderate);
    assert_eq!(EpworthSeverity::classify(Some(15)), EpworthSeverity::Moderate);
    assert_eq!(EpworthSeverity::classify(Some(16)), EpworthSeverity::Severe);
    assert_eq!(EpworthSeverity::classify(Some(24)), EpworthSeverity::Severe);
    assert_eq!(EpworthSeverity::classify(None), EpworthSeverity::Unknown);
}
