use somno_core::models::epworth::EpworthScale;
use somno_core::models::intake_form::IntakeForm;
use somno_core::models::patient_information::PatientInformation;
use somno_core::models::physical_examination::{InterpretingPhysician, PhysicalExamination};
use somno_core::models::supplementary::SupplementaryInformation;

use crate::field_error::FieldErrors;

const EPWORTH_ANSWER_FIELDS: [&str; 8] = [
    "sitting_reading",
    "watching_tv",
    "sitting_inactive",
    "car_passenger",
    "lying_down",
    "sitting_talking",
    "after_lunch",
    "in_traffic",
];

/// Validate a candidate intake form of any kind. Collects every failure;
/// nothing is persisted until this returns `Ok`.
pub fn validate_form(form: &IntakeForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    match form {
        IntakeForm::PatientInformation(f) => check_patient_information(f, &mut errors),
        IntakeForm::EpworthScale(f) => check_epworth(f, &mut errors),
        IntakeForm::PhysicalExamination(f) => check_physical_examination(f, &mut errors),
        IntakeForm::SupplementaryInformation(f) => check_supplementary(f, &mut errors),
        // Forms 3, 5, 6 and 7 carry only free text, flags and closed enums;
        // the type system already rules out bad values.
        IntakeForm::MedicalHistory(_)
        | IntakeForm::DailySymptomAssessment(_)
        | IntakeForm::ClinicalExaminationDetails(_)
        | IntakeForm::PapTitration(_) => {}
    }
    errors.into_result()
}

fn check_patient_information(form: &PatientInformation, errors: &mut FieldErrors) {
    for (index, treatment) in form.treatments.iter().enumerate() {
        if treatment.treatment_type.trim().is_empty() {
            errors.push(
                format!("treatments[{index}].treatment_type"),
                "treatment type is required",
            );
        }
    }
}

fn check_epworth(form: &EpworthScale, errors: &mut FieldErrors) {
    for (field, answer) in EPWORTH_ANSWER_FIELDS.iter().zip(form.answers()) {
        if let Some(value) = answer
            && value > 3
        {
            errors.push(*field, "answer must be between 0 and 3");
        }
    }
}

fn check_physical_examination(form: &PhysicalExamination, errors: &mut FieldErrors) {
    if form.interpreting_physician == InterpretingPhysician::Other
        && form
            .other_physician
            .as_deref()
            .is_none_or(|name| name.trim().is_empty())
    {
        errors.push("other_physician", "please enter the physician's name");
    }
}

fn check_supplementary(form: &SupplementaryInformation, errors: &mut FieldErrors) {
    for (index, medication) in form.medications.iter().enumerate() {
        if medication.name.trim().is_empty() {
            errors.push(
                format!("medications[{index}].name"),
                "medication name is required",
            );
        }
        if medication.dosage.trim().is_empty() {
            errors.push(format!("medications[{index}].dosage"), "dosage is required");
        }
        if medication.condition.trim().is_empty() {
            errors.push(
                format!("medications[{index}].condition"),
                "condition is required",
            );
        }
    }
}
