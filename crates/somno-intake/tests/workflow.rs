use jiff::civil::{Date, date};
use somno_core::models::clinical_details::ClinicalExaminationDetails;
use somno_core::models::daily_symptoms::DailySymptomAssessment;
use somno_core::models::epworth::EpworthScale;
use somno_core::models::form_kind::FormKind;
use somno_core::models::intake_form::IntakeForm;
use somno_core::models::medical_history::MedicalHistory;
use somno_core::models::pap_titration::PapTitration;
use somno_core::models::patient::{Gender, Patient};
use somno_core::models::patient_information::PatientInformation;
use somno_core::models::physical_examination::{InterpretingPhysician, PhysicalExamination};
use somno_core::models::sleep_study::{SleepStudyResult, StudyType};
use somno_core::models::supplementary::{Medication, SupplementaryInformation};
use somno_intake::{IntakeError, IntakeService, IntakeStep, epworth_trend, study_reports};
use somno_scoring::{AhiSeverity, EpworthSeverity};
use somno_store::{ClinicStore, MemoryStore, StoreError};
use uuid::Uuid;

fn service() -> IntakeService<MemoryStore> {
    IntakeService::new(MemoryStore::new())
}

fn registered_patient(service: &IntakeService<MemoryStore>) -> Patient {
    service
        .save_patient(Patient::new(
            "SL-0007",
            "Amir",
            "Rahimi",
            "0912000000",
            Gender::Male,
            date(1970, 8, 30),
            180,
            81.0,
        ))
        .unwrap()
}

fn blank_form(kind: FormKind, patient_id: Uuid, form_date: Date) -> IntakeForm {
    match kind {
        FormKind::PatientInformation => {
            IntakeForm::PatientInformation(PatientInformation::new(patient_id, form_date))
        }
        FormKind::EpworthScale => {
            IntakeForm::EpworthScale(EpworthScale::new(patient_id, form_date))
        }
        FormKind::MedicalHistory => {
            IntakeForm::MedicalHistory(MedicalHistory::new(patient_id, form_date))
        }
        FormKind::PhysicalExamination => {
            IntakeForm::PhysicalExamination(PhysicalExamination::new(patient_id, form_date))
        }
        FormKind::DailySymptomAssessment => {
            IntakeForm::DailySymptomAssessment(DailySymptomAssessment::new(patient_id, form_date))
        }
        FormKind::ClinicalExaminationDetails => IntakeForm::ClinicalExaminationDetails(
            ClinicalExaminationDetails::new(patient_id, form_date),
        ),
        FormKind::PapTitration => {
            IntakeForm::PapTitration(PapTitration::new(patient_id, form_date))
        }
        FormKind::SupplementaryInformation => {
            IntakeForm::SupplementaryInformation(SupplementaryInformation::new(
                patient_id, form_date,
            ))
        }
    }
}

#[test]
fn registration_derives_bmi() {
    let service = service();
    let patient = registered_patient(&service);
    assert_eq!(patient.bmi, Some(25.00));
}

#[test]
fn staff_entered_bmi_is_overwritten() {
    let service = service();
    let mut patient = registered_patient(&service);
    patient.bmi = Some(99.0);
    patient.weight_kg = 72.9;
    let patient = service.save_patient(patient).unwrap();
    assert_eq!(patient.bmi, Some(22.5));
}

#[test]
fn full_intake_walk_ends_complete() {
    let service = service();
    let patient = registered_patient(&service);
    let day = date(2025, 6, 1);

    let mut expected_next = FormKind::SEQUENCE[1..].iter();
    for kind in FormKind::SEQUENCE {
        let step = service
            .submit_form(blank_form(kind, patient.id, day))
            .unwrap();
        match expected_next.next() {
            Some(&kind) => assert_eq!(step, IntakeStep::Form { kind }),
            None => assert_eq!(step, IntakeStep::Complete),
        }
    }
    assert_eq!(
        service.next_step(patient.id).unwrap(),
        IntakeStep::Complete
    );
}

#[test]
fn epworth_total_is_derived_on_save() {
    let service = service();
    let patient = registered_patient(&service);

    let mut scale = EpworthScale::new(patient.id, date(2025, 6, 1));
    scale.sitting_reading = Some(0);
    scale.watching_tv = Some(1);
    scale.sitting_inactive = Some(2);
    scale.car_passenger = Some(3);
    scale.lying_down = Some(0);
    scale.sitting_talking = Some(1);
    scale.after_lunch = Some(2);
    scale.in_traffic = Some(3);
    // A submitted total is ignored; the service recomputes it.
    scale.total_score = Some(0);
    let scale_id = scale.id;

    service
        .submit_form(IntakeForm::EpworthScale(scale))
        .unwrap();

    let stored = service.store().get_form(patient.id, scale_id).unwrap();
    let IntakeForm::EpworthScale(stored) = stored else {
        panic!("expected an Epworth form");
    };
    assert_eq!(stored.total_score, Some(12));
}

#[test]
fn resubmitting_a_form_refreshes_updated_at() {
    let service = service();
    let patient = registered_patient(&service);

    let scale = EpworthScale::new(patient.id, date(2025, 6, 1));
    let scale_id = scale.id;
    service
        .submit_form(IntakeForm::EpworthScale(scale))
        .unwrap();

    let IntakeForm::EpworthScale(mut stored) =
        service.store().get_form(patient.id, scale_id).unwrap()
    else {
        panic!("expected an Epworth form");
    };
    let first_saved_at = stored.updated_at;

    stored.sitting_reading = Some(3);
    service
        .submit_form(IntakeForm::EpworthScale(stored))
        .unwrap();

    let IntakeForm::EpworthScale(stored) =
        service.store().get_form(patient.id, scale_id).unwrap()
    else {
        panic!("expected an Epworth form");
    };
    assert_eq!(stored.sitting_reading, Some(3));
    assert!(stored.updated_at > first_saved_at);
    assert!(stored.updated_at > stored.created_at);
}

#[test]
fn validation_failure_leaves_the_cursor_in_place() {
    let service = service();
    let patient = registered_patient(&service);
    let day = date(2025, 6, 1);

    for kind in &FormKind::SEQUENCE[..3] {
        service
            .submit_form(blank_form(*kind, patient.id, day))
            .unwrap();
    }

    // Step 4 with a missing "other" physician name is rejected.
    let mut exam = PhysicalExamination::new(patient.id, day);
    exam.interpreting_physician = InterpretingPhysician::Other;
    let err = service
        .submit_form(IntakeForm::PhysicalExamination(exam))
        .unwrap_err();
    assert!(matches!(err, IntakeError::Validation(_)));

    // Nothing persisted, same step presented again.
    assert!(
        service
            .store()
            .list_forms(patient.id, FormKind::PhysicalExamination)
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        service.next_step(patient.id).unwrap(),
        IntakeStep::Form {
            kind: FormKind::PhysicalExamination
        }
    );
}

#[test]
fn invalid_medication_row_blocks_the_whole_form() {
    let service = service();
    let patient = registered_patient(&service);

    let mut form = SupplementaryInformation::new(patient.id, date(2025, 6, 1));
    form.medications.push(Medication {
        name: "Zolpidem".to_string(),
        quality: None,
        dosage: "10mg".to_string(),
        quantity: Some("30".to_string()),
        condition: "insomnia".to_string(),
        self_prescribed: false,
    });
    form.medications.push(Medication {
        name: String::new(), // invalid child row
        quality: None,
        dosage: "5mg".to_string(),
        quantity: None,
        condition: "reflux".to_string(),
        self_prescribed: true,
    });

    let err = service
        .submit_form(IntakeForm::SupplementaryInformation(form))
        .unwrap_err();
    assert!(matches!(err, IntakeError::Validation(_)));

    // Neither the parent record nor any medication row was persisted.
    assert!(
        service
            .store()
            .list_forms(patient.id, FormKind::SupplementaryInformation)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn submitting_for_an_unknown_patient_is_not_found() {
    let service = service();
    let orphan = EpworthScale::new(Uuid::new_v4(), date(2025, 6, 1));
    let err = service
        .submit_form(IntakeForm::EpworthScale(orphan))
        .unwrap_err();
    assert!(matches!(
        err,
        IntakeError::Store(StoreError::PatientNotFound { .. })
    ));
}

#[test]
fn study_report_carries_the_severity_band() {
    let service = service();
    let patient = registered_patient(&service);

    let mut study = SleepStudyResult::new(patient.id, date(2025, 7, 2), StudyType::Diagnostic);
    study.ahi = Some(31.4);
    study.min_oxygen_saturation = Some(82);
    let report = service.record_study(study).unwrap();
    assert_eq!(report.severity, AhiSeverity::Severe);

    let unknown = SleepStudyResult::new(patient.id, date(2025, 8, 2), StudyType::Titration);
    let report = service.record_study(unknown).unwrap();
    assert_eq!(report.severity, AhiSeverity::Unknown);
}

#[test]
fn study_reports_are_ordered_newest_first() {
    let service = service();
    let patient = registered_patient(&service);

    let mut older = SleepStudyResult::new(patient.id, date(2025, 3, 10), StudyType::Diagnostic);
    older.ahi = Some(7.5);
    service.record_study(older).unwrap();

    let mut newer = SleepStudyResult::new(patient.id, date(2025, 9, 18), StudyType::Titration);
    newer.ahi = Some(2.1);
    service.record_study(newer).unwrap();

    let reports = study_reports(service.store(), patient.id).unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].study.study_date, date(2025, 9, 18));
    assert_eq!(reports[0].severity, AhiSeverity::Normal);
    assert_eq!(reports[1].study.study_date, date(2025, 3, 10));
    assert_eq!(reports[1].severity, AhiSeverity::Mild);
}

#[test]
fn epworth_trend_is_ordered_oldest_first() {
    let service = service();
    let patient = registered_patient(&service);

    let mut later = EpworthScale::new(patient.id, date(2025, 8, 1));
    later.sitting_reading = Some(3);
    later.watching_tv = Some(3);
    later.sitting_inactive = Some(3);
    later.car_passenger = Some(3);
    service
        .submit_form(IntakeForm::EpworthScale(later))
        .unwrap();

    let earlier = EpworthScale::new(patient.id, date(2025, 5, 1));
    service
        .submit_form(IntakeForm::EpworthScale(earlier))
        .unwrap();

    let trend = epworth_trend(service.store(), patient.id).unwrap();
    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].form_date, date(2025, 5, 1));
    assert_eq!(trend[0].total_score, Some(0));
    assert_eq!(trend[0].severity, EpworthSeverity::Normal);
    assert_eq!(trend[1].form_date, date(2025, 8, 1));
    assert_eq!(trend[1].total_score, Some(12));
    assert_eq!(trend[1].severity, EpworthSeverity::Moderate);
}
