use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use somno_core::models::form_kind::FormKind;
use somno_core::models::intake_form::IntakeForm;
use somno_core::models::sleep_study::SleepStudyResult;
use somno_scoring::{AhiSeverity, EpworthSeverity};
use somno_store::{ClinicStore, StoreError};
use ts_rs::TS;
use uuid::Uuid;

/// Read view of a study result with its severity band. The band is derived
/// every time; it is never written back.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StudyReport {
    pub study: SleepStudyResult,
    pub severity: AhiSeverity,
}

impl StudyReport {
    pub fn new(study: SleepStudyResult) -> Self {
        let severity = AhiSeverity::classify(study.ahi);
        Self { study, severity }
    }
}

/// All study results for a patient with their severity bands, for the
/// patient detail view. Newest first, matching the study ordering staff see.
pub fn study_reports<S: ClinicStore>(
    store: &S,
    patient_id: Uuid,
) -> Result<Vec<StudyReport>, StoreError> {
    let mut reports: Vec<StudyReport> = store
        .list_studies(patient_id)?
        .into_iter()
        .map(StudyReport::new)
        .collect();
    reports.sort_by_key(|report| std::cmp::Reverse(report.study.study_date));
    Ok(reports)
}

/// One point on a patient's Epworth history chart.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EpworthTrendPoint {
    pub form_date: Date,
    pub total_score: Option<u8>,
    pub severity: EpworthSeverity,
}

/// Epworth scores over time for one patient, oldest first.
pub fn epworth_trend<S: ClinicStore>(
    store: &S,
    patient_id: Uuid,
) -> Result<Vec<EpworthTrendPoint>, StoreError> {
    let mut points: Vec<EpworthTrendPoint> = store
        .list_forms(patient_id, FormKind::EpworthScale)?
        .into_iter()
        .filter_map(|form| match form {
            IntakeForm::EpworthScale(scale) => Some(EpworthTrendPoint {
                form_date: scale.form_date,
                total_score: scale.total_score,
                severity: EpworthSeverity::classify(scale.total_score),
            }),
            _ => None,
        })
        .collect();
    points.sort_by_key(|point| point.form_date);
    Ok(points)
}
