use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::clinical_details::ClinicalExaminationDetails;
use crate::models::daily_symptoms::DailySymptomAssessment;
use crate::models::epworth::EpworthScale;
use crate::models::form_kind::FormKind;
use crate::models::medical_history::MedicalHistory;
use crate::models::pap_titration::PapTitration;
use crate::models::patient_information::PatientInformation;
use crate::models::physical_examination::PhysicalExamination;
use crate::models::supplementary::SupplementaryInformation;

/// Sum type over the eight per-visit form records. A submission carries one
/// of these; the workflow layer never needs to know which concrete form it
/// is holding.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum IntakeForm {
    PatientInformation(PatientInformation),
    EpworthScale(EpworthScale),
    MedicalHistory(MedicalHistory),
    PhysicalExamination(PhysicalExamination),
    DailySymptomAssessment(DailySymptomAssessment),
    ClinicalExaminationDetails(ClinicalExaminationDetails),
    PapTitration(PapTitration),
    SupplementaryInformation(SupplementaryInformation),
}

impl IntakeForm {
    pub fn kind(&self) -> FormKind {
        match self {
            IntakeForm::PatientInformation(_) => FormKind::PatientInformation,
            IntakeForm::EpworthScale(_) => FormKind::EpworthScale,
            IntakeForm::MedicalHistory(_) => FormKind::MedicalHistory,
            IntakeForm::PhysicalExamination(_) => FormKind::PhysicalExamination,
            IntakeForm::DailySymptomAssessment(_) => FormKind::DailySymptomAssessment,
            IntakeForm::ClinicalExaminationDetails(_) => FormKind::ClinicalExaminationDetails,
            IntakeForm::PapTitration(_) => FormKind::PapTitration,
            IntakeForm::SupplementaryInformation(_) => FormKind::SupplementaryInformation,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            IntakeForm::PatientInformation(f) => f.id,
            IntakeForm::EpworthScale(f) => f.id,
            IntakeForm::MedicalHistory(f) => f.id,
            IntakeForm::PhysicalExamination(f) => f.id,
            IntakeForm::DailySymptomAssessment(f) => f.id,
            IntakeForm::ClinicalExaminationDetails(f) => f.id,
            IntakeForm::PapTitration(f) => f.id,
            IntakeForm::SupplementaryInformation(f) => f.id,
        }
    }

    pub fn patient_id(&self) -> Uuid {
        match self {
            IntakeForm::PatientInformation(f) => f.patient_id,
            IntakeForm::EpworthScale(f) => f.patient_id,
            IntakeForm::MedicalHistory(f) => f.patient_id,
            IntakeForm::PhysicalExamination(f) => f.patient_id,
            IntakeForm::DailySymptomAssessment(f) => f.patient_id,
            IntakeForm::ClinicalExaminationDetails(f) => f.patient_id,
            IntakeForm::PapTitration(f) => f.patient_id,
            IntakeForm::SupplementaryInformation(f) => f.patient_id,
        }
    }

    /// Refresh the audit timestamp. Called right before a save.
    pub fn touch(&mut self) {
        let now = Timestamp::now();
        match self {
            IntakeForm::PatientInformation(f) => f.updated_at = now,
            IntakeForm::EpworthScale(f) => f.updated_at = now,
            IntakeForm::MedicalHistory(f) => f.updated_at = now,
            IntakeForm::PhysicalExamination(f) => f.updated_at = now,
            IntakeForm::DailySymptomAssessment(f) => f.updated_at = now,
            IntakeForm::ClinicalExaminationDetails(f) => f.updated_at = now,
            IntakeForm::PapTitration(f) => f.updated_at = now,
            IntakeForm::SupplementaryInformation(f) => f.updated_at = now,
        }
    }

    pub fn form_date(&self) -> Date {
        match self {
            IntakeForm::PatientInformation(f) => f.form_date,
            IntakeForm::EpworthScale(f) => f.form_date,
            IntakeForm::MedicalHistory(f) => f.form_date,
            IntakeForm::PhysicalExamination(f) => f.form_date,
            IntakeForm::DailySymptomAssessment(f) => f.form_date,
            IntakeForm::ClinicalExaminationDetails(f) => f.form_date,
            IntakeForm::PapTitration(f) => f.form_date,
            IntakeForm::SupplementaryInformation(f) => f.form_date,
        }
    }
}
