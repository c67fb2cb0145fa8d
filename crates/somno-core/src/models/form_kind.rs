use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The eight intake form kinds, in the order the clinic administers them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FormKind {
    PatientInformation,
    EpworthScale,
    MedicalHistory,
    PhysicalExamination,
    DailySymptomAssessment,
    ClinicalExaminationDetails,
    PapTitration,
    SupplementaryInformation,
}

impl FormKind {
    /// The fixed intake order, forms 1 through 8.
    pub const SEQUENCE: [FormKind; 8] = [
        FormKind::PatientInformation,
        FormKind::EpworthScale,
        FormKind::MedicalHistory,
        FormKind::PhysicalExamination,
        FormKind::DailySymptomAssessment,
        FormKind::ClinicalExaminationDetails,
        FormKind::PapTitration,
        FormKind::SupplementaryInformation,
    ];

    /// 1-based position in the intake sequence.
    pub fn step(self) -> u8 {
        match self {
            FormKind::PatientInformation => 1,
            FormKind::EpworthScale => 2,
            FormKind::MedicalHistory => 3,
            FormKind::PhysicalExamination => 4,
            FormKind::DailySymptomAssessment => 5,
            FormKind::ClinicalExaminationDetails => 6,
            FormKind::PapTitration => 7,
            FormKind::SupplementaryInformation => 8,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            FormKind::PatientInformation => "patient_information",
            FormKind::EpworthScale => "epworth_scale",
            FormKind::MedicalHistory => "medical_history",
            FormKind::PhysicalExamination => "physical_examination",
            FormKind::DailySymptomAssessment => "daily_symptom_assessment",
            FormKind::ClinicalExaminationDetails => "clinical_examination_details",
            FormKind::PapTitration => "pap_titration",
            FormKind::SupplementaryInformation => "supplementary_information",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FormKind::PatientInformation => "Patient Information",
            FormKind::EpworthScale => "Epworth Sleepiness Scale",
            FormKind::MedicalHistory => "Medical History",
            FormKind::PhysicalExamination => "Physical Examination",
            FormKind::DailySymptomAssessment => "Daily Symptom Assessment",
            FormKind::ClinicalExaminationDetails => "Clinical Examination Details",
            FormKind::PapTitration => "PAP Titration",
            FormKind::SupplementaryInformation => "Supplementary Information",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for FormKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormKind::SEQUENCE
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| CoreError::UnknownFormKind(s.to_string()))
    }
}
