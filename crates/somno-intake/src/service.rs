use jiff::Timestamp;
use somno_core::models::intake_form::IntakeForm;
use somno_core::models::patient::Patient;
use somno_core::models::sleep_study::SleepStudyResult;
use somno_store::ClinicStore;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::IntakeError;
use crate::report::StudyReport;
use crate::session::{IntakeSession, IntakeStep};

/// Orchestrates one submission: validate, recompute derived fields, persist,
/// then answer with the next step. Derived fields are recomputed here,
/// immediately before the persistence call, never inside the store.
pub struct IntakeService<S> {
    store: S,
}

impl<S: ClinicStore> IntakeService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create or update the patient record. BMI is derived from the
    /// submitted height and weight; any staff-entered value is overwritten.
    pub fn save_patient(&self, mut patient: Patient) -> Result<Patient, IntakeError> {
        if let Err(errors) = somno_validate::validate_patient(&patient) {
            warn!(patient_id = %patient.patient_id, errors = errors.len(), "patient rejected");
            return Err(errors.into());
        }
        patient.bmi = Some(somno_scoring::bmi(
            patient.height_cm as f64,
            patient.weight_kg,
        )?);
        patient.updated_at = Timestamp::now();
        let patient = self.store.save_patient(patient)?;
        info!(id = %patient.id, patient_id = %patient.patient_id, "patient saved");
        Ok(patient)
    }

    /// Submit one intake form for an existing patient. On success the form
    /// and its child entries are persisted as one unit and the caller gets
    /// the next step to present. On a validation failure nothing is
    /// persisted and the cursor stays where it was.
    pub fn submit_form(&self, mut form: IntakeForm) -> Result<IntakeStep, IntakeError> {
        let patient = self.store.get_patient(form.patient_id())?;

        if let Err(errors) = somno_validate::validate_form(&form) {
            warn!(
                patient_id = %patient.patient_id,
                kind = %form.kind(),
                errors = errors.len(),
                "form rejected"
            );
            return Err(errors.into());
        }

        if let IntakeForm::EpworthScale(scale) = &mut form {
            scale.total_score = Some(somno_scoring::epworth_total(&scale.answers()));
        }

        form.touch();
        let form = self.store.save_form(form)?;
        let next = self.next_step(patient.id)?;
        info!(
            patient_id = %patient.patient_id,
            kind = %form.kind(),
            step = form.kind().step(),
            "form saved"
        );
        Ok(next)
    }

    /// The next form to present for this patient, re-derived from stored
    /// records.
    pub fn next_step(&self, patient_id: Uuid) -> Result<IntakeStep, IntakeError> {
        let session = IntakeSession::load(&self.store, patient_id)?;
        Ok(session.next_step())
    }

    /// Record a sleep study result and hand back the report view with the
    /// severity band computed on read.
    pub fn record_study(&self, mut study: SleepStudyResult) -> Result<StudyReport, IntakeError> {
        self.store.get_patient(study.patient_id)?;
        if let Err(errors) = somno_validate::validate_study(&study) {
            warn!(patient_id = %study.patient_id, errors = errors.len(), "study rejected");
            return Err(errors.into());
        }
        study.updated_at = Timestamp::now();
        let study = self.store.save_study(study)?;
        info!(id = %study.id, "sleep study saved");
        Ok(StudyReport::new(study))
    }
}
