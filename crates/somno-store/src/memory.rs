use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use somno_core::models::form_kind::FormKind;
use somno_core::models::intake_form::IntakeForm;
use somno_core::models::patient::Patient;
use somno_core::models::sleep_study::SleepStudyResult;
use uuid::Uuid;

use crate::error::StoreError;
use crate::store::ClinicStore;

#[derive(Debug, Default)]
struct State {
    patients: HashMap<Uuid, Patient>,
    forms: HashMap<Uuid, Vec<IntakeForm>>,
    studies: HashMap<Uuid, Vec<SleepStudyResult>>,
}

/// In-process store keyed by record id. Forms and studies are bucketed per
/// patient so cascade deletion is a single map removal.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ClinicStore for MemoryStore {
    fn get_patient(&self, id: Uuid) -> Result<Patient, StoreError> {
        self.state()
            .patients
            .get(&id)
            .cloned()
            .ok_or(StoreError::PatientNotFound { id })
    }

    fn save_patient(&self, patient: Patient) -> Result<Patient, StoreError> {
        let mut state = self.state();
        for other in state.patients.values() {
            if other.id == patient.id {
                continue;
            }
            if other.patient_id == patient.patient_id {
                return Err(StoreError::DuplicatePatientId(patient.patient_id));
            }
            if let (Some(a), Some(b)) = (&other.national_id, &patient.national_id)
                && a == b
            {
                return Err(StoreError::DuplicateNationalId(b.clone()));
            }
        }
        tracing::debug!(id = %patient.id, patient_id = %patient.patient_id, "saving patient");
        state.patients.insert(patient.id, patient.clone());
        Ok(patient)
    }

    fn delete_patient(&self, id: Uuid) -> Result<(), StoreError> {
        let mut state = self.state();
        state
            .patients
            .remove(&id)
            .ok_or(StoreError::PatientNotFound { id })?;
        // Cascade: the patient owns its forms and study results.
        state.forms.remove(&id);
        state.studies.remove(&id);
        tracing::debug!(id = %id, "deleted patient and owned records");
        Ok(())
    }

    fn get_form(&self, patient_id: Uuid, form_id: Uuid) -> Result<IntakeForm, StoreError> {
        self.state()
            .forms
            .get(&patient_id)
            .and_then(|forms| forms.iter().find(|f| f.id() == form_id))
            .cloned()
            .ok_or(StoreError::FormNotFound { id: form_id })
    }

    fn list_forms(&self, patient_id: Uuid, kind: FormKind) -> Result<Vec<IntakeForm>, StoreError> {
        let state = self.state();
        if !state.patients.contains_key(&patient_id) {
            return Err(StoreError::PatientNotFound { id: patient_id });
        }
        Ok(state
            .forms
            .get(&patient_id)
            .map(|forms| {
                forms
                    .iter()
                    .filter(|f| f.kind() == kind)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn save_form(&self, form: IntakeForm) -> Result<IntakeForm, StoreError> {
        let mut state = self.state();
        let patient_id = form.patient_id();
        if !state.patients.contains_key(&patient_id) {
            return Err(StoreError::PatientNotFound { id: patient_id });
        }
        let forms = state.forms.entry(patient_id).or_default();
        match forms.iter_mut().find(|f| f.id() == form.id()) {
            Some(existing) => *existing = form.clone(),
            None => forms.push(form.clone()),
        }
        tracing::debug!(id = %form.id(), kind = %form.kind(), "saved intake form");
        Ok(form)
    }

    fn list_studies(&self, patient_id: Uuid) -> Result<Vec<SleepStudyResult>, StoreError> {
        let state = self.state();
        if !state.patients.contains_key(&patient_id) {
            return Err(StoreError::PatientNotFound { id: patient_id });
        }
        Ok(state.studies.get(&patient_id).cloned().unwrap_or_default())
    }

    fn save_study(&self, study: SleepStudyResult) -> Result<SleepStudyResult, StoreError> {
        let mut state = self.state();
        if !state.patients.contains_key(&study.patient_id) {
            return Err(StoreError::PatientNotFound {
                id: study.patient_id,
            });
        }
        let studies = state.studies.entry(study.patient_id).or_default();
        match studies.iter_mut().find(|s| s.id == study.id) {
            Some(existing) => *existing = study.clone(),
            None => studies.push(study.clone()),
        }
        Ok(study)
    }
}
