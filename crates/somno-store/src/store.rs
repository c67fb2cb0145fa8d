use somno_core::models::form_kind::FormKind;
use somno_core::models::intake_form::IntakeForm;
use somno_core::models::patient::Patient;
use somno_core::models::sleep_study::SleepStudyResult;
use uuid::Uuid;

use crate::error::StoreError;

/// Persistence contract for patients, intake forms and study results.
///
/// Saves are upserts keyed by record id and return the stored value. A form
/// and its child entries (treatments, medications) travel inside one record,
/// so a single `save_form` call is the atomic unit — an implementation must
/// persist the whole record or nothing.
pub trait ClinicStore {
    fn get_patient(&self, id: Uuid) -> Result<Patient, StoreError>;
    fn save_patient(&self, patient: Patient) -> Result<Patient, StoreError>;
    /// Removes the patient along with all of their forms and study results.
    fn delete_patient(&self, id: Uuid) -> Result<(), StoreError>;

    fn get_form(&self, patient_id: Uuid, form_id: Uuid) -> Result<IntakeForm, StoreError>;
    fn list_forms(&self, patient_id: Uuid, kind: FormKind) -> Result<Vec<IntakeForm>, StoreError>;
    fn save_form(&self, form: IntakeForm) -> Result<IntakeForm, StoreError>;

    fn list_studies(&self, patient_id: Uuid) -> Result<Vec<SleepStudyResult>, StoreError>;
    fn save_study(&self, study: SleepStudyResult) -> Result<SleepStudyResult, StoreError>;
}
