pub mod clinical_details;
pub mod daily_symptoms;
pub mod epworth;
pub mod form_kind;
pub mod intake_form;
pub mod medical_history;
pub mod pap_titration;
pub mod patient;
pub mod patient_information;
pub mod physical_examination;
pub mod sleep_study;
pub mod supplementary;
