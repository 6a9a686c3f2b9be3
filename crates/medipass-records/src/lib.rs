//! MediPass Records
//!
//! The personal medical record a MediPass user keeps on their device and in
//! the backing document store:
//! - Personal information (name, date of birth, blood type, body measurements, organ donor status)
//! - Allergies with severity
//! - Current medications
//! - Medical conditions
//! - Emergency contacts
//!
//! Uploaded documents live outside the record; [`DocumentRef`] carries the
//! metadata needed to point at one.
//!
//! # Example
//!
//! ```rust
//! use medipass_records::{Allergy, MedicalRecord, Severity, validate_record};
//!
//! let mut record = MedicalRecord::default();
//! record.personal_info.full_name = "Ada Lovelace".to_string();
//! record.allergies.push(Allergy::new("Penicillin", Severity::Severe));
//!
//! assert!(validate_record(&record).is_valid());
//! ```

pub mod document;
pub mod emergency;
pub mod record;
pub mod validation;

pub use document::DocumentRef;
pub use emergency::{EmergencySnapshot, NOT_PROVIDED};
pub use record::{
    Allergy, Condition, EmergencyContact, MedicalRecord, Medication, PersonalInfo, Severity,
};
pub use validation::{
    validate_blood_type, validate_record, ValidationError, ValidationErrorCode, ValidationResult,
};
