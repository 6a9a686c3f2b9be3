//! Input validation for medical records.
//!
//! Validators accumulate every problem into a [`ValidationResult`] so the
//! form can highlight all bad fields at once.

use serde::{Deserialize, Serialize};

use crate::record::MedicalRecord;

/// Blood types accepted by [`validate_blood_type`]
pub const BLOOD_TYPES: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

/// One rejected field, addressed by its path in the stored document
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: ValidationErrorCode,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValidationErrorCode {
    Required,
    InvalidFormat,
    TooLong,
}

/// Every problem found in one pass
#[derive(Clone, Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: ValidationErrorCode,
    ) {
        self.errors.push(ValidationError {
            field: field.into(),
            message: message.into(),
            code,
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Fields that failed, in the order they were checked.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }
}

/// Maximum length of any single free-text field
pub const MAX_FIELD_LEN: usize = 500;

/// Validate an ABO/Rh blood type. Empty means "not provided" and is allowed.
pub fn validate_blood_type(blood_type: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    let trimmed = blood_type.trim();

    if trimmed.is_empty() {
        return result;
    }

    let normalized = trimmed.to_ascii_uppercase();
    if !BLOOD_TYPES.contains(&normalized.as_str()) {
        result.add_error(
            "personalInfo.bloodType",
            "Blood type must be one of A+, A-, B+, B-, AB+, AB-, O+, O-",
            ValidationErrorCode::InvalidFormat,
        );
    }

    result
}

/// Validate a whole record before it is saved.
///
/// Checks:
/// - every allergy, medication, condition and contact has a name
/// - every emergency contact has a phone number
/// - blood type, when given, is a recognized ABO/Rh type
/// - no free-text field exceeds [`MAX_FIELD_LEN`]
pub fn validate_record(record: &MedicalRecord) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.merge(validate_blood_type(&record.personal_info.blood_type));

    check_len(&mut result, "personalInfo.fullName", &record.personal_info.full_name);

    for (i, allergy) in record.allergies.iter().enumerate() {
        require_name(&mut result, &format!("allergies[{}].name", i), &allergy.name);
    }

    for (i, medication) in record.medications.iter().enumerate() {
        require_name(&mut result, &format!("medications[{}].name", i), &medication.name);
        check_len(&mut result, &format!("medications[{}].dosage", i), &medication.dosage);
    }

    for (i, condition) in record.conditions.iter().enumerate() {
        require_name(&mut result, &format!("conditions[{}].name", i), &condition.name);
        check_len(&mut result, &format!("conditions[{}].notes", i), &condition.notes);
    }

    for (i, contact) in record.emergency_contacts.iter().enumerate() {
        require_name(&mut result, &format!("emergencyContacts[{}].name", i), &contact.name);
        if contact.phone_number.trim().is_empty() {
            result.add_error(
                format!("emergencyContacts[{}].phoneNumber", i),
                "Emergency contact needs a phone number",
                ValidationErrorCode::Required,
            );
        }
    }

    result
}

fn require_name(result: &mut ValidationResult, field: &str, value: &str) {
    if value.trim().is_empty() {
        result.add_error(field, "Name is required", ValidationErrorCode::Required);
    } else {
        check_len(result, field, value);
    }
}

fn check_len(result: &mut ValidationResult, field: &str, value: &str) {
    if value.chars().count() > MAX_FIELD_LEN {
        result.add_error(field, "Value is too long", ValidationErrorCode::TooLong);
    }
}
