//! Emergency card view of a record.
//!
//! This is what first responders see on the lock-screen card: personal
//! fields with a placeholder when empty, plus the clinical lists.

use serde::{Deserialize, Serialize};

use crate::record::{Allergy, Condition, EmergencyContact, MedicalRecord, Medication, Severity};

/// Placeholder shown for personal fields the user left blank
pub const NOT_PROVIDED: &str = "Not provided";

/// Flattened snapshot for offline emergency access
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmergencySnapshot {
    pub full_name: String,
    pub date_of_birth: String,
    pub blood_type: String,
    pub height: String,
    pub weight: String,
    pub organ_donor: bool,
    pub allergies: Vec<Allergy>,
    pub medications: Vec<Medication>,
    pub conditions: Vec<Condition>,
    pub emergency_contacts: Vec<EmergencyContact>,
}

impl EmergencySnapshot {
    pub fn from_record(record: &MedicalRecord) -> Self {
        let info = &record.personal_info;
        Self {
            full_name: or_placeholder(&info.full_name),
            date_of_birth: or_placeholder(&info.date_of_birth),
            blood_type: or_placeholder(&info.blood_type),
            height: or_placeholder(&info.height),
            weight: or_placeholder(&info.weight),
            organ_donor: info.organ_donor,
            allergies: record.allergies.clone(),
            medications: record.medications.clone(),
            conditions: record.conditions.clone(),
            emergency_contacts: record.emergency_contacts.clone(),
        }
    }

    /// Whether any recorded allergy is severe
    pub fn has_severe_allergy(&self) -> bool {
        self.allergies.iter().any(|a| a.severity == Severity::Severe)
    }
}

fn or_placeholder(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        value.to_string()
    }
}
