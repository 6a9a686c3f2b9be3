//! Medical record entry types.
//!
//! Field names serialize in camelCase so stored documents keep the shape the
//! mobile client reads and writes (`fullName`, `bloodType`, `phoneNumber`, ...).

use serde::{Deserialize, Serialize};

/// The full medical record for one subject.
///
/// Owned by the subject and replaced wholesale on save; the last write wins.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    /// Known allergies, in the order the user entered them
    #[serde(default)]
    pub allergies: Vec<Allergy>,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub emergency_contacts: Vec<EmergencyContact>,
}

impl MedicalRecord {
    /// True when nothing at all has been entered.
    pub fn is_empty(&self) -> bool {
        self.personal_info == PersonalInfo::default()
            && self.allergies.is_empty()
            && self.medications.is_empty()
            && self.conditions.is_empty()
            && self.emergency_contacts.is_empty()
    }
}

/// Personal information block.
///
/// Height and weight are free text as typed by the user (units included).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    /// ABO/Rh blood type, e.g. "O+"
    #[serde(default)]
    pub blood_type: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub organ_donor: bool,
}

/// Allergy severity
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    #[default]
    Mild,
    Moderate,
    Severe,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Mild => write!(f, "Mild"),
            Severity::Moderate => write!(f, "Moderate"),
            Severity::Severe => write!(f, "Severe"),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Allergy {
    pub name: String,
    #[serde(default)]
    pub severity: Severity,
}

impl Allergy {
    pub fn new(name: impl Into<String>, severity: Severity) -> Self {
        Self {
            name: name.into(),
            severity,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub name: String,
    #[serde(default)]
    pub dosage: String,
    /// How often it is taken, e.g. "twice daily"
    #[serde(default)]
    pub frequency: String,
}

impl Medication {
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        frequency: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            frequency: frequency.into(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub name: String,
    /// Date of diagnosis as entered (not parsed)
    #[serde(default)]
    pub diagnosed_date: String,
    #[serde(default)]
    pub notes: String,
}

impl Condition {
    pub fn new(
        name: impl Into<String>,
        diagnosed_date: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            diagnosed_date: diagnosed_date.into(),
            notes: notes.into(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    #[serde(default)]
    pub relationship: String,
    pub phone_number: String,
}

impl EmergencyContact {
    pub fn new(
        name: impl Into<String>,
        relationship: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            relationship: relationship.into(),
            phone_number: phone_number.into(),
        }
    }
}
