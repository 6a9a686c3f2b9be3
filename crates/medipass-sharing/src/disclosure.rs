//! Disclosure composition.
//!
//! Builds the redacted payload a share link exposes. A category appears in the
//! payload if and only if it was selected; a deselected category is absent,
//! never null or empty. A selected category whose slice is empty is present
//! with an empty value.

use medipass_records::{
    Allergy, Condition, DocumentRef, EmergencyContact, MedicalRecord, Medication, PersonalInfo,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SharingError, SharingResult};
use crate::selection::{Category, DisclosureSelection};

/// The redacted subset of a record embedded in a grant.
///
/// Only [`compose`] builds one, so the presence of each key always matches
/// the selection it was composed from. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RedactedDisclosure {
    #[serde(skip_serializing_if = "Option::is_none")]
    personal_info: Option<PersonalInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allergies: Option<Vec<Allergy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    medications: Option<Vec<Medication>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conditions: Option<Vec<Condition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    emergency_contacts: Option<Vec<EmergencyContact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    documents: Option<Vec<DocumentRef>>,
}

impl RedactedDisclosure {
    pub fn personal_info(&self) -> Option<&PersonalInfo> {
        self.personal_info.as_ref()
    }

    pub fn allergies(&self) -> Option<&[Allergy]> {
        self.allergies.as_deref()
    }

    pub fn medications(&self) -> Option<&[Medication]> {
        self.medications.as_deref()
    }

    pub fn conditions(&self) -> Option<&[Condition]> {
        self.conditions.as_deref()
    }

    pub fn emergency_contacts(&self) -> Option<&[EmergencyContact]> {
        self.emergency_contacts.as_deref()
    }

    pub fn documents(&self) -> Option<&[DocumentRef]> {
        self.documents.as_deref()
    }

    pub fn contains(&self, category: Category) -> bool {
        match category {
            Category::PersonalInfo => self.personal_info.is_some(),
            Category::Allergies => self.allergies.is_some(),
            Category::Medications => self.medications.is_some(),
            Category::Conditions => self.conditions.is_some(),
            Category::EmergencyContacts => self.emergency_contacts.is_some(),
            Category::Documents => self.documents.is_some(),
        }
    }

    /// Categories present in the payload, in payload order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.contains(*c))
            .collect()
    }

    /// True when the share exposes nothing at all.
    pub fn is_empty(&self) -> bool {
        self.categories().is_empty()
    }
}

/// Compose the payload for one share request.
///
/// `documents` is the caller's chosen document list; documents are not part
/// of the record. Fails with [`SharingError::MissingRecord`] when `record` is
/// `None` rather than producing an empty payload.
pub fn compose(
    record: Option<&MedicalRecord>,
    selection: &DisclosureSelection,
    documents: &[DocumentRef],
) -> SharingResult<RedactedDisclosure> {
    let record = record.ok_or(SharingError::MissingRecord)?;

    let disclosure = RedactedDisclosure {
        personal_info: selection
            .personal_info
            .then(|| record.personal_info.clone()),
        allergies: selection.allergies.then(|| record.allergies.clone()),
        medications: selection.medications.then(|| record.medications.clone()),
        conditions: selection.conditions.then(|| record.conditions.clone()),
        emergency_contacts: selection
            .emergency_contacts
            .then(|| record.emergency_contacts.clone()),
        documents: selection.documents.then(|| documents.to_vec()),
    };

    debug!(categories = ?disclosure.categories(), "composed disclosure");

    Ok(disclosure)
}
