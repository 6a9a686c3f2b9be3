//! Which categories of a record a share exposes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SharingError, SharingResult};

/// A disclosable category. The wire key is what appears in the shared payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    PersonalInfo,
    Allergies,
    Medications,
    Conditions,
    EmergencyContacts,
    Documents,
}

impl Category {
    /// Every category, in payload order.
    pub const ALL: [Category; 6] = [
        Category::PersonalInfo,
        Category::Allergies,
        Category::Medications,
        Category::Conditions,
        Category::EmergencyContacts,
        Category::Documents,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::PersonalInfo => "personalInfo",
            Category::Allergies => "allergies",
            Category::Medications => "medications",
            Category::Conditions => "conditions",
            Category::EmergencyContacts => "emergencyContacts",
            Category::Documents => "documents",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Per-category flags for one share request.
///
/// Every flag is required; there is no "absent means false". Client input
/// goes through [`DisclosureSelection::from_json`], which rejects missing or
/// unknown flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DisclosureSelection {
    pub personal_info: bool,
    pub allergies: bool,
    pub medications: bool,
    pub conditions: bool,
    pub emergency_contacts: bool,
    pub documents: bool,
}

impl DisclosureSelection {
    /// Nothing selected.
    pub fn none() -> Self {
        Self {
            personal_info: false,
            allergies: false,
            medications: false,
            conditions: false,
            emergency_contacts: false,
            documents: false,
        }
    }

    /// Everything selected, documents included.
    pub fn all() -> Self {
        Self {
            personal_info: true,
            allergies: true,
            medications: true,
            conditions: true,
            emergency_contacts: true,
            documents: true,
        }
    }

    /// The share screen's starting point: the whole record, no documents.
    pub fn emergency_default() -> Self {
        Self {
            documents: false,
            ..Self::all()
        }
    }

    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        categories
            .into_iter()
            .fold(Self::none(), |selection, c| selection.with(c, true))
    }

    /// Parse the client's flag object. All six flags must be present booleans.
    pub fn from_json(value: &Value) -> SharingResult<Self> {
        Self::deserialize(value).map_err(|e| SharingError::InvalidSelection(e.to_string()))
    }

    pub fn with(mut self, category: Category, selected: bool) -> Self {
        *self.flag_mut(category) = selected;
        self
    }

    pub fn toggle(&mut self, category: Category) {
        let flag = self.flag_mut(category);
        *flag = !*flag;
    }

    pub fn is_selected(&self, category: Category) -> bool {
        match category {
            Category::PersonalInfo => self.personal_info,
            Category::Allergies => self.allergies,
            Category::Medications => self.medications,
            Category::Conditions => self.conditions,
            Category::EmergencyContacts => self.emergency_contacts,
            Category::Documents => self.documents,
        }
    }

    /// Selected categories in payload order.
    pub fn selected(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.is_selected(*c))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.selected().is_empty()
    }

    fn flag_mut(&mut self, category: Category) -> &mut bool {
        match category {
            Category::PersonalInfo => &mut self.personal_info,
            Category::Allergies => &mut self.allergies,
            Category::Medications => &mut self.medications,
            Category::Conditions => &mut self.conditions,
            Category::EmergencyContacts => &mut self.emergency_contacts,
            Category::Documents => &mut self.documents,
        }
    }
}
