//! Uploaded document metadata.
//!
//! The file itself lives in blob storage; this is the metadata row the app
//! keeps per upload, and the only form in which a document can be disclosed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference to an uploaded medical document
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRef {
    pub document_id: String,
    pub file_name: String,
    /// MIME type, `application/octet-stream` when unknown
    pub file_type: String,
    /// User-chosen kind, e.g. "Lab Report"; "Other" when not given
    pub document_type: String,
    #[serde(default)]
    pub description: String,
    pub download_url: String,
    pub uploaded_at: DateTime<Utc>,
}

impl DocumentRef {
    pub fn new(
        document_id: impl Into<String>,
        file_name: impl Into<String>,
        download_url: impl Into<String>,
        uploaded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            file_name: file_name.into(),
            file_type: "application/octet-stream".to_string(),
            document_type: "Other".to_string(),
            description: String::new(),
            download_url: download_url.into(),
            uploaded_at,
        }
    }

    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = file_type.into();
        self
    }

    pub fn with_document_type(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = document_type.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
