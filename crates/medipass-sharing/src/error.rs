//! Error types for sharing operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::store::StoreError;

/// Result type for sharing operations.
pub type SharingResult<T> = Result<T, SharingError>;

/// Errors that can occur while composing, granting or resolving a share.
#[derive(Debug, Error)]
pub enum SharingError {
    /// The composer was handed no record to disclose from.
    #[error("no medical record to share")]
    MissingRecord,

    /// TTL was zero, negative, NaN, infinite, or too large to represent.
    #[error("invalid sharing ttl: {ttl_hours} hours")]
    InvalidTtl { ttl_hours: f64 },

    /// The backing store failed; nothing was handed back to the caller.
    #[error("persistence error: {0}")]
    Persistence(#[from] StoreError),

    /// Selection flags from the client were missing or malformed.
    #[error("invalid disclosure selection: {0}")]
    InvalidSelection(String),

    /// No grant stored under this id.
    #[error("sharing grant not found: {0}")]
    GrantNotFound(String),

    /// The grant exists but its expiry has passed.
    #[error("sharing grant {sharing_id} expired at {expired_at}")]
    GrantExpired {
        sharing_id: String,
        expired_at: DateTime<Utc>,
    },

    /// A stored grant document could not be decoded.
    #[error("corrupt sharing record: {0}")]
    CorruptRecord(String),

    /// Configuration rejected by validation.
    #[error("invalid sharing config: {0}")]
    InvalidConfig(String),
}
