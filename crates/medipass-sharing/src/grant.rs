//! Sharing grants.
//!
//! A grant is the stored artifact behind one share link. Its expiry is
//! evaluated by whoever reads it; nothing sweeps expired grants.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::disclosure::RedactedDisclosure;
use crate::error::{SharingError, SharingResult};
use crate::id::SharingId;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Lifecycle state of a grant at a given instant.
///
/// `Active` → `Expired` is one-way. There is no revoked state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrantStatus {
    Active,
    Expired,
}

/// A persisted sharing grant
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharingRecord {
    sharing_id: SharingId,
    /// Authenticated subject who created the share
    owner_id: String,
    payload: RedactedDisclosure,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    /// Successful resolutions so far; only the resolver bumps it
    access_count: u64,
}

impl SharingRecord {
    /// Build a fresh grant. Fails with `InvalidTtl` when the TTL is not a
    /// positive finite number of hours or the expiry cannot be represented.
    pub(crate) fn new(
        sharing_id: SharingId,
        owner_id: impl Into<String>,
        payload: RedactedDisclosure,
        created_at: DateTime<Utc>,
        ttl_hours: f64,
    ) -> SharingResult<Self> {
        let expires_at = expiry_after(created_at, ttl_hours)?;
        Ok(Self {
            sharing_id,
            owner_id: owner_id.into(),
            payload,
            created_at,
            expires_at,
            access_count: 0,
        })
    }

    pub fn sharing_id(&self) -> &SharingId {
        &self.sharing_id
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn payload(&self) -> &RedactedDisclosure {
        &self.payload
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn access_count(&self) -> u64 {
        self.access_count
    }

    /// Span between creation and expiry.
    pub fn ttl(&self) -> Duration {
        self.expires_at - self.created_at
    }

    pub fn status_at(&self, now: DateTime<Utc>) -> GrantStatus {
        if now < self.expires_at {
            GrantStatus::Active
        } else {
            GrantStatus::Expired
        }
    }

    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.status_at(now) == GrantStatus::Active
    }

    /// Time left before expiry, `None` once expired.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.is_active_at(now).then(|| self.expires_at - now)
    }

    pub(crate) fn record_access(&mut self) {
        self.access_count = self.access_count.saturating_add(1);
    }

    pub(crate) fn to_document(&self) -> SharingResult<Value> {
        serde_json::to_value(self).map_err(|e| {
            SharingError::Persistence(crate::store::StoreError::Serialization(e.to_string()))
        })
    }

    /// Decode a stored document, checking the grant invariants.
    pub(crate) fn from_document(document: Value) -> SharingResult<Self> {
        let record: Self = serde_json::from_value(document)
            .map_err(|e| SharingError::CorruptRecord(e.to_string()))?;

        if record.expires_at <= record.created_at {
            return Err(SharingError::CorruptRecord(format!(
                "grant {} expires before it was created",
                record.sharing_id
            )));
        }
        Ok(record)
    }
}

/// `created_at + ttl_hours`, at millisecond precision.
pub fn expiry_after(created_at: DateTime<Utc>, ttl_hours: f64) -> SharingResult<DateTime<Utc>> {
    let invalid = || SharingError::InvalidTtl { ttl_hours };

    if !ttl_hours.is_finite() || ttl_hours <= 0.0 {
        return Err(invalid());
    }

    let millis = (ttl_hours * MILLIS_PER_HOUR).round();
    if millis < 1.0 || millis >= i64::MAX as f64 {
        return Err(invalid());
    }

    let ttl = Duration::try_milliseconds(millis as i64).ok_or_else(invalid)?;
    created_at.checked_add_signed(ttl).ok_or_else(invalid)
}
