//! Share resolution.
//!
//! Turns a sharing id (or a scanned link) back into its payload. Expiry is
//! checked here, on read. A successful read bumps the grant's access counter
//! with a read-modify-write; that bump is best effort, so concurrent readers
//! can lose increments and a failed bump never fails the read.
//!
//! Reads are unlimited until expiry. There is no view-once mode.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::SharingConfig;
use crate::disclosure::RedactedDisclosure;
use crate::error::{SharingError, SharingResult};
use crate::grant::{GrantStatus, SharingRecord};
use crate::id::SharingId;
use crate::link::parse_sharing_id;
use crate::store::DocumentStore;

/// What a link holder gets back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedShare {
    pub sharing_id: SharingId,
    pub payload: RedactedDisclosure,
    pub expires_at: DateTime<Utc>,
    /// Time left at the moment of resolution
    pub remaining: Duration,
    /// Access count after this read, as far as the store acknowledged it
    pub access_count: u64,
}

/// Reads grants and enforces expiry.
#[derive(Clone)]
pub struct ShareResolver {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
    config: SharingConfig,
}

impl std::fmt::Debug for ShareResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareResolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ShareResolver {
    pub fn new(store: Arc<dyn DocumentStore>, config: SharingConfig) -> SharingResult<Self> {
        Self::with_clock(store, Arc::new(SystemClock), config)
    }

    pub fn with_clock(
        store: Arc<dyn DocumentStore>,
        clock: Arc<dyn Clock>,
        config: SharingConfig,
    ) -> SharingResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(store, clock, config))
    }

    pub(crate) fn from_parts(
        store: Arc<dyn DocumentStore>,
        clock: Arc<dyn Clock>,
        config: SharingConfig,
    ) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    /// Look a grant up without counting it as an access.
    pub fn lookup(&self, sharing_id: &str) -> SharingResult<SharingRecord> {
        let id = SharingId::parse(sharing_id)
            .ok_or_else(|| SharingError::GrantNotFound(sharing_id.to_string()))?;

        let document = self
            .store
            .get(&self.config.collection, id.as_str())?
            .ok_or_else(|| SharingError::GrantNotFound(id.to_string()))?;

        let record = SharingRecord::from_document(document)?;
        if record.sharing_id() != &id {
            return Err(SharingError::CorruptRecord(format!(
                "document under {} carries sharing id {}",
                id,
                record.sharing_id()
            )));
        }
        Ok(record)
    }

    /// Current state of a grant, without counting an access.
    pub fn status(&self, sharing_id: &str) -> SharingResult<GrantStatus> {
        Ok(self.lookup(sharing_id)?.status_at(self.clock.now()))
    }

    /// Resolve an id to its payload, counting the access.
    ///
    /// Expired grants yield [`SharingError::GrantExpired`] and the payload is
    /// not returned.
    pub fn resolve(&self, sharing_id: &str) -> SharingResult<ResolvedShare> {
        let mut record = self.lookup(sharing_id)?;
        let now = self.clock.now();

        let Some(remaining) = record.remaining_at(now) else {
            debug!(sharing_id = %record.sharing_id(), "sharing grant expired");
            return Err(SharingError::GrantExpired {
                sharing_id: record.sharing_id().to_string(),
                expired_at: record.expires_at(),
            });
        };

        let previous = record.access_count();
        record.record_access();
        let access_count = match self.bump_access_count(&record) {
            Ok(()) => record.access_count(),
            Err(e) => {
                warn!(
                    sharing_id = %record.sharing_id(),
                    error = %e,
                    "failed to record share access"
                );
                previous
            }
        };

        debug!(sharing_id = %record.sharing_id(), access_count, "sharing grant resolved");

        Ok(ResolvedShare {
            sharing_id: record.sharing_id().clone(),
            payload: record.payload().clone(),
            expires_at: record.expires_at(),
            remaining,
            access_count,
        })
    }

    /// Resolve a full share URL (as scanned from a QR code).
    pub fn resolve_link(&self, url: &str) -> SharingResult<ResolvedShare> {
        let id = parse_sharing_id(&self.config, url)
            .ok_or_else(|| SharingError::GrantNotFound(url.to_string()))?;
        self.resolve(id.as_str())
    }

    fn bump_access_count(&self, record: &SharingRecord) -> SharingResult<()> {
        let document = record.to_document()?;
        self.store
            .put(&self.config.collection, record.sharing_id().as_str(), document)?;
        Ok(())
    }
}
