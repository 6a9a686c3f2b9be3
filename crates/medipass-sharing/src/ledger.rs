//! Sharing ledger.
//!
//! Creates grants and writes them to the document store. Creation is the only
//! write the ledger performs: grants are never updated or deleted here, and
//! the access counter belongs to the resolver.

use std::sync::Arc;

use medipass_records::{DocumentRef, MedicalRecord};
use tracing::{info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::SharingConfig;
use crate::disclosure::{compose, RedactedDisclosure};
use crate::error::{SharingError, SharingResult};
use crate::expiry::ExpiryChoice;
use crate::grant::SharingRecord;
use crate::id::SharingId;
use crate::resolver::ShareResolver;
use crate::selection::DisclosureSelection;
use crate::store::DocumentStore;

/// Issues time-limited sharing grants.
///
/// Holds the store handle it was given at startup; every call writes through
/// that same handle. Safe to share between threads.
#[derive(Clone)]
pub struct SharingLedger {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
    config: SharingConfig,
}

impl std::fmt::Debug for SharingLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharingLedger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SharingLedger {
    /// Ledger on the wall clock.
    pub fn new(store: Arc<dyn DocumentStore>, config: SharingConfig) -> SharingResult<Self> {
        Self::with_clock(store, Arc::new(SystemClock), config)
    }

    pub fn with_clock(
        store: Arc<dyn DocumentStore>,
        clock: Arc<dyn Clock>,
        config: SharingConfig,
    ) -> SharingResult<Self> {
        config.validate()?;
        Ok(Self {
            store,
            clock,
            config,
        })
    }

    pub fn config(&self) -> &SharingConfig {
        &self.config
    }

    /// Resolver reading from the same store and clock.
    pub fn resolver(&self) -> ShareResolver {
        ShareResolver::from_parts(self.store.clone(), self.clock.clone(), self.config.clone())
    }

    /// Create and persist a grant for `payload`, expiring `ttl_hours` from now.
    ///
    /// Every call generates a new id; retrying after an uncertain failure
    /// therefore never reuses an id that may already be stored. On error no
    /// grant is returned, and an invalid TTL never reaches the store.
    pub fn create_grant(
        &self,
        owner_id: &str,
        payload: RedactedDisclosure,
        ttl_hours: f64,
    ) -> SharingResult<SharingRecord> {
        let created_at = self.clock.now();
        let sharing_id =
            SharingId::generate(&self.config.id_prefix, created_at, self.config.id_suffix_len);

        let record = SharingRecord::new(sharing_id, owner_id, payload, created_at, ttl_hours)?;
        let document = record.to_document()?;

        if let Err(e) = self
            .store
            .put(&self.config.collection, record.sharing_id().as_str(), document)
        {
            warn!(
                sharing_id = %record.sharing_id(),
                owner_id = %owner_id,
                error = %e,
                "failed to persist sharing grant"
            );
            return Err(SharingError::Persistence(e));
        }

        info!(
            sharing_id = %record.sharing_id(),
            owner_id = %owner_id,
            expires_at = %record.expires_at(),
            categories = ?record.payload().categories(),
            "sharing grant created"
        );

        Ok(record)
    }

    /// Compose a disclosure and grant it in one step.
    pub fn share(
        &self,
        owner_id: &str,
        record: Option<&MedicalRecord>,
        selection: &DisclosureSelection,
        documents: &[DocumentRef],
        ttl_hours: f64,
    ) -> SharingResult<SharingRecord> {
        let payload = compose(record, selection, documents)?;
        self.create_grant(owner_id, payload, ttl_hours)
    }

    /// Share for one of the configured expiry choices. A choice missing from
    /// the menu is rejected as an invalid TTL before anything is written.
    pub fn share_with_choice(
        &self,
        owner_id: &str,
        record: Option<&MedicalRecord>,
        selection: &DisclosureSelection,
        documents: &[DocumentRef],
        choice: ExpiryChoice,
    ) -> SharingResult<SharingRecord> {
        if !self.config.offers(choice) {
            return Err(SharingError::InvalidTtl {
                ttl_hours: choice.ttl_hours(),
            });
        }
        self.share(owner_id, record, selection, documents, choice.ttl_hours())
    }
}
