//! MediPass Sharing
//!
//! Time-limited sharing of a redacted medical record:
//! - **Disclosure**: pick categories, get a payload holding exactly those
//! - **Ledger**: persist the payload as a grant with a fresh id and an expiry
//! - **Links**: `https://<host>/share/<id>` for display or QR rendering
//! - **Resolver**: turn an id back into its payload while the grant is active
//!
//! Sharing ids are lookup keys, not secrets: anyone holding the link can read
//! the payload until it expires, and there is no revocation.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use medipass_records::{Allergy, MedicalRecord, Severity};
//! use medipass_sharing::{
//!     Category, DisclosureSelection, MemoryStore, ShareLink, SharingConfig, SharingLedger,
//! };
//!
//! let store = Arc::new(MemoryStore::new());
//! let ledger = SharingLedger::new(store, SharingConfig::default()).unwrap();
//!
//! let mut record = MedicalRecord::default();
//! record.allergies.push(Allergy::new("Penicillin", Severity::Severe));
//!
//! let selection = DisclosureSelection::from_categories([Category::Allergies]);
//! let expiry = ledger.config().default_ttl();
//! let grant = ledger
//!     .share_with_choice("user-1", Some(&record), &selection, &[], expiry)
//!     .unwrap();
//!
//! let link = ShareLink::for_grant(ledger.config(), &grant);
//! let shared = ledger.resolver().resolve_link(&link.url).unwrap();
//! assert_eq!(shared.payload.categories(), vec![Category::Allergies]);
//! ```

pub mod clock;
pub mod config;
pub mod disclosure;
pub mod error;
pub mod expiry;
pub mod grant;
pub mod id;
pub mod ledger;
pub mod link;
pub mod resolver;
pub mod selection;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::SharingConfig;
pub use disclosure::{compose, RedactedDisclosure};
pub use error::{SharingError, SharingResult};
pub use expiry::ExpiryChoice;
pub use grant::{expiry_after, GrantStatus, SharingRecord};
pub use id::SharingId;
pub use ledger::SharingLedger;
pub use link::{parse_sharing_id, share_url, ShareLink};
pub use resolver::{ResolvedShare, ShareResolver};
pub use selection::{Category, DisclosureSelection};
pub use store::{DocumentStore, MemoryStore, StoreError};
