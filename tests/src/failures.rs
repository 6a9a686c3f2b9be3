//! Failure Tests
//!
//! Store outages, bad input and missing data. A failed share never leaves a
//! half-made grant behind and never hands the caller a link.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::fixtures::{scenario_record, t0, FlakyStore};
    use medipass_sharing::{
        compose, DisclosureSelection, DocumentStore, ManualClock, SharingConfig, SharingError,
        SharingLedger, StoreError,
    };
    use serde_json::json;

    fn ledger_over(store: Arc<FlakyStore>) -> SharingLedger {
        SharingLedger::with_clock(store, Arc::new(ManualClock::new(t0())), SharingConfig::default())
            .unwrap()
    }

    #[test]
    fn test_store_outage_returns_persistence_error() {
        let store = Arc::new(FlakyStore::new(1));
        let ledger = ledger_over(store.clone());

        let result = ledger.share(
            "user-1",
            Some(&scenario_record()),
            &DisclosureSelection::emergency_default(),
            &[],
            24.0,
        );

        assert!(matches!(
            result,
            Err(SharingError::Persistence(StoreError::Unavailable(_)))
        ));
        assert_eq!(store.attempts(), 1);
        assert_eq!(store.stored("sharing"), 0);
    }

    #[test]
    fn test_retry_after_outage_uses_new_id() {
        let store = Arc::new(FlakyStore::new(1));
        let ledger = ledger_over(store.clone());
        let payload = compose(Some(&scenario_record()), &DisclosureSelection::all(), &[]).unwrap();

        assert!(ledger.create_grant("user-1", payload.clone(), 24.0).is_err());
        let grant = ledger.create_grant("user-1", payload, 24.0).unwrap();

        assert_eq!(store.attempts(), 2);
        assert_eq!(store.stored("sharing"), 1);
        assert!(store.get("sharing", grant.sharing_id().as_str()).unwrap().is_some());
    }

    #[test]
    fn test_invalid_ttl_never_reaches_store() {
        let store = Arc::new(FlakyStore::new(0));
        let ledger = ledger_over(store.clone());
        let payload = compose(Some(&scenario_record()), &DisclosureSelection::all(), &[]).unwrap();

        for ttl in [0.0, -24.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ledger.create_grant("user-1", payload.clone(), ttl),
                Err(SharingError::InvalidTtl { .. })
            ));
        }
        assert_eq!(store.attempts(), 0);
    }

    #[test]
    fn test_missing_record_never_reaches_store() {
        let store = Arc::new(FlakyStore::new(0));
        let ledger = ledger_over(store.clone());

        let result = ledger.share("user-1", None, &DisclosureSelection::none(), &[], 24.0);

        assert!(matches!(result, Err(SharingError::MissingRecord)));
        assert_eq!(store.attempts(), 0);
    }

    #[test]
    fn test_unknown_and_malformed_ids() {
        let store = Arc::new(FlakyStore::new(0));
        let resolver = ledger_over(store).resolver();

        for id in ["share_1705309200000_doesnotexist", "", "../etc/passwd", "share 1"] {
            assert!(
                matches!(resolver.resolve(id), Err(SharingError::GrantNotFound(_))),
                "{:?}",
                id
            );
        }
        assert!(matches!(
            resolver.resolve_link("https://elsewhere.example/share/share_1_abcdefghi"),
            Err(SharingError::GrantNotFound(_))
        ));
    }

    #[test]
    fn test_tampered_document_is_reported_corrupt() {
        let store = Arc::new(FlakyStore::new(0));
        let ledger = ledger_over(store.clone());
        store
            .put("sharing", "share_1_tampered00", json!({ "sharingId": "share_1_tampered00" }))
            .unwrap();

        assert!(matches!(
            ledger.resolver().resolve("share_1_tampered00"),
            Err(SharingError::CorruptRecord(_))
        ));
    }
}
