//! Expiry Tests
//!
//! Grants stay readable until their expiry instant and not a moment after.

#[cfg(test)]
mod tests {
    use crate::fixtures::{harness, scenario_record, t0};
    use chrono::Duration;
    use medipass_sharing::{compose, DisclosureSelection, GrantStatus, SharingError};

    #[test]
    fn test_one_day_grant_lifecycle() {
        let h = harness();
        let payload = compose(
            Some(&scenario_record()),
            &DisclosureSelection::emergency_default(),
            &[],
        )
        .unwrap();

        let grant = h.ledger.create_grant("user-1", payload, 24.0).unwrap();
        assert_eq!(grant.created_at(), t0());
        assert_eq!(grant.expires_at(), t0() + Duration::hours(24));

        let resolver = h.ledger.resolver();
        let id = grant.sharing_id().as_str();

        let before = t0() + Duration::hours(23) + Duration::minutes(59);
        h.clock.set(before);
        assert_eq!(grant.status_at(before), GrantStatus::Active);
        assert_eq!(resolver.status(id).unwrap(), GrantStatus::Active);
        let shared = resolver.resolve(id).unwrap();
        assert_eq!(shared.remaining, Duration::minutes(1));

        let after = t0() + Duration::hours(24) + Duration::minutes(1);
        h.clock.set(after);
        assert_eq!(grant.status_at(after), GrantStatus::Expired);
        assert_eq!(resolver.status(id).unwrap(), GrantStatus::Expired);
        match resolver.resolve(id) {
            Err(SharingError::GrantExpired { expired_at, .. }) => {
                assert_eq!(expired_at, t0() + Duration::hours(24));
            }
            other => panic!("expected GrantExpired, got {:?}", other),
        }
    }

    #[test]
    fn test_expiry_instant_is_exclusive() {
        let h = harness();
        let payload = compose(Some(&scenario_record()), &DisclosureSelection::none(), &[]).unwrap();
        let grant = h.ledger.create_grant("user-1", payload, 1.0).unwrap();

        h.clock.set(grant.expires_at() - Duration::milliseconds(1));
        assert!(h.ledger.resolver().resolve(grant.sharing_id().as_str()).is_ok());

        h.clock.set(grant.expires_at());
        assert!(matches!(
            h.ledger.resolver().resolve(grant.sharing_id().as_str()),
            Err(SharingError::GrantExpired { .. })
        ));
    }

    #[test]
    fn test_expired_grant_is_kept_in_store() {
        let h = harness();
        let payload = compose(Some(&scenario_record()), &DisclosureSelection::none(), &[]).unwrap();
        let grant = h.ledger.create_grant("user-1", payload, 1.0).unwrap();

        h.clock.advance(Duration::days(30));
        let stale = h.ledger.resolver().lookup(grant.sharing_id().as_str()).unwrap();
        assert_eq!(stale, grant);
        assert_eq!(h.store.len("sharing"), 1);
    }

    #[test]
    fn test_menu_choices() {
        let h = harness();
        for choice in h.ledger.config().ttl_menu() {
            let grant = h
                .ledger
                .share_with_choice(
                    "user-1",
                    Some(&scenario_record()),
                    &DisclosureSelection::none(),
                    &[],
                    choice,
                )
                .unwrap();
            assert_eq!(
                grant.expires_at() - grant.created_at(),
                Duration::hours(choice.hours() as i64),
                "{}",
                choice
            );
        }
    }

    #[test]
    fn test_reads_do_not_shorten_lifetime() {
        let h = harness();
        let payload = compose(Some(&scenario_record()), &DisclosureSelection::all(), &[]).unwrap();
        let grant = h.ledger.create_grant("user-1", payload, 72.0).unwrap();
        let resolver = h.ledger.resolver();

        for hour in 0..72 {
            h.clock.set(t0() + Duration::hours(hour));
            let shared = resolver.resolve(grant.sharing_id().as_str()).unwrap();
            assert_eq!(shared.expires_at, grant.expires_at());
            assert_eq!(shared.access_count, hour as u64 + 1);
        }
    }
}
