//! Concurrency Tests
//!
//! Many owners sharing at once against one ledger and one store.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;

    use crate::fixtures::{harness, scenario_record};
    use medipass_sharing::{compose, DisclosureSelection, SharingId};

    const GRANTS: usize = 1000;
    const WORKERS: usize = 8;

    #[test]
    fn test_concurrent_grants_get_distinct_ids() {
        let h = harness();
        let payload = compose(
            Some(&scenario_record()),
            &DisclosureSelection::emergency_default(),
            &[],
        )
        .unwrap();

        let ids: Vec<SharingId> = thread::scope(|s| {
            let handles: Vec<_> = (0..WORKERS)
                .map(|w| {
                    let ledger = &h.ledger;
                    let payload = &payload;
                    s.spawn(move || {
                        (w..GRANTS)
                            .step_by(WORKERS)
                            .map(|i| {
                                ledger
                                    .create_grant(&format!("user-{}", i), payload.clone(), 24.0)
                                    .unwrap()
                                    .sharing_id()
                                    .clone()
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(ids.len(), GRANTS);
        let distinct: HashSet<&SharingId> = ids.iter().collect();
        assert_eq!(distinct.len(), GRANTS);
        assert_eq!(h.store.len("sharing"), GRANTS);
    }

    #[test]
    fn test_concurrent_reads_all_succeed() {
        let h = harness();
        let payload = compose(Some(&scenario_record()), &DisclosureSelection::all(), &[]).unwrap();
        let grant = h.ledger.create_grant("user-1", payload.clone(), 24.0).unwrap();
        let resolver = h.ledger.resolver();

        thread::scope(|s| {
            for _ in 0..WORKERS {
                s.spawn(|| {
                    for _ in 0..50 {
                        let shared = resolver.resolve(grant.sharing_id().as_str()).unwrap();
                        assert_eq!(shared.payload, payload);
                    }
                });
            }
        });

        // The counter is best effort; concurrent bumps may overwrite each other.
        let stored = resolver.lookup(grant.sharing_id().as_str()).unwrap();
        assert!(stored.access_count() >= 1);
        assert!(stored.access_count() <= (WORKERS * 50) as u64);
    }
}
