//! Shared fixtures: records, clocks and store doubles.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use medipass_records::{Allergy, EmergencyContact, MedicalRecord, Medication, Severity};
use medipass_sharing::{
    DocumentStore, ManualClock, MemoryStore, SharingConfig, SharingLedger, StoreError,
};
use serde_json::Value;

/// 2024-01-15 09:00:00 UTC
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
}

/// Two allergies, one medication, no conditions, one emergency contact.
pub fn scenario_record() -> MedicalRecord {
    let mut record = MedicalRecord::default();
    record.personal_info.full_name = "Jordan Rivera".to_string();
    record.personal_info.date_of_birth = "1988-07-21".to_string();
    record.personal_info.blood_type = "A-".to_string();
    record.personal_info.height = "170 cm".to_string();
    record.personal_info.weight = "65 kg".to_string();
    record.personal_info.organ_donor = true;
    record.allergies = vec![
        Allergy::new("Penicillin", Severity::Severe),
        Allergy::new("Shellfish", Severity::Moderate),
    ];
    record.medications = vec![Medication::new("Lisinopril", "10mg", "once daily")];
    record.emergency_contacts = vec![EmergencyContact::new("Casey Rivera", "Spouse", "+1 555 0142")];
    record
}

pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub clock: Arc<ManualClock>,
    pub ledger: SharingLedger,
}

/// Ledger over a fresh memory store with the clock parked at [`t0`].
pub fn harness() -> Harness {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(ManualClock::new(t0()));
    let ledger = SharingLedger::with_clock(store.clone(), clock.clone(), SharingConfig::default())
        .expect("default config is valid");
    Harness {
        store,
        clock,
        ledger,
    }
}

/// Store whose first `failures` writes fail; later writes go through.
pub struct FlakyStore {
    inner: MemoryStore,
    failures: usize,
    attempts: AtomicUsize,
}

impl FlakyStore {
    pub fn new(failures: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            failures,
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn stored(&self, collection: &str) -> usize {
        self.inner.len(collection)
    }
}

impl DocumentStore for FlakyStore {
    fn put(&self, collection: &str, key: &str, document: Value) -> Result<(), StoreError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failures {
            return Err(StoreError::Unavailable(format!("timeout on attempt {}", attempt + 1)));
        }
        self.inner.put(collection, key, document)
    }

    fn get(&self, collection: &str, key: &str) -> Result<Option<Value>, StoreError> {
        self.inner.get(collection, key)
    }
}
