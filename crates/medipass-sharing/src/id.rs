//! Sharing identifiers.
//!
//! Shape: `<prefix>_<creation millis>_<random suffix>`, e.g.
//! `share_1714555800000_k3v9q0x2mz7a`. The timestamp keeps ids sortable and
//! easy to trace in logs; the suffix makes them hard to enumerate within a
//! grant's lifetime. This is a lookup key, not a bearer secret.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Suffix alphabet (base 36, lowercase)
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Shortest random suffix the generator will produce
pub const MIN_SUFFIX_LEN: usize = 9;

/// Longest id accepted from the outside (scanned links, URLs)
pub const MAX_ID_LEN: usize = 128;

/// Opaque identifier of a sharing grant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SharingId(String);

impl SharingId {
    /// Generate a fresh id for a grant created at `created_at`.
    ///
    /// `suffix_len` is raised to [`MIN_SUFFIX_LEN`] if smaller.
    pub fn generate(prefix: &str, created_at: DateTime<Utc>, suffix_len: usize) -> Self {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..suffix_len.max(MIN_SUFFIX_LEN))
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();

        Self(format!("{}_{}_{}", prefix, created_at.timestamp_millis(), suffix))
    }

    /// Accept an id from outside (a link or a QR scan).
    ///
    /// Only checks the character set and length; whether a grant exists is
    /// the resolver's business.
    pub fn parse(raw: &str) -> Option<Self> {
        let valid = !raw.is_empty()
            && raw.len() <= MAX_ID_LEN
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        valid.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creation millis embedded in a generated id, if the id has that shape.
    pub fn created_millis(&self) -> Option<i64> {
        let mut parts = self.0.rsplitn(3, '_');
        let _suffix = parts.next()?;
        parts.next()?.parse().ok()
    }
}

impl std::fmt::Display for SharingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SharingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
