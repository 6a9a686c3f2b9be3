//! Expiry choices offered on the share screen.
//!
//! The ledger takes any positive number of hours. The menu the user picks
//! from comes from [`SharingConfig`](crate::config::SharingConfig); the
//! constants here are the stock presets.

use serde::{Deserialize, Serialize};

/// One entry of the expiry menu, in whole hours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpiryChoice(u32);

impl ExpiryChoice {
    pub const ONE_HOUR: ExpiryChoice = ExpiryChoice(1);
    pub const ONE_DAY: ExpiryChoice = ExpiryChoice(24);
    pub const THREE_DAYS: ExpiryChoice = ExpiryChoice(72);
    pub const ONE_WEEK: ExpiryChoice = ExpiryChoice(168);

    /// Stock menu
    pub const PRESETS: [ExpiryChoice; 4] = [
        ExpiryChoice::ONE_HOUR,
        ExpiryChoice::ONE_DAY,
        ExpiryChoice::THREE_DAYS,
        ExpiryChoice::ONE_WEEK,
    ];

    /// `None` for zero hours.
    pub fn from_hours(hours: u32) -> Option<Self> {
        (hours > 0).then_some(Self(hours))
    }

    pub fn hours(&self) -> u32 {
        self.0
    }

    pub fn ttl_hours(&self) -> f64 {
        f64::from(self.0)
    }

    /// Menu text: "1 hour", "24 hours", "3 days", "1 week".
    pub fn label(&self) -> String {
        let hours = self.0;
        match hours {
            1 => "1 hour".to_string(),
            h if h % 168 == 0 => plural(h / 168, "week"),
            h if h > 24 && h % 24 == 0 => plural(h / 24, "day"),
            h => plural(h, "hour"),
        }
    }
}

impl Default for ExpiryChoice {
    fn default() -> Self {
        Self::ONE_DAY
    }
}

impl std::fmt::Display for ExpiryChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}
