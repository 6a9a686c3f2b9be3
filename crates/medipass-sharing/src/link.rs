//! Share links.
//!
//! A link is `https://<share_host>/share/<sharing id>`. The app renders it as
//! text and as a QR code; the barcode itself is drawn by the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SharingConfig;
use crate::grant::SharingRecord;
use crate::id::SharingId;

const SHARE_PATH: &str = "/share/";

/// What the caller needs to show a share: the link and when it stops working.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
    pub sharing_id: SharingId,
    pub url: String,
    pub expires_at: DateTime<Utc>,
}

impl ShareLink {
    pub fn for_grant(config: &SharingConfig, grant: &SharingRecord) -> Self {
        Self {
            sharing_id: grant.sharing_id().clone(),
            url: share_url(config, grant.sharing_id()),
            expires_at: grant.expires_at(),
        }
    }
}

pub fn share_url(config: &SharingConfig, sharing_id: &SharingId) -> String {
    format!("https://{}{}{}", config.share_host, SHARE_PATH, sharing_id)
}

/// Pull the sharing id out of a share URL.
///
/// Only `https` links on the configured host are accepted. A trailing slash,
/// query string or fragment is ignored.
pub fn parse_sharing_id(config: &SharingConfig, url: &str) -> Option<SharingId> {
    let rest = url.trim().strip_prefix("https://")?;
    let (host, path) = rest.split_at(rest.find('/')?);

    if !host.eq_ignore_ascii_case(&config.share_host) {
        return None;
    }

    let raw = path.strip_prefix(SHARE_PATH)?;
    let raw = raw.split(['?', '#']).next().unwrap_or_default();
    let raw = raw.strip_suffix('/').unwrap_or(raw);

    SharingId::parse(raw)
}
