use serde::{Deserialize, Serialize};

use super::de::{lenient_i64, lenient_string};

/// Page of DNS records for a zone (`rec_load_all`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Records {
    #[serde(default)]
    pub has_more: bool,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub count: i64,

    #[serde(default, rename = "objs")]
    pub objects: Vec<Record>,
}

/// A DNS record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, rename = "rec_id", deserialize_with = "lenient_string")]
    pub record_id: String,

    #[serde(default, rename = "rec_tag", deserialize_with = "lenient_string")]
    pub record_tag: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub zone_name: String,

    /// Fully qualified record name
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub display_name: String,

    /// Record type (A, AAAA, CNAME, MX, TXT, ...)
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub record_type: String,

    /// Priority (MX/SRV)
    #[serde(default, deserialize_with = "lenient_i64")]
    pub prio: i64,

    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub display_content: String,

    /// TTL in seconds, "1" meaning automatic
    #[serde(default, deserialize_with = "lenient_string")]
    pub ttl: String,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub ttl_ceil: i64,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub ssl_id: i64,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub ssl_status: i64,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub ssl_expires_on: i64,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub auto_ttl: i64,

    /// "1" when traffic is proxied through the edge
    #[serde(default, deserialize_with = "lenient_string")]
    pub service_mode: String,

    #[serde(default, rename = "props")]
    pub properties: Option<RecordProperties>,
}

impl Record {
    /// Returns true if traffic for this record is proxied
    #[must_use]
    pub fn is_proxied(&self) -> bool {
        self.service_mode == "1"
            || self
                .properties
                .as_ref()
                .is_some_and(|p| p.cloud_on != 0)
    }

    /// TTL in seconds, `None` when automatic or unparsable
    #[must_use]
    pub fn ttl_secs(&self) -> Option<u32> {
        match self.ttl.parse::<u32>() {
            Ok(1) | Err(_) => None,
            Ok(ttl) => Some(ttl),
        }
    }
}

/// Record property flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordProperties {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub proxiable: i64,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub cloud_on: i64,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub cf_open: i64,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub ssl: i64,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub expired_ssl: i64,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub expiring_ssl: i64,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub pending_ssl: i64,
}
