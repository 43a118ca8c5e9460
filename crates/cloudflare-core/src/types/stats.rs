use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de::{lenient_i64, lenient_string};

/// Traffic statistics for a zone (`stats`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Start of the reporting window, epoch milliseconds
    #[serde(default, rename = "timeZero", deserialize_with = "lenient_i64")]
    pub time_zero: i64,

    /// End of the reporting window, epoch milliseconds
    #[serde(default, rename = "timeEnd", deserialize_with = "lenient_i64")]
    pub time_end: i64,

    /// Number of objects returned
    #[serde(default, deserialize_with = "lenient_i64")]
    pub count: i64,

    /// More results are available
    #[serde(default)]
    pub has_more: bool,

    /// Statistics objects
    #[serde(default, rename = "objs")]
    pub objects: Vec<StatObject>,
}

impl Stats {
    /// Start of the reporting window
    #[must_use]
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time_zero)
    }

    /// End of the reporting window
    #[must_use]
    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time_end)
    }
}

/// Per-zone statistics for one reporting window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatObject {
    #[serde(default, rename = "cachedServerTime", deserialize_with = "lenient_i64")]
    pub cached_server_time: i64,

    #[serde(default, rename = "cachedExpryTime", deserialize_with = "lenient_i64")]
    pub cached_expiry_time: i64,

    /// Page views and unique visitors split by visitor class
    #[serde(default, rename = "trafficBreakdown")]
    pub traffic_breakdown: Option<TrafficBreakdown>,

    /// Bandwidth served, in KB
    #[serde(default, rename = "bandwidthServed")]
    pub bandwidth_served: Option<BandwidthServed>,

    /// Requests served
    #[serde(default, rename = "requestsServed")]
    pub requests_served: Option<RequestsServed>,

    /// Zone is on a paid plan
    #[serde(default)]
    pub pro_zone: bool,

    #[serde(default, rename = "pageLoadTime", deserialize_with = "lenient_i64")]
    pub page_load_time: i64,

    #[serde(default, rename = "currentServerTime", deserialize_with = "lenient_i64")]
    pub current_server_time: i64,

    /// Interval the window was computed for
    #[serde(default, deserialize_with = "lenient_i64")]
    pub interval: i64,

    /// Zone creation date, epoch milliseconds
    #[serde(default, rename = "zoneCDate", deserialize_with = "lenient_i64")]
    pub zone_created: i64,

    /// Security profile (e.g. "Medium", "High")
    #[serde(default, rename = "userSecuritySetting", deserialize_with = "lenient_string")]
    pub user_security_setting: String,

    /// Development mode expiry, 0 when off
    #[serde(default, deserialize_with = "lenient_i64")]
    pub dev_mode: i64,

    /// IPv6 gateway setting
    #[serde(default, deserialize_with = "lenient_i64")]
    pub ipv46: i64,

    /// Always-online setting
    #[serde(default, deserialize_with = "lenient_i64")]
    pub ob: i64,

    /// Cache level ("agg" or "basic")
    #[serde(default, rename = "cache_lvl", deserialize_with = "lenient_string")]
    pub cache_level: String,
}

/// Page views and unique visitors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficBreakdown {
    #[serde(default, rename = "pageviews")]
    pub page_views: Option<TrafficStat>,

    #[serde(default)]
    pub uniques: Option<TrafficStat>,
}

/// Counts split by visitor class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficStat {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub regular: i64,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub threat: i64,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub crawler: i64,
}

impl TrafficStat {
    /// Sum over all visitor classes
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.regular + self.threat + self.crawler
    }
}

/// Bandwidth split between the edge cache and the origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BandwidthServed {
    #[serde(default)]
    pub cloudflare: f64,

    #[serde(default)]
    pub user: f64,
}

/// Requests split between the edge cache and the origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestsServed {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub cloudflare: i64,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub user: i64,
}

impl RequestsServed {
    /// Share of requests answered from cache, in `0.0..=1.0`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cache_ratio(&self) -> Option<f64> {
        let total = self.cloudflare + self.user;
        (total > 0).then(|| self.cloudflare as f64 / total as f64)
    }
}
