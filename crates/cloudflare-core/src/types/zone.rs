use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::de::{lenient_i64, lenient_string};

/// Page of zones owned by the account (`zone_load_multi`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Zones {
    /// More zones are available
    #[serde(default)]
    pub has_more: bool,

    /// Number of zones in this page
    #[serde(default, deserialize_with = "lenient_i64")]
    pub count: i64,

    /// The zones
    #[serde(default, rename = "objs")]
    pub objects: Vec<Zone>,
}

impl Zones {
    /// Find a zone by name
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Zone> {
        self.objects.iter().find(|z| z.zone_name == name)
    }
}

/// A zone as listed by `zone_load_multi`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    #[serde(default, deserialize_with = "lenient_string")]
    pub zone_id: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub zone_name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub display_name: String,

    /// Status tag (e.g. "V" for active)
    #[serde(default, deserialize_with = "lenient_string")]
    pub zone_status: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub zone_mode: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub zone_type: String,

    /// Hosting partner id, when provisioned through one
    #[serde(default, deserialize_with = "lenient_string")]
    pub host_id: String,

    #[serde(default, rename = "host_pubname", deserialize_with = "lenient_string")]
    pub host_pub_name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub host_website: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub vtxt: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub fqdns: String,

    /// Setup step the zone has reached
    #[serde(default, deserialize_with = "lenient_i64")]
    pub step: i64,

    #[serde(default, deserialize_with = "lenient_string")]
    pub zone_status_class: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub zone_status_desc: String,

    // Shapes below vary between zones; kept opaque.
    #[serde(default)]
    pub ns_vanity_map: Option<Value>,

    #[serde(default)]
    pub orig_registrar: Option<Value>,

    #[serde(default)]
    pub orig_dnshost: Option<Value>,

    #[serde(default)]
    pub orig_ns_names: Option<Value>,

    /// Zone property flags
    #[serde(default)]
    pub props: Map<String, Value>,

    #[serde(default)]
    pub confirm_code: Map<String, Value>,

    /// Actions the account may perform on this zone
    #[serde(default)]
    pub allow: Vec<String>,
}

impl Zone {
    /// Returns true if the zone is active
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.zone_status_class == "status-active" || self.zone_status == "V"
    }

    /// Returns true if the account may perform `action` on this zone
    #[must_use]
    pub fn allows(&self, action: &str) -> bool {
        self.allow.iter().any(|a| a == action)
    }

    /// Read a numeric property flag
    #[must_use]
    pub fn prop(&self, name: &str) -> Option<i64> {
        match self.props.get(name)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }
}

/// Zone name to zone id, as returned by `zone_check`
pub type ZoneCheck = HashMap<String, i64>;

/// A visitor IP seen on a zone (`zone_ips`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneIp {
    #[serde(default, deserialize_with = "lenient_string")]
    pub ip: String,

    /// Visitor class as reported ("regular", "crawler", "threat")
    #[serde(default, deserialize_with = "lenient_string")]
    pub classification: String,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub hits: i64,

    #[serde(default)]
    pub latitude: f64,

    #[serde(default)]
    pub longitude: f64,

    #[serde(default, deserialize_with = "lenient_string")]
    pub zone_name: String,
}

impl ZoneIp {
    /// Parse the address, if well-formed
    #[must_use]
    pub fn addr(&self) -> Option<std::net::IpAddr> {
        self.ip.parse().ok()
    }

    /// Returns the coordinates if either is set
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        (self.latitude != 0.0 || self.longitude != 0.0).then_some((self.latitude, self.longitude))
    }
}

/// Visitor classification filter for `zone_ips`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpClass {
    /// Regular visitors
    #[serde(rename = "r")]
    Regular,
    /// Search engine crawlers
    #[serde(rename = "s")]
    Crawler,
    /// Known threats
    #[serde(rename = "t")]
    Threat,
}

impl IpClass {
    /// Wire value sent in the `class` field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "r",
            Self::Crawler => "s",
            Self::Threat => "t",
        }
    }
}

impl fmt::Display for IpClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IpClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "regular" => Ok(Self::Regular),
            "s" | "crawler" => Ok(Self::Crawler),
            "t" | "threat" => Ok(Self::Threat),
            other => Err(format!("unknown IP class: {other}")),
        }
    }
}
