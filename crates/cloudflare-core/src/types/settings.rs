use serde::{Deserialize, Serialize};

use super::de::{lenient_i64, lenient_string};

/// Current settings of a zone (`zone_settings`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSetting {
    #[serde(default, rename = "userSecuritySetting", deserialize_with = "lenient_string")]
    pub user_security_setting: String,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub dev_mode: i64,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub ipv46: i64,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub ob: i64,

    #[serde(default, rename = "cache_lvl", deserialize_with = "lenient_string")]
    pub cache_level: String,

    #[serde(default, rename = "outboundLinks", deserialize_with = "lenient_string")]
    pub outbound_links: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub r#async: String,

    /// Browser integrity check
    #[serde(default, deserialize_with = "lenient_string")]
    pub bic: String,

    /// Challenge TTL
    #[serde(default, rename = "chl_ttl", deserialize_with = "lenient_string")]
    pub challenge_ttl: String,

    /// Browser cache expiry TTL
    #[serde(default, rename = "exp_ttl", deserialize_with = "lenient_string")]
    pub expire_ttl: String,

    /// Timestamp of the last full cache purge
    #[serde(default, rename = "fpurge_ts", deserialize_with = "lenient_string")]
    pub full_purge_ts: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub hotlink: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub img: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub lazy: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub minify: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub outlink: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub preload: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub s404: String,

    #[serde(default, rename = "sec_lvl", deserialize_with = "lenient_string")]
    pub security_level: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub spdy: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub ssl: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub waf_profile: String,
}

impl ZoneSetting {
    /// Returns true if development mode is on
    #[must_use]
    pub const fn dev_mode_enabled(&self) -> bool {
        self.dev_mode != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_deserialize() {
        let setting: ZoneSetting = serde_json::from_value(json!({
            "userSecuritySetting": "Medium",
            "dev_mode": 0,
            "ipv46": "3",
            "ob": 0,
            "cache_lvl": "agg",
            "outboundLinks": "disabled",
            "async": "0",
            "bic": "1",
            "chl_ttl": 900,
            "exp_ttl": "14400",
            "fpurge_ts": null,
            "sec_lvl": "med",
            "ssl": "0",
            "waf_profile": "off"
        }))
        .unwrap();

        assert_eq!(setting.user_security_setting, "Medium");
        assert_eq!(setting.ipv46, 3);
        assert!(!setting.dev_mode_enabled());
        assert_eq!(setting.r#async, "0");
        assert_eq!(setting.challenge_ttl, "900");
        assert_eq!(setting.full_purge_ts, "");
        assert_eq!(setting.security_level, "med");
    }
}
