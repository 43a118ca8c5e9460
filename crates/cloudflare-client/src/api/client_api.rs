//! Client API endpoints.

use crate::protocol::{FormParams, Operation};
use crate::CloudflareClient;
use cloudflare_core::{IpClass, Record, Records, Result, Stats, ZoneCheck, ZoneIp, ZoneSetting, Zones};
use serde::de::DeserializeOwned;

/// Operation descriptors for the client API
pub mod ops {
    use crate::protocol::Operation;

    /// Traffic statistics for a zone
    pub const STATS: Operation = Operation::client("stats", &["result"]);
    /// All zones owned by the account
    pub const ZONE_LOAD_MULTI: Operation = Operation::client("zone_load_multi", &["zones"]);
    /// Zone ids for a batch of zone names
    pub const ZONE_CHECK: Operation = Operation::client("zone_check", &["zones"]);
    /// Recent visitor IPs for a zone
    pub const ZONE_IPS: Operation = Operation::client("zone_ips", &["ips"]);
    /// Current settings of a zone
    pub const ZONE_SETTINGS: Operation = Operation::client("zone_settings", &["result", "objs"]);
    /// All DNS records of a zone
    pub const REC_LOAD_ALL: Operation = Operation::client("rec_load_all", &["recs"]);
}

/// Client API endpoints
pub struct ClientApi<'a> {
    client: &'a CloudflareClient,
}

impl<'a> ClientApi<'a> {
    pub(crate) const fn new(client: &'a CloudflareClient) -> Self {
        Self { client }
    }

    /// Get traffic statistics for a zone.
    ///
    /// `interval` selects the reporting window (e.g. 20 for the past 30 days,
    /// 40 for the past 24 hours).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let stats = client.client_api().stats("example.com", 20).await?;
    /// println!("{} objects", stats.count);
    /// ```
    pub async fn stats(&self, zone: &str, interval: u32) -> Result<Stats> {
        let mut params = FormParams::new().with("z", zone);
        params.push_int("interval", interval);
        self.client.invoke(&ops::STATS, params).await
    }

    /// List all zones owned by the account
    pub async fn zone_load_multi(&self) -> Result<Zones> {
        self.client
            .invoke(&ops::ZONE_LOAD_MULTI, FormParams::new())
            .await
    }

    /// Look up zone ids for a batch of zone names
    pub async fn zone_check(&self, zones: &[&str]) -> Result<ZoneCheck> {
        let mut params = FormParams::new();
        params.push_list("zones", zones);
        self.client.invoke(&ops::ZONE_CHECK, params).await
    }

    /// List visitor IPs seen on a zone in the past `hours`, optionally
    /// filtered by visitor class
    pub async fn zone_ips(
        &self,
        zone: &str,
        hours: u32,
        class: Option<IpClass>,
    ) -> Result<Vec<ZoneIp>> {
        let mut params = FormParams::new().with("z", zone);
        params.push_int("hours", hours);
        params.push_opt("class", class.map(IpClass::as_str));
        self.client.invoke(&ops::ZONE_IPS, params).await
    }

    /// Get the current settings of a zone
    pub async fn zone_settings(&self, zone: &str) -> Result<Vec<ZoneSetting>> {
        self.client
            .invoke(&ops::ZONE_SETTINGS, FormParams::new().with("z", zone))
            .await
    }

    /// List all DNS records of a zone
    pub async fn rec_load_all(&self, zone: &str) -> Result<Vec<Record>> {
        Ok(self.records(zone).await?.objects)
    }

    /// List DNS records of a zone with paging metadata
    pub async fn records(&self, zone: &str) -> Result<Records> {
        self.client
            .invoke(&ops::REC_LOAD_ALL, FormParams::new().with("z", zone))
            .await
    }

    /// Call a client API operation that has no typed wrapper.
    ///
    /// The whole `response` object is decoded into `T`.
    pub async fn call<T>(&self, operation: &'static str, params: FormParams) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.client
            .invoke(&Operation::client(operation, &[]), params)
            .await
    }
}
