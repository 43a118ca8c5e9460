//! Host provisioning API endpoints.

use crate::protocol::{FormParams, Operation};
use crate::CloudflareClient;
use cloudflare_core::Result;
use serde::de::DeserializeOwned;

/// Host provisioning API endpoints.
///
/// Requests carry `host_key` (and `user_key` when configured) instead of the
/// token/email pair.
pub struct HostApi<'a> {
    client: &'a CloudflareClient,
}

impl<'a> HostApi<'a> {
    pub(crate) const fn new(client: &'a CloudflareClient) -> Self {
        Self { client }
    }

    /// Call a host API action.
    ///
    /// The whole `response` object is decoded into `T`.
    pub async fn call<T>(&self, action: &'static str, params: FormParams) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.client.invoke(&Operation::host(action, &[]), params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{client_with, StubTransport};
    use crate::{CloudflareError, Credentials, FormParams, DEFAULT_HOST_URL};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_host_call_uses_host_keys() {
        let stub = StubTransport::replying(&json!({
            "result": "success",
            "response": {"user_email": "owner@example.com"}
        }));
        let creds = Credentials::new("t0k", "ops@example.com").with_host_keys("hk-1", "uk-1");
        let client = client_with(stub.clone(), creds);

        let params = FormParams::new().with("cloudflare_email", "owner@example.com");
        let value: Value = client.host_api().call("user_lookup", params).await.unwrap();
        assert_eq!(value["user_email"], "owner@example.com");

        let req = stub.last_request();
        assert_eq!(req.url, DEFAULT_HOST_URL);
        assert_eq!(
            req.body,
            "act=user_lookup&cloudflare_email=owner%40example.com&host_key=hk-1&user_key=uk-1"
        );
        assert!(req.field("tkn").is_none());
    }

    #[tokio::test]
    async fn test_host_error_envelope() {
        let stub = StubTransport::replying(&json!({
            "result": "error",
            "msg": "No or invalid host_key",
            "err_code": 100
        }));
        let creds = Credentials::new("t", "e@example.com").with_host_keys("bad", "");
        let client = client_with(stub.clone(), creds);

        let err = client
            .host_api()
            .call::<Value>("zone_list", FormParams::new())
            .await
            .unwrap_err();
        assert!(matches!(err, CloudflareError::Api { ref url, .. } if url == DEFAULT_HOST_URL));
        assert_eq!(err.api_code(), Some("100"));
        assert!(stub.last_request().field("user_key").is_none());
    }
}
