//! Main CloudFlare API client implementation.

use crate::api::{ClientApi, HostApi};
use crate::config::Credentials;
use crate::protocol::{self, Endpoint, FormParams, Operation};
use crate::transport::{HttpTransport, Transport};
use cloudflare_core::{CloudflareError, Result};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client API endpoint
pub const DEFAULT_CLIENT_URL: &str = "https://www.cloudflare.com/api_json.html";

/// Host provisioning API endpoint
pub const DEFAULT_HOST_URL: &str = "https://api.cloudflare.com/host-gw.html";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Main CloudFlare API client.
///
/// Cheap to clone; clones share the transport and credentials.
#[derive(Clone)]
pub struct CloudflareClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    credentials: Credentials,
    client_url: String,
    host_url: String,
    user_agent: String,
}

impl CloudflareClient {
    /// Create a new client with the given credentials using default settings
    pub fn new(credentials: Credentials) -> Result<Self> {
        CloudflareClientBuilder::new(credentials).build()
    }

    /// Create a client from `CLOUDFLARE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(credentials: Credentials) -> CloudflareClientBuilder {
        CloudflareClientBuilder::new(credentials)
    }

    /// Access general client operations (stats, zones, records)
    #[must_use]
    pub fn client_api(&self) -> ClientApi<'_> {
        ClientApi::new(self)
    }

    /// Access host provisioning operations
    #[must_use]
    pub fn host_api(&self) -> HostApi<'_> {
        HostApi::new(self)
    }

    /// Credentials this client authenticates with
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// URL the given endpoint resolves to
    #[must_use]
    pub fn endpoint_url(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Client => &self.inner.client_url,
            Endpoint::Host => &self.inner.host_url,
        }
    }

    /// Invoke `operation` and decode its payload into `T`.
    ///
    /// Credential fields for the operation's endpoint are appended to
    /// `params`. Each call is independent: no retries, no session state.
    #[instrument(skip_all, fields(operation = operation.name, endpoint = %operation.endpoint))]
    pub async fn invoke<T>(&self, operation: &Operation, params: FormParams) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let credentials = self.credential_fields(operation.endpoint)?;
        let url = self.endpoint_url(operation.endpoint);
        let request =
            protocol::build_request(operation, url, &self.inner.user_agent, params, credentials);

        let body = self.inner.transport.send(request).await?;
        let payload = protocol::resolve(operation, url, &body)?;

        debug!("operation succeeded");
        Ok(payload)
    }

    /// Form fields identifying the caller to `endpoint`
    fn credential_fields(&self, endpoint: Endpoint) -> Result<FormParams> {
        let creds = &self.inner.credentials;
        match endpoint {
            Endpoint::Client => Ok(FormParams::new()
                .with("tkn", creds.token())
                .with("email", creds.email())),
            Endpoint::Host => {
                let host_key = creds.host_key().ok_or_else(|| {
                    CloudflareError::Config("host API requires a host key".into())
                })?;
                let mut fields = FormParams::new().with("host_key", host_key);
                fields.push_opt("user_key", creds.user_key());
                Ok(fields)
            }
        }
    }
}

impl std::fmt::Debug for CloudflareClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareClient")
            .field("credentials", &self.inner.credentials)
            .field("client_url", &self.inner.client_url)
            .field("host_url", &self.inner.host_url)
            .field("user_agent", &self.inner.user_agent)
            .finish_non_exhaustive()
    }
}

/// Builder for configuring a [`CloudflareClient`]
pub struct CloudflareClientBuilder {
    credentials: Credentials,
    client_url: String,
    host_url: String,
    timeout: Duration,
    user_agent: String,
    transport: Option<Arc<dyn Transport>>,
}

impl CloudflareClientBuilder {
    /// Create a new builder with the given credentials
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            client_url: DEFAULT_CLIENT_URL.to_string(),
            host_url: DEFAULT_HOST_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("cloudflare-rust/{}", env!("CARGO_PKG_VERSION")),
            transport: None,
        }
    }

    /// Set the client API URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.client_url = url.into();
        self
    }

    /// Set the host API URL (useful for testing)
    #[must_use]
    pub fn host_base_url(mut self, url: impl Into<String>) -> Self {
        self.host_url = url.into();
        self
    }

    /// Set the request timeout of the default transport
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Use a custom transport instead of the default `reqwest` one.
    ///
    /// The timeout setting is ignored when a transport is supplied.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<CloudflareClient> {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(self.timeout)?),
        };

        Ok(CloudflareClient {
            inner: Arc::new(ClientInner {
                transport,
                credentials: self.credentials,
                client_url: self.client_url,
                host_url: self.host_url,
                user_agent: self.user_agent,
            }),
        })
    }
}
