//! Credential configuration.

use cloudflare_core::{CloudflareError, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Environment variable holding the client API token
pub const ENV_TOKEN: &str = "CLOUDFLARE_TOKEN";
/// Environment variable holding the account email
pub const ENV_EMAIL: &str = "CLOUDFLARE_EMAIL";
/// Environment variable holding the hosting partner key
pub const ENV_HOST_KEY: &str = "CLOUDFLARE_HOST_KEY";
/// Environment variable holding the hosted user's key
pub const ENV_USER_KEY: &str = "CLOUDFLARE_USER_KEY";

/// Identity attached to every outgoing request.
///
/// The token/email pair authenticates client API calls. The host key and
/// user key are only needed for the host provisioning API.
#[derive(Clone, Default, Deserialize)]
pub struct Credentials {
    token: String,
    email: String,
    #[serde(default)]
    host_key: Option<String>,
    #[serde(default)]
    user_key: Option<String>,
}

impl Credentials {
    /// Create client API credentials
    #[must_use]
    pub fn new(token: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            email: email.into(),
            host_key: None,
            user_key: None,
        }
    }

    /// Add host API credentials
    #[must_use]
    pub fn with_host_keys(mut self, host_key: impl Into<String>, user_key: impl Into<String>) -> Self {
        let host_key: String = host_key.into();
        let user_key: String = user_key.into();
        self.host_key = Some(host_key).filter(|k| !k.is_empty());
        self.user_key = Some(user_key).filter(|k| !k.is_empty());
        self
    }

    /// Read credentials from `CLOUDFLARE_TOKEN`, `CLOUDFLARE_EMAIL` and,
    /// optionally, `CLOUDFLARE_HOST_KEY` / `CLOUDFLARE_USER_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials from a TOML file with `token`, `email`, and optional
    /// `host_key` / `user_key` keys.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CloudflareError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Parse credentials from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let creds: Self =
            toml::from_str(content).map_err(|e| CloudflareError::Config(e.to_string()))?;
        creds.validated()
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| CloudflareError::Config(format!("{name} is not set")))
        };

        let mut creds = Self::new(required(ENV_TOKEN)?, required(ENV_EMAIL)?);
        creds.host_key = lookup(ENV_HOST_KEY).filter(|v| !v.is_empty());
        creds.user_key = lookup(ENV_USER_KEY).filter(|v| !v.is_empty());
        Ok(creds)
    }

    fn validated(mut self) -> Result<Self> {
        if self.token.is_empty() {
            return Err(CloudflareError::Config("token must not be empty".into()));
        }
        if self.email.is_empty() {
            return Err(CloudflareError::Config("email must not be empty".into()));
        }
        self.host_key = self.host_key.filter(|k| !k.is_empty());
        self.user_key = self.user_key.filter(|k| !k.is_empty());
        Ok(self)
    }

    /// Client API token
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Account email
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Hosting partner key, if configured
    #[must_use]
    pub fn host_key(&self) -> Option<&str> {
        self.host_key.as_deref()
    }

    /// Hosted user's key, if configured
    #[must_use]
    pub fn user_key(&self) -> Option<&str> {
        self.user_key.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const REDACTED: &str = "<redacted>";
        f.debug_struct("Credentials")
            .field("token", &REDACTED)
            .field("email", &self.email)
            .field("host_key", &self.host_key.as_ref().map(|_| REDACTED))
            .field("user_key", &self.user_key.as_ref().map(|_| REDACTED))
            .finish()
    }
}
