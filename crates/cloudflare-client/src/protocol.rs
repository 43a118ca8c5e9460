//! Envelope protocol shared by every operation.
//!
//! An operation is a tag sent as a form field plus a handful of parameters.
//! The reply is always an [`Envelope`]; its payload is located by a
//! per-operation path and decoded into the caller's type.

use cloudflare_core::{CloudflareError, Envelope, Result};
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::warn;

use crate::transport::FormRequest;

/// Capability group an operation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// General client operations, authenticated with token/email
    Client,
    /// Host provisioning operations, authenticated with the host key
    Host,
}

impl Endpoint {
    /// Name of the form field carrying the operation tag
    #[must_use]
    pub const fn operation_field(self) -> &'static str {
        match self {
            Self::Client => "a",
            Self::Host => "act",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client => write!(f, "client"),
            Self::Host => write!(f, "host"),
        }
    }
}

/// Declarative description of a remote procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Tag sent in the endpoint's operation field
    pub name: &'static str,
    /// Endpoint the operation is served from
    pub endpoint: Endpoint,
    /// Keys to follow from `response` down to the payload
    pub payload_path: &'static [&'static str],
}

impl Operation {
    /// Describe a client API operation
    #[must_use]
    pub const fn client(name: &'static str, payload_path: &'static [&'static str]) -> Self {
        Self {
            name,
            endpoint: Endpoint::Client,
            payload_path,
        }
    }

    /// Describe a host API operation
    #[must_use]
    pub const fn host(name: &'static str, payload_path: &'static [&'static str]) -> Self {
        Self {
            name,
            endpoint: Endpoint::Host,
            payload_path,
        }
    }
}

/// Ordered form fields for one request.
///
/// Each name appears at most once; setting a name again replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    fields: Vec<(String, String)>,
}

impl FormParams {
    /// Create an empty parameter set
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Set a field, builder style
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Set a field
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter().position(|(k, _)| *k == name) {
            Some(slot) => self.fields[slot].1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Set a field only when a non-empty value is supplied
    pub fn push_opt<S: AsRef<str>>(&mut self, name: impl Into<String>, value: Option<S>) {
        if let Some(value) = value.filter(|v| !v.as_ref().is_empty()) {
            self.push(name, value.as_ref());
        }
    }

    /// Set a list-valued field as a single comma-joined value
    pub fn push_list<I, S>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = values
            .into_iter()
            .map(|v| v.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(",");
        self.push(name, joined);
    }

    /// Set a numeric field as decimal text
    pub fn push_int(&mut self, name: impl Into<String>, value: impl Into<i64>) {
        self.push(name, value.into().to_string());
    }

    /// Remove a field, returning its value
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let slot = self.fields.iter().position(|(k, _)| k == name)?;
        Some(self.fields.remove(slot).1)
    }

    /// Append all fields of `other`
    pub fn extend(&mut self, other: Self) {
        for (name, value) in other.fields {
            self.push(name, value);
        }
    }

    /// Value of a field
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the field is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over name/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as an `application/x-www-form-urlencoded` body
    #[must_use]
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.push(k, v);
        }
        params
    }
}

/// Assemble the full request for `operation`.
///
/// The operation tag comes first, then the operation's parameters, then the
/// credential fields. The tag and credentials always win: caller parameters
/// reusing one of their names are dropped.
pub(crate) fn build_request(
    operation: &Operation,
    url: &str,
    user_agent: &str,
    mut params: FormParams,
    credentials: FormParams,
) -> FormRequest {
    let tag_field = operation.endpoint.operation_field();
    let reserved = std::iter::once(tag_field).chain(credentials.iter().map(|(k, _)| k));
    for name in reserved {
        if params.remove(name).is_some() {
            warn!(operation = operation.name, field = name, "dropping reserved form field");
        }
    }

    let mut form = FormParams::new().with(tag_field, operation.name);
    form.extend(params);
    form.extend(credentials);

    FormRequest {
        url: url.to_owned(),
        user_agent: user_agent.to_owned(),
        body: form.encode(),
    }
}

/// Interpret a response body as an envelope and extract the payload.
///
/// Failure envelopes become [`CloudflareError::Api`] without looking at the
/// payload. An absent or null payload on success yields `T::default()`; a
/// payload that cannot be walked down the operation's path, or does not
/// decode as `T`, is a [`CloudflareError::Decode`].
pub(crate) fn resolve<T>(operation: &Operation, url: &str, body: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let envelope: Envelope = serde_json::from_str(body)?;

    if envelope.is_failure() {
        warn!(
            operation = operation.name,
            code = envelope.error_code().unwrap_or_default(),
            message = %envelope.message,
            "API returned failure envelope"
        );
        let code = envelope.error_code().map(str::to_owned);
        return Err(CloudflareError::Api {
            method: FormRequest::METHOD.to_owned(),
            url: url.to_owned(),
            code,
            message: envelope.message,
        });
    }

    match envelope.payload_at(operation.payload_path)? {
        Some(payload) => Ok(T::deserialize(payload)?),
        None => Ok(T::default()),
    }
}
