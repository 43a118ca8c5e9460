use thiserror::Error;

/// Result type alias for CloudFlare operations
pub type Result<T> = std::result::Result<T, CloudflareError>;

/// Errors that can occur when calling the CloudFlare API
#[derive(Error, Debug)]
pub enum CloudflareError {
    /// The request never produced a usable HTTP response
    /// (connection refused, timeout, TLS failure, unreadable body).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not a decodable envelope or payload
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope reported failure
    #[error("{method} {url}: {message}")]
    Api {
        /// HTTP method of the failed request
        method: String,
        /// Endpoint the request was sent to
        url: String,
        /// Machine error code from the envelope, if any
        code: Option<String>,
        /// Human-readable message from the envelope
        message: String,
    },

    /// Missing or malformed credentials/configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl CloudflareError {
    /// Returns true if the failure happened below the envelope layer
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Decode(_))
    }

    /// Returns true if the server answered with a failure envelope
    #[must_use]
    pub const fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Returns the envelope's message text if this is an API error
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Returns the envelope's error code if this is an API error that carried one
    #[must_use]
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = CloudflareError::Api {
            method: "POST".into(),
            url: "https://www.cloudflare.com/api_json.html".into(),
            code: Some("E_UNAUTH".into()),
            message: "invalid zone".into(),
        };
        assert_eq!(
            err.to_string(),
            "POST https://www.cloudflare.com/api_json.html: invalid zone"
        );
        assert!(err.is_api());
        assert!(!err.is_transport());
        assert_eq!(err.api_message(), Some("invalid zone"));
        assert_eq!(err.api_code(), Some("E_UNAUTH"));
    }

    #[test]
    fn test_classification() {
        let err = CloudflareError::Transport("connection refused".into());
        assert!(err.is_transport());
        assert!(err.api_message().is_none());

        let err: CloudflareError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.is_transport());

        assert!(!CloudflareError::Config("missing token".into()).is_transport());
    }
}
