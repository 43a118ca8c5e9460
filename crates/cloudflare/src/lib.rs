//! Rust client for the CloudFlare client and host APIs.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cloudflare::{CloudflareClient, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> cloudflare::Result<()> {
//!     let client = CloudflareClient::new(Credentials::new("your-token", "you@example.com"))?;
//!
//!     // Settings of one zone
//!     for setting in client.client_api().zone_settings("example.com").await? {
//!         println!("security: {}, cache: {}", setting.security_level, setting.cache_level);
//!     }
//!
//!     // DNS records
//!     for rec in client.client_api().rec_load_all("example.com").await? {
//!         println!("{} {} {}", rec.name, rec.record_type, rec.content);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/cloudflare/0.1.0")]

// Re-export core types
pub use cloudflare_core::*;

// Re-export client
pub use cloudflare_client::{
    api, CloudflareClient, CloudflareClientBuilder, Credentials, Endpoint, FormParams,
    FormRequest, HttpTransport, Operation, Transport,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
