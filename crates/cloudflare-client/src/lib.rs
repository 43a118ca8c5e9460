//! HTTP client for the CloudFlare client and host APIs.
//!
//! This crate provides [`CloudflareClient`], the envelope protocol adapter
//! every operation goes through, and the pluggable [`Transport`] seam.

#![doc(html_root_url = "https://docs.rs/cloudflare-client/0.1.0")]

mod client;
mod config;
mod protocol;
mod transport;
pub mod api;

pub use client::{CloudflareClient, CloudflareClientBuilder, DEFAULT_CLIENT_URL, DEFAULT_HOST_URL};
pub use cloudflare_core::{CloudflareError, Result};
pub use config::{Credentials, ENV_EMAIL, ENV_HOST_KEY, ENV_TOKEN, ENV_USER_KEY};
pub use protocol::{Endpoint, FormParams, Operation};
pub use transport::{FormRequest, HttpTransport, Transport, CONTENT_TYPE_FORM};
