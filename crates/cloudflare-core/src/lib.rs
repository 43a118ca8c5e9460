//! Core types for the CloudFlare client API.
//!
//! This crate provides the foundational types used across the library:
//!
//! - **Types**: The generic response [`Envelope`] and strongly-typed payloads
//!   for every modelled operation
//! - **Errors**: Transport and API failures via [`CloudflareError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use cloudflare_core::{Record, Result};
//!
//! fn print_records(records: &[Record]) -> Result<()> {
//!     for rec in records {
//!         println!("{} {} {}", rec.name, rec.record_type, rec.content);
//!     }
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/cloudflare-core/0.1.0")]

mod error;
pub mod types;

pub use error::{CloudflareError, Result};
pub use types::*;
