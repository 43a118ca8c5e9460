//! API endpoint modules.

mod client_api;
mod host_api;

pub use client_api::{ops, ClientApi};
pub use host_api::HostApi;
