//! Print the settings and DNS records of a zone.
//!
//! Run with: cargo run --example zone_settings -- example.com
//!
//! Set CLOUDFLARE_TOKEN and CLOUDFLARE_EMAIL before running.

use cloudflare::{CloudflareClient, Result};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .compact()
        .init();

    let zone = std::env::args().nth(1).unwrap_or_else(|| "example.com".to_string());
    let client = CloudflareClient::from_env()?;
    let api = client.client_api();

    println!("=== Settings: {zone} ===");
    for setting in api.zone_settings(&zone).await? {
        println!(
            "Security: {}, Cache level: {}, Dev mode: {}",
            setting.user_security_setting,
            setting.cache_level,
            setting.dev_mode_enabled()
        );
    }
    println!();

    println!("=== Records ===");
    let records = api.rec_load_all(&zone).await?;
    for rec in &records {
        println!(
            "{:<6} {:<40} {} {}",
            rec.record_type,
            rec.name,
            rec.content,
            if rec.is_proxied() { "(proxied)" } else { "" }
        );
    }
    info!(count = records.len(), "records listed");

    Ok(())
}
