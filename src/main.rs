//! Personal portfolio site server.
//!
//! ```text
//!                    ┌──────────────────────────────────────────┐
//!                    │                SITE SERVER                │
//!                    │                                           │
//!   Client Request   │  ┌─────────┐    ┌─────────────────────┐  │
//!   ─────────────────┼─▶│  axum   │───▶│     page table      │  │
//!                    │  │ router  │    │  (/, /projects/,    │  │
//!                    │  └────┬────┘    │   /resume/)         │  │
//!                    │       │         └──────────┬──────────┘  │
//!                    │       │                    ▼             │
//!                    │       │         ┌─────────────────────┐  │
//!                    │       ├────────▶│  template engine    │  │
//!                    │       │         │  (empty context)    │  │
//!                    │       │         └─────────────────────┘  │
//!                    │       ├────────▶ admin console (/admin)  │
//!                    │       └────────▶ static assets (/static) │
//!                    └──────────────────────────────────────────┘
//! ```
//!
//! Unmatched paths fall through to the framework's 404.

use std::path::Path;

use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use folio::config;
use folio::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path =
        std::env::var("FOLIO_CONFIG").unwrap_or_else(|_| "folio.toml".to_string());
    let config = config::load_or_default(Path::new(&config_path))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                format!("folio={},tower_http=info", config.observability.log_level)
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        bind_address = %config.server.bind_address,
        templates_dir = %config.content.templates_dir,
        static_dir = %config.content.static_dir,
        admin_enabled = config.admin.enabled,
        "Configuration loaded"
    );

    if config.admin.enabled && config.admin.has_placeholder_key() {
        tracing::warn!("admin console is using the placeholder API key; set [admin] api_key");
    }

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
