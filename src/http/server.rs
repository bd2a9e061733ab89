//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router from the page table
//! - Mount the admin console and the static-asset directory
//! - Wire up middleware (tracing, timeout, security headers)
//! - Serve the router with graceful shutdown

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, header};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::admin;
use crate::config::SiteConfig;
use crate::pages;
use crate::pages::templates::{RenderError, TemplateEngine};

/// Application state injected into handlers. Everything in it is immutable
/// after startup.
#[derive(Clone)]
pub struct AppState {
    pub templates: Arc<TemplateEngine>,
    pub config: Arc<SiteConfig>,
}

/// HTTP server for the site.
pub struct HttpServer {
    router: Router,
    config: SiteConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Loads and verifies the page templates; a missing or malformed page
    /// template is a startup error.
    pub fn new(config: SiteConfig) -> Result<Self, RenderError> {
        let required: Vec<&str> = pages::PAGES.iter().map(|page| page.template).collect();
        let templates = TemplateEngine::new(Path::new(&config.content.templates_dir), &required)?;

        let state = AppState {
            templates: Arc::new(templates),
            config: Arc::new(config.clone()),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all routes and middleware layers.
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        let mut router = pages::router()
            .nest_service("/static", ServeDir::new(&config.content.static_dir));

        if config.admin.enabled {
            router = router.nest("/admin", admin::router(&state));
        }

        let mut router = router
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http());

        if config.security.enable_headers {
            router = router
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                ));
        }

        router
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            admin_enabled = self.config.admin.enabled,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
