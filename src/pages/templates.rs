//! Thin wrapper over the templating engine.
//!
//! # Responsibilities
//! - Resolve template names against the configured directory
//! - Render a named template with an empty context
//! - Fail startup when a page template, or a parent it extends, is missing
//!   or malformed
//!
//! # Design Decisions
//! - Rendering failures are not recovered: they surface as the server's
//!   default error response, logged once
//! - Templates are compiled on first use and cached by the engine

use std::path::Path;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use minijinja::{Environment, context, path_loader};
use thiserror::Error;

/// Failure while loading or rendering a template.
#[derive(Debug, Error)]
#[error("template '{name}': {source}")]
pub struct RenderError {
    name: String,
    #[source]
    source: minijinja::Error,
}

impl RenderError {
    /// Name of the template that failed.
    pub fn template(&self) -> &str {
        &self.name
    }
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        tracing::error!(template = %self.name, error = %self.source, "template rendering failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

/// The template engine: a minijinja environment resolving names from a
/// fixed directory. Immutable after construction and shared across
/// handler invocations.
#[derive(Debug)]
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine over `dir` and eagerly render every template in
    /// `required` with an empty context, so a missing or malformed page
    /// template stops startup instead of surfacing on first request.
    /// Rendering (rather than loading) pulls parent templates through the
    /// loader, so a broken shared base is caught here too.
    pub fn new(dir: &Path, required: &[&str]) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir.to_path_buf()));

        let engine = Self { env };
        for name in required {
            engine.render(name)?;
        }
        Ok(engine)
    }

    /// Render `name` with an empty context.
    pub fn render(&self, name: &str) -> Result<String, RenderError> {
        let template = self.env.get_template(name).map_err(|source| RenderError {
            name: name.to_string(),
            source,
        })?;
        template.render(context! {}).map_err(|source| RenderError {
            name: name.to_string(),
            source,
        })
    }
}
