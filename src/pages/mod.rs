//! The site's pages: a fixed route table and one parameterized handler.
//!
//! # Data Flow
//! ```text
//! Route table (static literal, frozen at startup):
//!     PAGES[]
//!     → router() registers each path for GET and POST
//!     → framework matches the request path
//!     → handler renders the entry's template with an empty context
//! ```
//!
//! # Design Decisions
//! - One handler parameterized by template name; the three pages share it
//! - GET and POST are handled identically; POST carries no semantics here
//! - Declaration order is part of the table's contract; paths do not overlap

pub mod templates;

use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::{MethodRouter, get};

use crate::http::server::AppState;
use self::templates::RenderError;

/// A single entry in the route table: a URL path bound to the template it
/// renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub path: &'static str,
    pub template: &'static str,
}

/// The route table. Declared once, immutable for the process lifetime.
pub const PAGES: [Page; 3] = [
    Page { path: "/", template: "home.html" },
    Page { path: "/projects/", template: "projects.html" },
    Page { path: "/resume/", template: "resume.html" },
];

/// Build the page routes from the table.
pub fn router() -> Router<AppState> {
    let mut router = Router::new();
    for page in PAGES {
        router = router.route(page.path, page_route(page.template));
    }
    router
}

/// The page handler, bound to one template. Both methods accept the
/// request as-is; headers and body are never inspected.
fn page_route(template: &'static str) -> MethodRouter<AppState> {
    let handler = move |State(state): State<AppState>| async move {
        render_page(&state, template)
    };
    get(handler).post(handler)
}

/// Render `template` with an empty context. The `Html` wrapper supplies
/// the engine's default success status and content type.
fn render_page(state: &AppState, template: &'static str) -> Result<Html<String>, RenderError> {
    state.templates.render(template).map(Html)
}
