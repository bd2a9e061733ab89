pub mod auth;
pub mod handlers;

use axum::Router;
use axum::middleware;
use axum::routing::get;

use crate::http::server::AppState;
use self::auth::require_bearer;
use self::handlers::{console, page_table, status};

/// Build the admin console router. Self-contained: the host application
/// mounts this under its fixed prefix and supplies nothing else.
///
/// The HTML index is reachable without credentials; the JSON endpoints
/// require the configured bearer key.
pub fn router(state: &AppState) -> Router<AppState> {
    let api = Router::new()
        .route("/status", get(status))
        .route("/pages", get(page_table))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    Router::new().route("/", get(console)).merge(api)
}
