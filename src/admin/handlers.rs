use axum::Json;
use axum::response::Html;
use serde::Serialize;

use crate::pages;

#[derive(Serialize)]
pub struct SiteStatus {
    pub version: &'static str,
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct PageEntry {
    pub path: &'static str,
    pub template: &'static str,
}

/// Landing page of the console.
pub async fn console() -> Html<&'static str> {
    Html(include_str!("console.html"))
}

pub async fn status() -> Json<SiteStatus> {
    Json(SiteStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

/// The route table as the server sees it.
pub async fn page_table() -> Json<Vec<PageEntry>> {
    let entries = pages::PAGES
        .iter()
        .map(|page| PageEntry {
            path: page.path,
            template: page.template,
        })
        .collect();
    Json(entries)
}
