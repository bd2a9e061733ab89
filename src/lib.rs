//! Personal portfolio site server.
//!
//! Three server-rendered pages (home, projects, resume), a mounted admin
//! console, and a static-asset mount. Everything else is the framework's.

pub mod admin;
pub mod config;
pub mod http;
pub mod pages;

pub use config::SiteConfig;
pub use http::HttpServer;
