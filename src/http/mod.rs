//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → page routes / admin console / static mount
//!     → response to client
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
