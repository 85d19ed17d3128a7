//! HTTP server for folio portfolio sites.
//!
//! Renders pages on request from content loaded once at startup and serves
//! the static directory byte-for-byte.

pub mod server;

pub use server::{
    router, serve_static, site_root, AppState, PortfolioServer, ServerConfig, ServerError,
};
