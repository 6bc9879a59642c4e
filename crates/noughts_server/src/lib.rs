//! Single-route HTTP responder.
//!
//! `GET /` answers `200` with a fixed plain-text body; nothing else is
//! routed and nothing is stored.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod routes;
mod serve;

pub use config::ServerConfig;
pub use routes::{INDEX_PATH, router};
pub use serve::{serve, serve_with_shutdown};
