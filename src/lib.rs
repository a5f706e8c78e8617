//! Asset host and prompt assembly service for the prompt generator UI.
//!
//! The binary in `main.rs` wires these modules into a single-port HTTP
//! server: static assets for the browser application, a small JSON API for
//! server-side prompt assembly, and console logging.

pub mod api;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod prompt;
