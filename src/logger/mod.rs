//! Logger module
//!
//! Console logging for the asset server:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging
//!
//! Diagnostics go to stderr, everything else to stdout.

mod format;

pub use format::AccessLogEntry;

use crate::config::AppState;
use std::net::SocketAddr;

fn write_info(message: &str) {
    println!("{message}");
}

fn write_error(message: &str) {
    eprintln!("{message}");
}

/// Log the fixed startup banner once the listener is bound
pub fn log_server_start(addr: &SocketAddr, state: &AppState) {
    write_info("======================================");
    write_info("Prompt generator host running successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!(
        "Serving assets from: {}",
        state.asset_root.display()
    ));
    write_info("Logs: check console output for errors");
    write_info("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_api_error(message: &str) {
    write_error(&format!("[API ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_api_request(method: &str, path: &str, status: u16) {
    write_info(&format!("[API] {method} {path} - {status}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}
