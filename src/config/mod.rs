// Configuration module entry point
// Holds the fixed process configuration and shared application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, ServerConfig};

impl Config {
    /// Fixed process configuration
    ///
    /// The server takes no CLI flags, environment variables, or
    /// configuration files; every value is decided here at startup.
    pub fn load() -> Self {
        Self::default()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_bind_the_fixed_port() {
        let cfg = Config::load();
        assert_eq!(cfg.server.port, 31916);
        assert_eq!(cfg.server.index_file, "index.html");
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 31916);
    }
}
