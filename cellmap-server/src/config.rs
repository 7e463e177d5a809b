//! Server configuration via CLI flags and environment variables.

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact human-readable lines.
    Human,
    /// One JSON object per line.
    Json,
}

/// Runtime configuration for the cellmap server.
#[derive(Parser, Debug, Clone)]
#[command(name = "cellmap-server", version, about = "Spherical set algebra and cell coverings over GeoJSON")]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "CELLMAP_LISTEN_ADDR", default_value = "127.0.0.1:8080")]
    pub listen_addr: SocketAddr,

    /// Enable permissive CORS headers.
    #[arg(long, env = "CELLMAP_CORS_ENABLED", default_value = "true")]
    pub cors_enabled: bool,

    /// Maximum total ring vertices accepted in one request. Geometry work
    /// is synchronous per request, so this is the CPU bound.
    #[arg(long, env = "CELLMAP_MAX_VERTICES", default_value_t = 50_000)]
    pub max_vertices: usize,

    /// Maximum request body size in bytes.
    #[arg(long, env = "CELLMAP_MAX_BODY_BYTES", default_value_t = 4 * 1024 * 1024)]
    pub max_body_bytes: usize,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, env = "CELLMAP_LOG", default_value = "info")]
    pub log_filter: String,

    /// Log output format.
    #[arg(long, env = "CELLMAP_LOG_FORMAT", value_enum, default_value = "human")]
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        // Same defaults as the CLI surface.
        Self::parse_from(["cellmap-server"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr.port(), 8080);
        assert!(config.cors_enabled);
        assert_eq!(config.max_vertices, 50_000);
        assert_eq!(config.log_format, LogFormat::Human);
    }

    #[test]
    fn test_flag_overrides() {
        let config = ServerConfig::parse_from([
            "cellmap-server",
            "--listen-addr",
            "0.0.0.0:9090",
            "--max-vertices",
            "100",
            "--log-format",
            "json",
        ]);
        assert_eq!(config.listen_addr.port(), 9090);
        assert_eq!(config.max_vertices, 100);
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
