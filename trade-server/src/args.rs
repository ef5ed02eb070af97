//! Command-line arguments of the trade server.
//!
//! Every flag is optional and, when given, wins over the configuration
//! file and the environment.

use crate::config::ServerConfig;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "config/trade-server.toml";

#[derive(Parser, Debug, Clone)]
#[command(name = "trade-server")]
#[command(author, version, about = "In-memory trade record service", long_about = None)]
pub struct ServerArgs {
    /// Path to the TOML configuration file (optional on disk)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Default log filter (RUST_LOG still takes precedence)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl ServerArgs {
    /// Overlays the flags that were given onto a loaded configuration.
    pub fn apply(&self, config: &mut ServerConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = ServerArgs::parse_from(["trade-server"]);
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(args.port.is_none());

        let mut config = ServerConfig::default();
        args.apply(&mut config);
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let args = ServerArgs::parse_from([
            "trade-server",
            "--host",
            "127.0.0.1",
            "-p",
            "9100",
            "--log-level",
            "debug",
        ]);
        let mut config = ServerConfig::default();
        args.apply(&mut config);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9100);
        assert_eq!(config.log_level, "debug");
    }
}
