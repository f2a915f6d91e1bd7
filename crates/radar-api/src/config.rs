//! Server configuration
//!
//! Flags fall back to `RADAR_*` environment variables, which may come from
//! a `.env` file loaded at startup.

use std::net::SocketAddr;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use radar_core::logging_facility::Profile;

#[derive(Debug, Clone, Parser)]
#[command(name = "radar-api")]
#[command(about = "Radar target-selection service", long_about = None)]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "RADAR_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "RADAR_PORT", default_value_t = 8888)]
    pub port: u16,

    /// Log output format
    #[arg(long, env = "RADAR_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    pub fn profile(&self) -> Profile {
        match self {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

impl ServerConfig {
    /// Resolve `host:port` into a bind address
    ///
    /// # Errors
    ///
    /// Fails when `host` is not an IP literal.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}
