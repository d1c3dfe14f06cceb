//! Server configuration
//!
//! Layered sources, lowest precedence first: built-in defaults, optional
//! `config/default.toml` and `config/local.toml` files, then `APP__*`
//! environment variables (`APP__SERVER__PORT=8080`,
//! `APP__DATABASE__URL=...`).

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use anyhow::Context;
use config::{Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub media: MediaConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Page size applied when the request does not carry `size`.
    pub default_page_size: u32,
    /// Upper bound on `size`; bounds the per-response media scans.
    pub max_page_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaConfig {
    /// Root directory holding one subdirectory per listing id.
    pub root_dir: PathBuf,
    /// Public URL prefix media links are built from, e.g. `/propriedades`.
    pub base_url: String,
    /// Serve `root_dir` under `base_url` from this process. Disable when a
    /// CDN or reverse proxy fronts the media files.
    pub serve_local: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Explicit allowed origins. Empty means no permissive CORS headers.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: String,
    pub file_prefix: String,
    /// One of `daily`, `hourly`, `minutely`, `never`.
    pub file_rotation: String,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.default_page_size", 21)?
            .set_default("server.max_page_size", 100)?
            .set_default("database.url", "postgres://localhost/imobiliaria")?
            .set_default("database.max_connections", 5)?
            .set_default("database.acquire_timeout_seconds", 5)?
            .set_default("media.root_dir", "data/propriedades")?
            .set_default("media.base_url", "/propriedades")?
            .set_default("media.serve_local", true)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .set_default("logging.file_enabled", false)?
            .set_default("logging.file_directory", "logs")?
            .set_default("logging.file_prefix", "imovel-server")?
            .set_default("logging.file_rotation", "daily")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            );

        builder
            .build()
            .context("Failed to assemble configuration sources")?
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Reject configurations that cannot serve a single request.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.database.url.trim().is_empty() {
            return Err("database.url must not be empty".to_string());
        }
        if self.server.default_page_size == 0 {
            return Err("server.default_page_size must be at least 1".to_string());
        }
        if self.server.max_page_size < self.server.default_page_size {
            return Err("server.max_page_size must be >= server.default_page_size".to_string());
        }
        if self.media.base_url.trim().is_empty() {
            return Err("media.base_url must not be empty".to_string());
        }
        if self.media.serve_local && !self.media.base_url.starts_with('/') {
            return Err(
                "media.base_url must be an absolute path when media.serve_local is set"
                    .to_string(),
            );
        }
        if !matches!(
            self.logging.file_rotation.as_str(),
            "daily" | "hourly" | "minutely" | "never"
        ) {
            return Err(format!(
                "logging.file_rotation must be one of daily/hourly/minutely/never, got {}",
                self.logging.file_rotation
            ));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let candidate = format!("{}:{}", self.server.host, self.server.port);
        candidate
            .to_socket_addrs()
            .with_context(|| format!("Cannot resolve listen address {candidate}"))?
            .next()
            .with_context(|| format!("No socket address for {candidate}"))
    }
}
