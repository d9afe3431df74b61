use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::preferences::SIDEBAR_COOKIE;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 30;
const DEFAULT_READ_TIMEOUT_MS: u32 = 250;

/// Config file picked up from the working directory when no path is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub preferences: PreferenceSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Directory served under `/static`.
    pub static_dir: String,
    pub request_timeout_secs: u64,
}

/// Where and how long to look for persisted client preferences.
#[derive(Debug, Deserialize, Clone)]
pub struct PreferenceSettings {
    pub sidebar_cookie: String,
    pub read_timeout_ms: u64,
}

impl PreferenceSettings {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: DEFAULT_PORT,
                host: DEFAULT_HOST.to_string(),
                static_dir: DEFAULT_STATIC_DIR.to_string(),
                request_timeout_secs: u64::from(DEFAULT_REQUEST_TIMEOUT_SECS),
            },
            preferences: PreferenceSettings {
                sidebar_cookie: SIDEBAR_COOKIE.to_string(),
                read_timeout_ms: u64::from(DEFAULT_READ_TIMEOUT_MS),
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Priority: CLI flag (or its env var) > `OPENGOV_*` env > config file > defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.static_dir", DEFAULT_STATIC_DIR)?
            .set_default(
                "server.request_timeout_secs",
                i64::from(DEFAULT_REQUEST_TIMEOUT_SECS),
            )?
            .set_default("preferences.sidebar_cookie", SIDEBAR_COOKIE)?
            .set_default("preferences.read_timeout_ms", i64::from(DEFAULT_READ_TIMEOUT_MS))?;

        // An explicit path must exist; the working-directory fallback is optional.
        match &cli.config {
            Some(path) => builder = builder.add_source(File::with_name(path).required(true)),
            None if Path::new(CWD_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::with_name(CWD_CONFIG_FILE).required(false));
            }
            None => {}
        }

        // E.g. OPENGOV_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("OPENGOV")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = AppConfig::default();
        assert_eq!(config.server.address(), "0.0.0.0:3000");
        assert_eq!(config.server.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.preferences.sidebar_cookie, "sidebar:state");
        assert_eq!(config.preferences.read_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn unknown_flag_is_a_config_error() {
        let err = AppConfig::load_from_args(["opengov-portal", "--no-such-flag"]).unwrap_err();
        assert!(matches!(err, config::ConfigError::Message(_)));
    }
}
