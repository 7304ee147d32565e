use std::env;
use anyhow::{Context, Result};

pub const DEFAULT_APP_NAME: &str = "Simple CI/CD Test App";
pub const DEFAULT_APP_VERSION: &str = "1.1.0-DEPLOY-TEST";

#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub app_version: String,
    pub build_number: String,
    pub build_timestamp: String,
    pub environment: String,
    pub server_name: String,
    pub static_dir: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        apply_dotenv(dotenvy::dotenv())?;

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let service_port = var_or("SERVICE_PORT", "8000")
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        Ok(Config {
            app_name: var_or("APP_NAME", DEFAULT_APP_NAME),
            app_version: var_or("APP_VERSION", DEFAULT_APP_VERSION),
            build_number: var_or("BUILD_NUMBER", "local"),
            build_timestamp: var_or("BUILD_TIMESTAMP", "unknown"),
            environment: var_or("APP_ENV", "development"),
            server_name: var_or("SERVER_NAME", "webapp-server"),
            static_dir: var_or("STATIC_DIR", "static"),
            service_port,
            service_host: var_or("SERVICE_HOST", "0.0.0.0"),
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Application: {} v{}", self.app_name, self.app_version);
        tracing::info!("  Build: #{} ({})", self.build_number, self.build_timestamp);
        tracing::info!("  Environment: {}", self.environment);
        tracing::info!("  Server name: {}", self.server_name);
        tracing::info!("  Static assets: {}", self.static_dir);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

/// A missing .env is fine; a malformed one is a startup error.
fn apply_dotenv<T>(result: dotenvy::Result<T>) -> Result<()> {
    match result {
        Ok(_) => {
            tracing::debug!("Loaded environment overrides from .env");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("Failed to parse .env"),
    }
}
