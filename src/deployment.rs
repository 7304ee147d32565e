use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::Config;

/// Snapshot of what was deployed and when, fixed at startup
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentInfo {
    pub app_name: String,
    pub version: String,
    pub build_number: String,
    pub build_timestamp: String,
    pub environment: String,
    pub server: String,
    pub deployed_at: DateTime<Utc>,
}

impl DeploymentInfo {
    pub fn new(config: &Config, deployed_at: DateTime<Utc>) -> Self {
        Self {
            app_name: config.app_name.clone(),
            version: config.app_version.clone(),
            build_number: config.build_number.clone(),
            build_timestamp: config.build_timestamp.clone(),
            environment: config.environment.clone(),
            server: config.server_name.clone(),
            deployed_at,
        }
    }

    /// Captures the current time as the deployment timestamp.
    pub fn capture(config: &Config) -> Self {
        Self::new(config, Utc::now())
    }

    pub fn deployed_at_rfc3339(&self) -> String {
        self.deployed_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
