//! API configuration loaded from the `[api]` table of the settings file.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, RepositoryIdentifier};

/// GitHub REST API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// API root. When unset, `https://api.<host>` of the repository URL is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<Url>,
    /// Request timeout in seconds, applied to every call.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: None, timeout_secs: default_timeout() }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("api.timeout_secs must be greater than 0"));
        }
        if let Some(url) = &self.base_url {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(AppError::config_error(format!(
                    "api.base_url must use http or https, got '{}'",
                    url
                )));
            }
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API root for `repository`, without a trailing slash.
    pub fn api_root(&self, repository: &RepositoryIdentifier) -> String {
        match &self.base_url {
            Some(url) => url.as_str().trim_end_matches('/').to_string(),
            None => format!("https://api.{}", repository.host()),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
