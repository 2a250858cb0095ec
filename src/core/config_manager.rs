// src/core/config_manager.rs
//! Client configuration: API location plus the fixed UI delays

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const REPLY_DELAY_MS: u64 = 1000;
const QUICK_ACTION_DELAY_MS: u64 = 100;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub service: ServiceConfig,
    pub timings: ChatTimings,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_url: String,
    /// `None` leaves the transport default in place
    pub timeout: Option<Duration>,
}

/// Fixed delays used by the chat widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatTimings {
    /// Simulated think time before the "upload first" reply of an unbound session
    pub reply_delay: Duration,
    /// Pause between filling the input from a quick action and sending it
    pub quick_action_delay: Duration,
}

impl Default for ChatTimings {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(REPLY_DELAY_MS),
            quick_action_delay: Duration::from_millis(QUICK_ACTION_DELAY_MS),
        }
    }
}

impl ConfigManager {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        let service = Self::load_service()?;
        info!("Using salary API at {}", service.api_url);

        Ok(Self {
            service,
            timings: ChatTimings::default(),
        })
    }

    fn load_service() -> Result<ServiceConfig> {
        let api_url = std::env::var("SALARY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout = match std::env::var("SALARY_API_TIMEOUT_SECS") {
            Ok(raw) => Some(Duration::from_secs(raw.trim().parse::<u64>().with_context(
                || format!("SALARY_API_TIMEOUT_SECS must be a whole number of seconds, got {:?}", raw),
            )?)),
            Err(_) => None,
        };

        Ok(ServiceConfig {
            api_url: normalize_base_url(&api_url),
            timeout,
        })
    }

    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.service.api_url = normalize_base_url(api_url);
        self
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                api_url: DEFAULT_API_URL.to_string(),
                timeout: None,
            },
            timings: ChatTimings::default(),
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_loopback() {
        let config = ConfigManager::default();
        assert_eq!(config.service.api_url, "http://localhost:8000");
        assert_eq!(config.timings.reply_delay, Duration::from_millis(1000));
        assert_eq!(config.timings.quick_action_delay, Duration::from_millis(100));
    }

    #[test]
    fn test_with_api_url_strips_trailing_slash() {
        let config = ConfigManager::default().with_api_url("https://salary.example.com/ ");
        assert_eq!(config.service.api_url, "https://salary.example.com");
    }
}
