//! Configuration for the finance news bot

use crate::error::{NewsError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// CoinDesk article feed
pub const COINDESK_NEWS_URL: &str = "https://api.coindesk.com/v1/news/articles.json";

/// Financial Modeling Prep stock news, public demo key
pub const FMP_STOCK_NEWS_URL: &str =
    "https://financialmodelingprep.com/api/v3/stock_news?page=0&apikey=demo";

/// Static configuration, fixed for the lifetime of the process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    /// Discord bot token (only required when connecting to Discord)
    #[serde(skip_serializing)]
    pub discord_token: Option<String>,

    /// Prefix for text commands
    pub command_prefix: String,

    /// Time between automatic updates
    pub update_interval: Duration,

    /// Maximum items returned by one source fetch
    pub max_items_per_update: usize,

    /// Maximum cards posted by the combined command
    pub max_items_combined: usize,

    /// Maximum cards posted by one automatic update
    pub max_items_auto: usize,

    /// Request timeout duration
    pub request_timeout: Duration,

    /// Crypto news endpoint
    pub crypto_url: String,

    /// Stock news endpoint
    pub stock_url: String,

    /// Optional general finance endpoint; the curated digest is used when unset
    pub finance_url: Option<String>,

    /// Port of the liveness server
    pub keepalive_port: u16,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            discord_token: None,
            command_prefix: "!".to_string(),
            update_interval: Duration::from_secs(30 * 60), // 30 minutes
            max_items_per_update: 3,
            max_items_combined: 6,
            max_items_auto: 2,
            // Matches the five-minute total timeout most HTTP sessions default to
            request_timeout: Duration::from_secs(300),
            crypto_url: COINDESK_NEWS_URL.to_string(),
            stock_url: FMP_STOCK_NEWS_URL.to_string(),
            finance_url: None,
            keepalive_port: 8080,
        }
    }
}

impl NewsConfig {
    /// Create a new configuration builder
    pub fn builder() -> NewsConfigBuilder {
        NewsConfigBuilder::default()
    }

    /// Load configuration from `DISCORD_BOT_TOKEN`, `PORT` and `FINANCE_NEWS_URL`
    pub fn from_env() -> Result<Self> {
        Self::builder().with_env().build()
    }

    /// The Discord token, or a configuration error when it is missing
    pub fn require_token(&self) -> Result<&str> {
        self.discord_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| NewsError::ConfigError("DISCORD_BOT_TOKEN not set".to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.command_prefix.is_empty() {
            return Err(NewsError::ConfigError(
                "command_prefix must not be empty".to_string(),
            ));
        }

        if self.update_interval.is_zero() {
            return Err(NewsError::ConfigError(
                "update_interval must be greater than 0".to_string(),
            ));
        }

        if self.max_items_per_update == 0 {
            return Err(NewsError::ConfigError(
                "max_items_per_update must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for NewsConfig
#[derive(Debug, Default)]
pub struct NewsConfigBuilder {
    discord_token: Option<String>,
    command_prefix: Option<String>,
    update_interval: Option<Duration>,
    max_items_per_update: Option<usize>,
    max_items_combined: Option<usize>,
    max_items_auto: Option<usize>,
    request_timeout: Option<Duration>,
    crypto_url: Option<String>,
    stock_url: Option<String>,
    finance_url: Option<String>,
    keepalive_port: Option<u16>,
    env_error: Option<String>,
}

impl NewsConfigBuilder {
    /// Set the Discord bot token
    pub fn discord_token(mut self, token: impl Into<String>) -> Self {
        self.discord_token = Some(token.into());
        self
    }

    /// Set the command prefix
    pub fn command_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.command_prefix = Some(prefix.into());
        self
    }

    /// Set the automatic update interval
    pub fn update_interval(mut self, interval: Duration) -> Self {
        self.update_interval = Some(interval);
        self
    }

    /// Set the per-source item cap
    pub fn max_items_per_update(mut self, max: usize) -> Self {
        self.max_items_per_update = Some(max);
        self
    }

    /// Set the cap for the combined command
    pub fn max_items_combined(mut self, max: usize) -> Self {
        self.max_items_combined = Some(max);
        self
    }

    /// Set the cap for automatic updates
    pub fn max_items_auto(mut self, max: usize) -> Self {
        self.max_items_auto = Some(max);
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Override the crypto endpoint
    pub fn crypto_url(mut self, url: impl Into<String>) -> Self {
        self.crypto_url = Some(url.into());
        self
    }

    /// Override the stock endpoint
    pub fn stock_url(mut self, url: impl Into<String>) -> Self {
        self.stock_url = Some(url.into());
        self
    }

    /// Use a remote general finance endpoint
    pub fn finance_url(mut self, url: impl Into<String>) -> Self {
        self.finance_url = Some(url.into());
        self
    }

    /// Set the liveness server port
    pub fn keepalive_port(mut self, port: u16) -> Self {
        self.keepalive_port = Some(port);
        self
    }

    /// Load token, port and finance endpoint from the process environment
    pub fn with_env(self) -> Self {
        self.with_lookup(|key| std::env::var(key).ok())
    }

    /// Load token, port and finance endpoint from an arbitrary lookup
    pub fn with_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("DISCORD_BOT_TOKEN").filter(|t| !t.trim().is_empty()) {
            self.discord_token = Some(token);
        }

        if let Some(port) = lookup("PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => self.keepalive_port = Some(port),
                Err(_) => self.env_error = Some(format!("PORT is not a valid port: {port}")),
            }
        }

        if let Some(url) = lookup("FINANCE_NEWS_URL").filter(|u| !u.trim().is_empty()) {
            self.finance_url = Some(url);
        }

        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<NewsConfig> {
        if let Some(reason) = self.env_error {
            return Err(NewsError::ConfigError(reason));
        }

        let defaults = NewsConfig::default();

        let config = NewsConfig {
            discord_token: self.discord_token,
            command_prefix: self.command_prefix.unwrap_or(defaults.command_prefix),
            update_interval: self.update_interval.unwrap_or(defaults.update_interval),
            max_items_per_update: self
                .max_items_per_update
                .unwrap_or(defaults.max_items_per_update),
            max_items_combined: self.max_items_combined.unwrap_or(defaults.max_items_combined),
            max_items_auto: self.max_items_auto.unwrap_or(defaults.max_items_auto),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            crypto_url: self.crypto_url.unwrap_or(defaults.crypto_url),
            stock_url: self.stock_url.unwrap_or(defaults.stock_url),
            finance_url: self.finance_url,
            keepalive_port: self.keepalive_port.unwrap_or(defaults.keepalive_port),
        };

        config.validate()?;
        Ok(config)
    }
}
