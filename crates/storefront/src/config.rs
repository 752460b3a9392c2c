//! Configuration management for storefront.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::price::PriceBounds;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "storefront";

/// Environment variable prefix.
const ENV_PREFIX: &str = "STOREFRONT_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `STOREFRONT_`, sections split on `__`)
/// 2. TOML config file at `~/.config/storefront/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Upstream catalog API configuration.
    pub api: ApiConfig,
    /// Price filter configuration.
    pub price_filter: PriceFilterConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the server listens on.
    pub bind: String,
}

/// Upstream catalog API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the catalog API, without the `/products` suffix.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// How long a fetched product list is reused, in seconds.
    /// Set to 0 to always refetch.
    pub list_revalidate_secs: u64,
    /// How long a fetched product detail is reused, in seconds.
    /// Set to 0 to always refetch.
    pub detail_revalidate_secs: u64,
    /// User agent sent upstream.
    pub user_agent: String,
}

/// Price filter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceFilterConfig {
    /// Lowest selectable price.
    pub min_price: f64,
    /// Highest selectable price.
    pub max_price: f64,
    /// Input step.
    pub step: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fakestoreapi.com".to_string(),
            timeout_ms: 10_000,
            list_revalidate_secs: 300,
            detail_revalidate_secs: 3600,
            user_agent: concat!("storefront/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for PriceFilterConfig {
    fn default() -> Self {
        Self {
            min_price: 0.0,
            max_price: 1000.0,
            step: 0.01,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `STOREFRONT_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;

        let base = url::Url::parse(&self.api.base_url).map_err(|e| {
            Error::config_validation(format!("invalid api.base_url {}: {e}", self.api.base_url))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::config_validation(format!(
                "api.base_url must use http or https, got {}",
                base.scheme()
            )));
        }

        if self.api.timeout_ms == 0 {
            return Err(Error::config_validation(
                "api.timeout_ms must be greater than 0",
            ));
        }

        let prices = &self.price_filter;
        if !prices.min_price.is_finite() || !prices.max_price.is_finite() {
            return Err(Error::config_validation("price bounds must be finite"));
        }
        if prices.min_price < 0.0 || prices.max_price < 0.0 {
            return Err(Error::config_validation(
                "price bounds cannot be negative",
            ));
        }
        if prices.min_price > prices.max_price {
            return Err(Error::config_validation(format!(
                "min_price ({}) cannot be greater than max_price ({})",
                prices.min_price, prices.max_price
            )));
        }
        if !(prices.step.is_finite() && prices.step > 0.0) {
            return Err(Error::config_validation(
                "price_filter.step must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Parse the server bind address.
    ///
    /// # Errors
    ///
    /// Returns an error if `server.bind` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind.parse().map_err(|e| {
            Error::config_validation(format!("invalid server.bind {}: {e}", self.server.bind))
        })
    }

    /// Get the upstream request timeout as a Duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.api.timeout_ms)
    }

    /// How long a product list stays fresh.
    #[must_use]
    pub fn list_revalidate(&self) -> Duration {
        Duration::from_secs(self.api.list_revalidate_secs)
    }

    /// How long a product detail stays fresh.
    #[must_use]
    pub fn detail_revalidate(&self) -> Duration {
        Duration::from_secs(self.api.detail_revalidate_secs)
    }

    /// The selectable price range.
    #[must_use]
    pub fn price_bounds(&self) -> PriceBounds {
        PriceBounds {
            floor: self.price_filter.min_price,
            ceiling: self.price_filter.max_price,
            step: self.price_filter.step,
        }
    }
}
