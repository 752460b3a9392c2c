//! HTTP client for the catalog API.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, error, info};

use super::CatalogSource;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::product::{parse_product, parse_products, Product};

/// Catalog backed by a `/products` REST API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    /// Create a catalog client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL.
    pub fn new(client: reqwest::Client, base_url: &str) -> Result<Self> {
        url::Url::parse(base_url).map_err(|e| {
            Error::config_validation(format!("invalid api.base_url {base_url}: {e}"))
        })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a catalog client using the timeout and user agent from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the base URL is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.api.user_agent.clone())
            .build()?;
        Self::new(client, &config.api.base_url)
    }

    /// The API root, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        debug!(%url, "Fetching from catalog API");
        self.client.get(url).send().await.map_err(|e| {
            error!(%url, error = %e, "Catalog request failed");
            Error::Http(e)
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn products(&self) -> Result<Vec<Product>> {
        let url = format!("{}/products", self.base_url);
        let response = self.get(&url).await?;

        let status = response.status();
        if !status.is_success() {
            error!(%url, %status, "Error fetching products");
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let products = parse_products(&body)?;
        info!(count = products.len(), "Fetched products");
        Ok(products)
    }

    async fn product(&self, id: u64) -> Result<Product> {
        let url = format!("{}/products/{id}", self.base_url);
        let response = self.get(&url).await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::ProductNotFound { id });
        }
        if !status.is_success() {
            error!(%url, %status, "Error fetching product");
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        // Unknown IDs may come back as 200 with an empty or null body
        let trimmed = body.trim_ascii();
        if trimmed.is_empty() || trimmed == b"null" {
            return Err(Error::ProductNotFound { id });
        }

        let product = parse_product(&body)?;
        debug!(id, title = %product.title, "Fetched product");
        Ok(product)
    }
}
