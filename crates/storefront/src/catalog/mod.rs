//! Access to the upstream product catalog.
//!
//! [`CatalogSource`] is the seam between the views and the third-party API:
//! [`HttpCatalog`] talks to the API, [`CachedCatalog`] reuses its answers for
//! a while, and tests plug in their own sources.

mod cache;
mod client;

pub use cache::CachedCatalog;
pub use client::HttpCatalog;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::Result;
use crate::product::Product;

/// A source of validated catalog products.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// The name of this source (for logging/debugging).
    fn name(&self) -> &'static str;

    /// Fetch every product.
    ///
    /// # Errors
    ///
    /// Returns an error if the products cannot be fetched or fail validation.
    async fn products(&self) -> Result<Vec<Product>>;

    /// Fetch one product.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ProductNotFound`] if there is no such product,
    /// or another error if it cannot be fetched or fails validation.
    async fn product(&self, id: u64) -> Result<Product>;
}

#[async_trait]
impl<S: CatalogSource + ?Sized> CatalogSource for Arc<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn products(&self) -> Result<Vec<Product>> {
        (**self).products().await
    }

    async fn product(&self, id: u64) -> Result<Product> {
        (**self).product(id).await
    }
}

/// Build the HTTP-backed, revalidating catalog described by `config`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn from_config(config: &Config) -> Result<Arc<dyn CatalogSource>> {
    let client = HttpCatalog::from_config(config)?;
    Ok(Arc::new(CachedCatalog::new(
        client,
        config.list_revalidate(),
        config.detail_revalidate(),
    )))
}
