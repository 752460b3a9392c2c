//! Time-based revalidation of catalog responses.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::debug;

use super::CatalogSource;
use crate::error::{Error, Result};
use crate::product::Product;

/// A cached value with its fetch timestamp.
#[derive(Debug)]
struct Cached<T> {
    value: T,
    fetched_at: Instant,
}

impl<T: Clone> Cached<T> {
    fn fresh(&self, ttl: Duration) -> Option<T> {
        (self.fetched_at.elapsed() < ttl).then(|| self.value.clone())
    }
}

/// Wraps a [`CatalogSource`] and reuses its successful answers.
///
/// The product list and each product detail are kept for their own TTL.
/// Failed fetches are never stored, so the next request retries upstream.
#[derive(Debug)]
pub struct CachedCatalog<S> {
    inner: S,
    list_ttl: Duration,
    detail_ttl: Duration,
    list: RwLock<Option<Cached<Vec<Product>>>>,
    details: RwLock<HashMap<u64, Cached<Product>>>,
}

impl<S: CatalogSource> CachedCatalog<S> {
    /// Wrap `inner`, keeping lists for `list_ttl` and details for `detail_ttl`.
    #[must_use]
    pub fn new(inner: S, list_ttl: Duration, detail_ttl: Duration) -> Self {
        Self {
            inner,
            list_ttl,
            detail_ttl,
            list: RwLock::new(None),
            details: RwLock::new(HashMap::new()),
        }
    }

    /// The wrapped source.
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn cached_list(&self) -> Result<Option<Vec<Product>>> {
        let list = self.list.read().map_err(poisoned)?;
        Ok(list.as_ref().and_then(|c| c.fresh(self.list_ttl)))
    }

    fn cached_detail(&self, id: u64) -> Result<Option<Product>> {
        let details = self.details.read().map_err(poisoned)?;
        Ok(details.get(&id).and_then(|c| c.fresh(self.detail_ttl)))
    }
}

#[async_trait]
impl<S: CatalogSource> CatalogSource for CachedCatalog<S> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn products(&self) -> Result<Vec<Product>> {
        if let Some(products) = self.cached_list()? {
            debug!(count = products.len(), "Product list served from cache");
            return Ok(products);
        }

        debug!(source = self.inner.name(), "Product list cache miss");
        let products = self.inner.products().await?;
        if !self.list_ttl.is_zero() {
            *self.list.write().map_err(poisoned)? = Some(Cached {
                value: products.clone(),
                fetched_at: Instant::now(),
            });
        }
        Ok(products)
    }

    async fn product(&self, id: u64) -> Result<Product> {
        if let Some(product) = self.cached_detail(id)? {
            debug!(id, "Product served from cache");
            return Ok(product);
        }

        debug!(id, source = self.inner.name(), "Product cache miss");
        let product = self.inner.product(id).await?;
        if !self.detail_ttl.is_zero() {
            self.details.write().map_err(poisoned)?.insert(
                id,
                Cached {
                    value: product.clone(),
                    fetched_at: Instant::now(),
                },
            );
        }
        Ok(product)
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> Error {
    Error::internal(format!("catalog cache lock poisoned: {err}"))
}
