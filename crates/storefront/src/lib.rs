//! `storefront` - A server-rendered product catalog
//!
//! This library fetches a product catalog from a remote REST API, validates
//! it, and renders list and detail pages with a price filter that lives in the
//! page URL.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod price;
pub mod product;
pub mod render;
pub mod server;

pub use catalog::{CachedCatalog, CatalogSource, HttpCatalog};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use price::{PriceBounds, PriceFilter, PriceRange};
pub use product::{Product, Rating};
pub use server::{router, serve, AppState};
