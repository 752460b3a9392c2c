//! Product types and response validation.
//!
//! The catalog API is third-party, so every body it returns is decoded into
//! these types and checked before it reaches a view. Unknown fields are
//! ignored; missing or mistyped fields reject the whole payload.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::{Error, Result};

/// Customer rating summary for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating.
    pub rate: f64,
    /// Number of ratings.
    pub count: u64,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Upstream product ID.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Unit price in dollars.
    pub price: f64,
    /// Long description.
    pub description: String,
    /// Category name.
    pub category: String,
    /// Absolute URL of the product image.
    pub image: String,
    /// Rating summary.
    pub rating: Rating,
}

impl Product {
    /// Check the constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPayload`] if the image is not an absolute URL
    /// or a numeric field is not finite.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.image).map_err(|e| {
            Error::invalid_payload(format!(
                "product {}: image {:?} is not a URL: {e}",
                self.id, self.image
            ))
        })?;

        if !self.price.is_finite() {
            return Err(Error::invalid_payload(format!(
                "product {}: price is not finite",
                self.id
            )));
        }

        if !self.rating.rate.is_finite() {
            return Err(Error::invalid_payload(format!(
                "product {}: rating is not finite",
                self.id
            )));
        }

        Ok(())
    }

    /// Path of this product's detail page.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/products/{}", self.id)
    }
}

/// Decode and validate a product list body.
///
/// # Errors
///
/// Returns [`Error::InvalidPayload`] if the body is not an array of valid products.
pub fn parse_products(body: &[u8]) -> Result<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_slice(body).map_err(|e| rejected(&e))?;
    for product in &products {
        product.validate().map_err(logged)?;
    }
    Ok(products)
}

/// Decode and validate a single product body.
///
/// # Errors
///
/// Returns [`Error::InvalidPayload`] if the body is not a valid product.
pub fn parse_product(body: &[u8]) -> Result<Product> {
    let product: Product = serde_json::from_slice(body).map_err(|e| rejected(&e))?;
    product.validate().map_err(logged)?;
    Ok(product)
}

fn rejected(err: &serde_json::Error) -> Error {
    logged(Error::invalid_payload(err.to_string()))
}

fn logged(err: Error) -> Error {
    if let Error::InvalidPayload { detail } = &err {
        error!(%detail, "Validation error");
    }
    err
}

/// Parse a product ID the way a browser's `parseInt` would.
///
/// Leading whitespace and a sign are accepted, then the leading run of digits
/// is used and anything after it is ignored. Returns `None` when there are no
/// digits or the ID is not positive.
#[must_use]
pub fn parse_product_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let id: u64 = rest[..end].parse().ok()?;

    if negative || id == 0 {
        None
    } else {
        Some(id)
    }
}

/// Check whether `raw` parses as a product ID.
#[must_use]
pub fn is_valid_id(raw: &str) -> bool {
    parse_product_id(raw).is_some()
}
