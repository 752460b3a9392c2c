//! Price utilities for the catalog view.
//!
//! Filtering is a single inclusive pass over the product list.

mod filter;

pub use filter::{PriceFilter, MAX_PRICE_PARAM, MIN_PRICE_PARAM};

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Lowest and highest price found in a set of products.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lowest price.
    pub min: f64,
    /// Highest price.
    pub max: f64,
}

/// The selectable price range of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
    /// Lowest selectable price; a minimum at or below this is no filter.
    pub floor: f64,
    /// Highest selectable price; a maximum at or above this is no filter.
    pub ceiling: f64,
    /// Input granularity.
    pub step: f64,
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self {
            floor: 0.0,
            ceiling: 1000.0,
            step: 0.01,
        }
    }
}

/// Keep the products priced within `min..=max`, in their original order.
#[must_use]
pub fn filter_products_by_price(products: &[Product], min: f64, max: f64) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| product.price >= min && product.price <= max)
        .collect()
}

/// Lowest and highest price in `products`, or zeros when there are none.
#[must_use]
pub fn calculate_price_range(products: &[Product]) -> PriceRange {
    let mut prices = products.iter().map(|p| p.price);
    let Some(first) = prices.next() else {
        return PriceRange { min: 0.0, max: 0.0 };
    };

    prices.fold(
        PriceRange {
            min: first,
            max: first,
        },
        |range, price| PriceRange {
            min: range.min.min(price),
            max: range.max.max(price),
        },
    )
}

/// Format a price as dollars with two decimals.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Check that both ends are non-negative and ordered.
#[must_use]
pub fn is_valid_price_range(min: f64, max: f64) -> bool {
    min >= 0.0 && max >= 0.0 && min <= max
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::product::Rating;

    pub(crate) fn product(id: u64, price: f64) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            price,
            description: format!("Test product {id}"),
            category: "test".to_string(),
            image: format!("https://example.com/{id}.jpg"),
            rating: Rating {
                rate: 4.0,
                count: 10,
            },
        }
    }

    pub(crate) fn sample_products() -> Vec<Product> {
        vec![product(1, 10.99), product(2, 25.5), product(3, 99.99)]
    }

    #[test]
    fn test_filter_within_range() {
        let products = sample_products();
        let result = filter_products_by_price(&products, 20.0, 50.0);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
        assert!((result[0].price - 25.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_filter_range_includes_all() {
        let products = sample_products();
        assert_eq!(filter_products_by_price(&products, 0.0, 100.0).len(), 3);
    }

    #[test]
    fn test_filter_no_match() {
        let products = sample_products();
        assert!(filter_products_by_price(&products, 200.0, 300.0).is_empty());
    }

    #[test]
    fn test_filter_inclusive_boundaries() {
        let products = sample_products();
        let ids: Vec<u64> = filter_products_by_price(&products, 10.99, 25.5)
            .iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_filter_inverted_range_is_empty() {
        let products = sample_products();
        assert!(filter_products_by_price(&products, 50.0, 10.0).is_empty());
    }

    #[test]
    fn test_calculate_price_range() {
        let range = calculate_price_range(&sample_products());

        assert!((range.min - 10.99).abs() < f64::EPSILON);
        assert!((range.max - 99.99).abs() < f64::EPSILON);
    }

    #[test]
    fn test_calculate_price_range_empty() {
        assert_eq!(
            calculate_price_range(&[]),
            PriceRange { min: 0.0, max: 0.0 }
        );
    }

    #[test]
    fn test_calculate_price_range_single() {
        let range = calculate_price_range(&[product(1, 10.99)]);

        assert!((range.min - 10.99).abs() < f64::EPSILON);
        assert!((range.max - 10.99).abs() < f64::EPSILON);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(10.99), "$10.99");
        assert_eq!(format_price(5.0), "$5.00");
        assert_eq!(format_price(99.999), "$100.00");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_is_valid_price_range() {
        assert!(is_valid_price_range(0.0, 100.0));
        assert!(is_valid_price_range(10.0, 10.0));
        assert!(is_valid_price_range(5.99, 25.5));

        assert!(!is_valid_price_range(100.0, 50.0));
        assert!(!is_valid_price_range(-10.0, 50.0));
        assert!(!is_valid_price_range(10.0, -5.0));
    }

    #[test]
    fn test_default_bounds() {
        let bounds = PriceBounds::default();
        assert!((bounds.ceiling - 1000.0).abs() < f64::EPSILON);
    }
}
