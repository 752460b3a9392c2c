//! Route handlers.

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::{debug, error, info};

use super::AppState;
use crate::catalog::CatalogSource;
use crate::error::Error;
use crate::price::PriceFilter;
use crate::product::parse_product_id;
use crate::render;

/// `GET /`
pub(super) async fn catalog(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    let query = query.as_deref();
    let filter = PriceFilter::from_query(query, state.bounds);
    let canonical = filter.to_query(query);

    // Compared as text; a lossy rewrite of unrelated params redirects once
    if canonical != query.unwrap_or_default() {
        let location = PriceFilter::href("/", &canonical);
        debug!(%location, "Redirecting to canonical filter URL");
        return Redirect::to(&location).into_response();
    }

    match state.catalog.products().await {
        Ok(products) => Html(render::catalog_page(&products, &filter, query)).into_response(),
        Err(err) => failure(&err, &PriceFilter::href("/", &canonical)),
    }
}

/// `GET /products/{id}`
pub(super) async fn product(State(state): State<AppState>, Path(raw): Path<String>) -> Response {
    let Some(id) = parse_product_id(&raw) else {
        debug!(%raw, "Rejecting invalid product id");
        return product_not_found();
    };

    match state.catalog.product(id).await {
        Ok(product) => Html(render::product_page(&product)).into_response(),
        Err(err) if err.is_not_found() => {
            info!(id, "Product not found");
            product_not_found()
        }
        Err(err) => failure(&err, &format!("/products/{id}")),
    }
}

/// Fallback for unrouted paths.
pub(super) async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(render::not_found_page())).into_response()
}

fn product_not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(render::product_not_found_page())).into_response()
}

fn failure(err: &Error, retry_href: &str) -> Response {
    error!(error = %err, "Failed to load catalog data");
    (err.status_code(), Html(render::error_page(retry_href))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use tower::ServiceExt;

    use crate::price::tests::sample_products;
    use crate::price::PriceBounds;
    use crate::product::Product;
    use crate::server::router;

    /// In-memory catalog; `broken` makes every call fail upstream.
    #[derive(Debug)]
    struct FixedCatalog {
        broken: bool,
    }

    #[async_trait]
    impl CatalogSource for FixedCatalog {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn products(&self) -> crate::Result<Vec<Product>> {
            if self.broken {
                return Err(Error::UpstreamStatus { status: 500 });
            }
            Ok(sample_products())
        }

        async fn product(&self, id: u64) -> crate::Result<Product> {
            if self.broken {
                return Err(Error::invalid_payload("bad"));
            }
            sample_products()
                .into_iter()
                .find(|p| p.id == id)
                .ok_or(Error::ProductNotFound { id })
        }
    }

    fn app(broken: bool) -> axum::Router {
        router(AppState::new(
            Arc::new(FixedCatalog { broken }),
            PriceBounds::default(),
        ))
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, location, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_catalog() {
        let (status, _, body) = get(app(false), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Showing 3 of 3 products"));
    }

    #[tokio::test]
    async fn test_catalog_filtered() {
        let (status, _, body) = get(app(false), "/?minPrice=20&maxPrice=50").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Showing 1 of 3 products"));
        assert!(body.contains("(filtered by price: $20.00 - $50.00)"));
    }

    #[tokio::test]
    async fn test_catalog_redirects_to_canonical_query() {
        let (status, location, _) = get(app(false), "/?minPrice=&maxPrice=50").await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/?maxPrice=50"));
    }

    #[tokio::test]
    async fn test_catalog_redirects_cleared_filter_to_root() {
        let (status, location, _) = get(app(false), "/?minPrice=0&maxPrice=1000").await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn test_catalog_redirect_target_is_stable() {
        let (status, location, _) = get(app(false), "/?x=%FF&minPrice=20").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        let location = location.unwrap();

        let (status, again, body) = get(app(false), &location).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(again, None);
        assert!(body.contains("Showing 2 of 3 products"));
    }

    #[tokio::test]
    async fn test_catalog_upstream_failure() {
        let (status, _, body) = get(app(true), "/?minPrice=10").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("Something went wrong!"));
        assert!(body.contains("href=\"/?minPrice=10\""));
    }

    #[tokio::test]
    async fn test_product() {
        let (status, _, body) = get(app(false), "/products/2").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1 data-testid=\"product-title\">Product 2</h1>"));
    }

    #[tokio::test]
    async fn test_product_unknown() {
        let (status, _, body) = get(app(false), "/products/999999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("The product you are looking for does not exist."));
    }

    #[tokio::test]
    async fn test_product_invalid_id() {
        for uri in ["/products/abc", "/products/0", "/products/-3"] {
            let (status, _, body) = get(app(false), uri).await;

            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert!(body.contains("Go back to products"), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_product_upstream_failure() {
        let (status, _, body) = get(app(true), "/products/1").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("href=\"/products/1\""));
    }

    #[tokio::test]
    async fn test_fallback() {
        let (status, _, body) = get(app(false), "/products").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("<h1>404</h1>"));

        let (status, _, _) = get(app(false), "/nope/at/all").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
