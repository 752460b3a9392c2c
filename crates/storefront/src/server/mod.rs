//! HTTP server for the catalog.
//!
//! Routes:
//! - `GET /` renders the catalog, redirecting to the canonical filter URL first
//! - `GET /products/{id}` renders one product
//! - anything else renders the 404 page

mod handlers;

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, info_span, Instrument};

use crate::catalog::CatalogSource;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::price::PriceBounds;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<dyn CatalogSource>,
    bounds: PriceBounds,
}

impl AppState {
    /// Create handler state over `catalog` with the given filter bounds.
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogSource>, bounds: PriceBounds) -> Self {
        Self { catalog, bounds }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("catalog", &self.catalog.name())
            .field("bounds", &self.bounds)
            .finish()
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::catalog))
        .route("/products/{id}", get(handlers::product))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(trace_request))
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(config: &Config, catalog: Arc<dyn CatalogSource>) -> Result<()> {
    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;

    info!(
        %addr,
        upstream = %config.api.base_url,
        source = catalog.name(),
        "Serving product catalog"
    );

    let state = AppState::new(catalog, config.price_bounds());
    serve_listener(listener, state, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails.
pub async fn serve_listener<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn trace_request(request: Request, next: Next) -> Response {
    let span = info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    );

    async move {
        let started = Instant::now();
        let response = next.run(request).await;
        info!(
            status = response.status().as_u16(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Handled request"
        );
        response
    }
    .instrument(span)
    .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    info!("Shutdown signal received");
}
