//! Products HTTP Server.
//!
//! Serves `GET /products/{id}` through the cache-aside [`ProductService`].
//! Every failure becomes a JSON body with a single `error` field; internal
//! detail stays in the logs.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::domain::errors::DomainError;
use crate::domain::models::{Product, ServerConfig};
use crate::domain::ports::{CacheBackend, ProductRepository};
use crate::services::ProductService;

/// Configuration for the products HTTP server.
#[derive(Debug, Clone)]
pub struct ProductsHttpConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ProductsHttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl From<&ServerConfig> for ProductsHttpConfig {
    fn from(config: &ServerConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A domain error on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self.0 {
            DomainError::InvalidProductId(_) => (StatusCode::BAD_REQUEST, "Invalid product ID"),
            DomainError::ProductNotFound(_) => (StatusCode::NOT_FOUND, "Product not found"),
            DomainError::Cache(_) | DomainError::DatabaseError(_) | DomainError::SerializationError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let body = ErrorResponse {
            error: message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Products HTTP Server.
pub struct ProductsHttpServer<R, C>
where
    R: ProductRepository + ?Sized + 'static,
    C: CacheBackend + ?Sized + 'static,
{
    config: ProductsHttpConfig,
    service: Arc<ProductService<R, C>>,
}

impl<R, C> ProductsHttpServer<R, C>
where
    R: ProductRepository + ?Sized + 'static,
    C: CacheBackend + ?Sized + 'static,
{
    pub fn new(service: Arc<ProductService<R, C>>, config: ProductsHttpConfig) -> Self {
        Self { config, service }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/products/{id}", get(get_product::<R, C>))
            .route("/health", get(health_check))
            .with_state(Arc::clone(&self.service))
            .layer(TraceLayer::new_for_http())
    }

    fn addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.config.host, self.config.port).parse()
    }

    /// Start the server with a shutdown signal. In-flight requests finish before it returns.
    pub async fn serve_with_shutdown<F>(
        self,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = self.addr()?;
        let router = self.router();

        tracing::info!("Products HTTP server listening on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

// Handler functions

async fn health_check() -> &'static str {
    "OK"
}

async fn get_product<R, C>(
    State(service): State<Arc<ProductService<R, C>>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError>
where
    R: ProductRepository + ?Sized + 'static,
    C: CacheBackend + ?Sized + 'static,
{
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}
