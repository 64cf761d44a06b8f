//! HTTP request boundary.

pub mod products_http;

pub use products_http::{ApiError, ErrorResponse, ProductsHttpConfig, ProductsHttpServer};
