//! Domain layer for the product cache service
//!
//! This module contains the product model, error types and the port traits
//! the adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{CacheError, DomainError, DomainResult};
