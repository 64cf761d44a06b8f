//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines async trait interfaces that infrastructure adapters must implement:
//! - ProductRepository: durable store lookups and seeding
//! - CacheBackend: raw cache reads and writes with expiry
//!
//! These traits keep the lookup logic independent of SQLite and Redis.

pub mod cache_backend;
pub mod product_repository;

pub use cache_backend::CacheBackend;
pub use product_repository::ProductRepository;
