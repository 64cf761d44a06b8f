pub mod config;
pub mod product;

pub use config::{
    CacheBackendKind, CacheConfig, Config, DatabaseConfig, LoggingConfig, SeedConfig, ServerConfig,
};
pub use product::{Product, ProductId};
