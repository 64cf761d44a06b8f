pub mod product_cache;
pub mod product_service;
pub mod seed_service;

pub use product_cache::{decode_product, encode_product, CacheLookup, ProductCache};
pub use product_service::{ProductService, DEFAULT_CACHE_TTL};
pub use seed_service::{sample_products, SeedService};
