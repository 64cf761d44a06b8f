//! Infrastructure layer module
//!
//! Process-wide concerns that are not adapters for a port:
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod logging;
