//! Command handlers. Each takes its parsed arguments and the loaded config.

pub mod get;
pub mod migrate;
pub mod seed;
pub mod serve;
