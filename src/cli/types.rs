//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::{get::GetArgs, migrate::MigrateArgs, seed::SeedArgs, serve::ServeArgs};

#[derive(Parser, Debug)]
#[command(name = "product-cache")]
#[command(about = "Product lookup service with a read-through cache", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file merged over product-cache.yaml
    #[arg(short, long, global = true, env = "PRODUCT_CACHE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Migrate, seed and serve GET /products/{id}
    Serve(ServeArgs),

    /// Insert the sample products and exit
    Seed(SeedArgs),

    /// Apply database migrations and exit
    Migrate(MigrateArgs),

    /// Look up one product through the cache
    Get(GetArgs),
}
