//! Implementation of the `product-cache serve` command.

use anyhow::{Context, Result};
use clap::Args;
use std::future::Future;
use std::io;
use std::sync::Arc;
use tracing::info;

use crate::adapters::http::{ProductsHttpConfig, ProductsHttpServer};
use crate::adapters::sqlite::SqliteProductRepository;
use crate::cli::{build_product_service, open_store};
use crate::domain::models::Config;
use crate::services::SeedService;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind to (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Skip inserting the sample products
    #[arg(long)]
    pub no_seed: bool,
}

pub async fn execute(args: ServeArgs, config: &Config) -> Result<()> {
    let pool = open_store(config).await?;

    if config.seed.enabled && !args.no_seed {
        let repository = Arc::new(SqliteProductRepository::new(pool.clone()));
        SeedService::new(repository)
            .seed_samples()
            .await
            .context("Failed to seed sample products")?;
    }

    let service = build_product_service(config, pool.clone())?;

    let mut http_config = ProductsHttpConfig::from(&config.server);
    if let Some(host) = args.host {
        http_config.host = host;
    }
    if let Some(port) = args.port {
        http_config.port = port;
    }

    ProductsHttpServer::new(service, http_config)
        .serve_with_shutdown(shutdown_signal())
        .await
        .map_err(|err| anyhow::anyhow!("HTTP server failed: {err}"))?;

    pool.close().await;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await;
}

/// Resolves when `signal` fires. If the signal cannot be listened for the
/// future never resolves, so the server keeps running.
async fn wait_for_signal<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("shutdown signal received, draining in-flight requests"),
        Err(err) => {
            tracing::error!(error = %err, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
