//! Implementation of the `product-cache migrate` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::adapters::sqlite::{all_embedded_migrations, create_pool, Migrator, PoolConfig};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;

#[derive(Args, Debug)]
pub struct MigrateArgs {}

#[derive(Debug, Serialize)]
pub struct MigrateOutput {
    pub applied: usize,
    pub schema_version: i64,
}

impl CommandOutput for MigrateOutput {
    fn to_human(&self) -> String {
        format!(
            "Applied {} migration(s); schema at version {}",
            self.applied, self.schema_version
        )
    }
}

pub async fn execute(_args: MigrateArgs, config: &Config, json_mode: bool) -> Result<()> {
    let pool = create_pool(&config.database.url(), Some(PoolConfig::from(&config.database)))
        .await
        .with_context(|| format!("Failed to open database at {}", config.database.path))?;

    let migrator = Migrator::new(pool.clone());
    let applied = migrator
        .run_embedded_migrations(all_embedded_migrations())
        .await
        .context("Failed to run database migrations")?;
    let schema_version = migrator.get_current_version().await?;
    pool.close().await;

    output(&MigrateOutput { applied, schema_version }, json_mode);
    Ok(())
}
