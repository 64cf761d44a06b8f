//! Implementation of the `product-cache seed` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

use crate::adapters::sqlite::SqliteProductRepository;
use crate::cli::open_store;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::services::{sample_products, SeedService};

#[derive(Args, Debug)]
pub struct SeedArgs {}

#[derive(Debug, Serialize)]
pub struct SeedOutput {
    pub inserted: u64,
    pub total: usize,
}

impl CommandOutput for SeedOutput {
    fn to_human(&self) -> String {
        if self.inserted == 0 {
            format!("All {} sample products already present", self.total)
        } else {
            format!("Inserted {} of {} sample products", self.inserted, self.total)
        }
    }
}

pub async fn execute(_args: SeedArgs, config: &Config, json_mode: bool) -> Result<()> {
    let pool = open_store(config).await?;
    let repository = Arc::new(SqliteProductRepository::new(pool.clone()));

    let inserted = SeedService::new(repository)
        .seed_samples()
        .await
        .context("Failed to seed sample products")?;
    pool.close().await;

    output(
        &SeedOutput {
            inserted,
            total: sample_products().len(),
        },
        json_mode,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_output() {
        let fresh = SeedOutput { inserted: 3, total: 3 };
        assert_eq!(fresh.to_human(), "Inserted 3 of 3 sample products");

        let repeat = SeedOutput { inserted: 0, total: 3 };
        assert_eq!(repeat.to_human(), "All 3 sample products already present");
        assert_eq!(repeat.to_json()["inserted"], 0);
    }
}
