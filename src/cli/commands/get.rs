//! Implementation of the `product-cache get` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::cli::{build_product_service, open_store};
use crate::domain::models::{Config, Product};

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Product ID
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct GetOutput {
    pub product: Product,
    /// Remaining cache lifetime after the lookup
    pub cache_ttl_secs: Option<u64>,
}

impl CommandOutput for GetOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!("ID:          {}", self.product.id),
            format!("Name:        {}", self.product.name),
            format!("Description: {}", self.product.description),
            format!("Price:       {:.2}", self.product.price),
        ];
        match self.cache_ttl_secs {
            Some(secs) => lines.push(format!("Cached for:  {secs}s")),
            None => lines.push("Cached for:  not cached".to_string()),
        }
        lines.join("\n")
    }
}

pub async fn execute(args: GetArgs, config: &Config, json_mode: bool) -> Result<()> {
    let pool = open_store(config).await?;
    let service = build_product_service(config, pool.clone())?;

    let product = service.get_product(&args.id).await?;
    // Inspection only; a failure here does not change the lookup result.
    let cache_ttl_secs = service
        .cache()
        .backend()
        .ttl(&product.id.cache_key())
        .await
        .ok()
        .flatten()
        .map(|ttl| ttl.as_secs());
    pool.close().await;

    output(&GetOutput { product, cache_ttl_secs }, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ProductId;

    #[test]
    fn test_human_output() {
        let out = GetOutput {
            product: Product::new(ProductId::new(1), "Sample Product 1", "Description of Sample Product 1", 19.99),
            cache_ttl_secs: Some(86_400),
        };
        let text = out.to_human();
        assert!(text.contains("Name:        Sample Product 1"));
        assert!(text.contains("Price:       19.99"));
        assert!(text.contains("Cached for:  86400s"));
    }

    #[test]
    fn test_json_output_embeds_wire_product() {
        let out = GetOutput {
            product: Product::new(ProductId::new(2), "Sample Product 2", "Description of Sample Product 2", 29.99),
            cache_ttl_secs: None,
        };
        let json = out.to_json();
        assert_eq!(json["product"]["id"], 2);
        assert!(json["cache_ttl_secs"].is_null());
    }
}
