//! Product Cache CLI entry point.

use clap::Parser;

use product_cache::cli::{commands, handle_error, Cli, Commands};
use product_cache::infrastructure::logging::{LogConfig, LoggerImpl};
use product_cache::ConfigLoader;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => handle_error(err, cli.json),
    };

    let _logger = match LoggerImpl::init(&LogConfig::from(&config.logging)) {
        Ok(logger) => logger,
        Err(err) => handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, &config).await,
        Commands::Seed(args) => commands::seed::execute(args, &config, cli.json).await,
        Commands::Migrate(args) => commands::migrate::execute(args, &config, cli.json).await,
        Commands::Get(args) => commands::get::execute(args, &config, cli.json).await,
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
