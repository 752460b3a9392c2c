//! `storefront` - CLI for the product catalog
//!
//! This binary runs the catalog web server and offers command-line access to
//! the same catalog.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;

use storefront::cli::{
    self, Cli, Command, ConfigCommand, OutputFormat, ProductCommand, ProductsCommand, ServeCommand,
};
use storefront::price::{
    calculate_price_range, filter_products_by_price, format_price, is_valid_price_range,
};
use storefront::product::parse_product_id;
use storefront::{catalog, init_logging, server, CatalogSource, Config, Error, PriceFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("failed to load configuration")?;

    // Execute the command
    match cli.command {
        Command::Serve(serve_cmd) => handle_serve(config, serve_cmd).await,
        Command::Products(products_cmd) => handle_products(&config, &products_cmd).await,
        Command::Product(product_cmd) => handle_product(&config, &product_cmd).await,
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

async fn handle_serve(mut config: Config, cmd: ServeCommand) -> Result<()> {
    if let Some(bind) = cmd.bind {
        config.server.bind = bind;
        config.validate()?;
    }

    let catalog = catalog::from_config(&config)?;
    server::serve(&config, catalog).await?;
    Ok(())
}

async fn handle_products(config: &Config, cmd: &ProductsCommand) -> Result<()> {
    let catalog = catalog::from_config(config)?;
    let products = catalog.products().await?;

    let filter = PriceFilter::apply(cmd.min_price, cmd.max_price, config.price_bounds());
    if !is_valid_price_range(filter.min(), filter.max()) {
        tracing::warn!(
            min = filter.min(),
            max = filter.max(),
            "Minimum price is above maximum; nothing will match"
        );
    }
    let visible = filter_products_by_price(&products, filter.min(), filter.max());

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&visible)?),
        OutputFormat::Plain => print!("{}", cli::products_plain(&visible)),
        OutputFormat::Table => {
            print!("{}", cli::product_table(&visible));
            println!();
            if !products.is_empty() {
                let range = calculate_price_range(&products);
                println!(
                    "Catalog prices: {} - {}",
                    format_price(range.min),
                    format_price(range.max)
                );
            }
            print!("Showing {} of {} products", visible.len(), products.len());
            if filter.is_active() {
                print!(" (filtered by price: {})", filter.label());
            }
            println!();
        }
    }
    Ok(())
}

async fn handle_product(config: &Config, cmd: &ProductCommand) -> Result<()> {
    let id = parse_product_id(&cmd.id).ok_or_else(|| Error::InvalidProductId {
        raw: cmd.id.clone(),
    })?;

    let catalog = catalog::from_config(config)?;
    let product = catalog.product(id).await?;

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&product)?),
        OutputFormat::Plain | OutputFormat::Table => print!("{}", cli::product_details(&product)),
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Server]");
                println!("  Bind:               {}", config.server.bind);
                println!();
                println!("[API]");
                println!("  Base URL:           {}", config.api.base_url);
                println!("  Timeout (ms):       {}", config.api.timeout_ms);
                println!("  List revalidate:    {}s", config.api.list_revalidate_secs);
                println!("  Detail revalidate:  {}s", config.api.detail_revalidate_secs);
                println!("  User agent:         {}", config.api.user_agent);
                println!();
                println!("[Price filter]");
                println!("  Min price:          {}", config.price_filter.min_price);
                println!("  Max price:          {}", config.price_filter.max_price);
                println!("  Step:               {}", config.price_filter.step);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
