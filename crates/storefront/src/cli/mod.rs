//! Command-line interface for storefront.
//!
//! This module provides the CLI structure and output helpers for the
//! `storefront` binary.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, OutputFormat, ProductCommand, ProductsCommand, ServeCommand};
pub use output::{product_details, product_table, products_plain};

/// storefront - Browse a product catalog
///
/// Serves a product catalog backed by a remote REST API, with price
/// filtering kept in the page URL. The same catalog can be queried from the
/// command line.
#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the catalog web server
    Serve(ServeCommand),

    /// List products, optionally filtered by price
    Products(ProductsCommand),

    /// Show a single product
    Product(ProductCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }
}
