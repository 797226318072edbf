//! Command-line interface for lignage.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **resolve**: Resolve a loose or legacy identifier to a person record
//! - **suggest**: Rank records against a partial (nom, pere, grand-pere) query
//! - **relatives**: Show a person's parents, children, and unions
//! - **path**: Find the shortest kinship chain between two people
//! - **registry**: List, show, or export the person dataset
//! - **serve**: Start the JSON API server
//!
//! ## Usage
//!
//! ```text
//! # Resolve a legacy identifier
//! lignage resolve p_issa
//!
//! # Autocomplete-style suggestions
//! lignage suggest --nom issa --pere said
//!
//! # Family of a person
//! lignage relatives issa_said_000010
//!
//! # Shortest kinship chain, with the common-ancestor structure
//! lignage path omar_issa_000020 salim_hassan_000022 --pivot
//!
//! # JSON output for scripting
//! lignage relatives issa_said_000010 --format json
//!
//! # Start the JSON API
//! lignage serve --port 8080 --open
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::registry::store::PersonRegistry;

pub mod path;
pub mod registry;
pub mod relatives;
pub mod resolve;
pub mod suggest;

#[derive(Parser)]
#[command(name = "lignage")]
#[command(version)]
#[command(about = "Resolve kinship paths and family structures from a genealogical registry")]
#[command(
    long_about = "lignage answers kinship questions over a genealogical dataset.\n\nIt resolves loose or legacy person identifiers, suggests records from partial name queries, derives family units (partners and shared children), and finds the shortest parent/child chain between two people, including the common ancestor the two sides descend from."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Path to a custom dataset file (defaults to the embedded dataset)
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a loose or legacy identifier to a person record
    Resolve(resolve::ResolveArgs),

    /// Suggest persons from a partial name query
    Suggest(suggest::SuggestArgs),

    /// Show a person's parents, children, and unions
    Relatives(relatives::RelativesArgs),

    /// Find the shortest kinship chain between two people
    Path(path::PathArgs),

    /// Manage the person dataset
    Registry(registry::RegistryArgs),

    /// Start the JSON API server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load the dataset named on the command line, or the embedded one.
pub fn load_registry(dataset: Option<&PathBuf>, verbose: bool) -> anyhow::Result<PersonRegistry> {
    let registry = match dataset {
        Some(path) => PersonRegistry::load_from_file(path)?,
        None => PersonRegistry::load_embedded()?,
    };

    if verbose {
        eprintln!("Loaded registry with {} persons", registry.len());
    }

    Ok(registry)
}
