use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "stockroom", version, about = "Stockroom inventory admin tool")]
pub struct Cli {
    /// Settings file (missing files are ignored)
    #[arg(long, global = true, env = "STOCKROOM_CONFIG", default_value = "stockroom.toml")]
    pub config: PathBuf,

    /// Output format (overrides the settings file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the fields of a TOML form file; exits 1 when invalid
    Validate {
        /// Form file with `[[fields]]` tables
        form: PathBuf,
    },
    /// Work with products
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProductAction {
    /// Run the new-product form over the given values; exits 1 when invalid
    Check(CheckArgs),
    /// List the catalog
    List(ListArgs),
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    #[arg(long, default_value = "")]
    pub sku: String,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub price: String,
    #[arg(long, default_value = "")]
    pub stock: String,
    /// Electronics, Office, Accessories, Furniture or Software
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Matches name or SKU, case-insensitively
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// ok, low or critical
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
