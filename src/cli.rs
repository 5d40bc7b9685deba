use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "unstitched", version, about = "Unstitched ethical-fashion demo CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Catalog source (dir or catalog.json); defaults to the built-in catalog"
    )]
    pub catalog: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Config file overriding ~/.config/unstitched/config.toml"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Score {
        #[arg(long)]
        brand: String,
        #[arg(long)]
        material: String,
        #[arg(long)]
        origin: String,
    },
    Scan {
        #[arg(long, help = "Label photo to send to the AI reader (mock reader if absent)")]
        image: Option<PathBuf>,
    },
    Recommend {
        #[arg(long, value_delimiter = ',')]
        styles: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        materials: Vec<String>,
        #[arg(short, long, default_value_t = 4)]
        k: usize,
    },
    Shop {
        #[command(subcommand)]
        command: ShopCommands,
    },
    Charities,
    Session,
}

#[derive(Subcommand, Debug)]
pub enum ShopCommands {
    List { query: Option<String> },
    Show { item: String },
    Validate,
}
