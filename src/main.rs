use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod domain;
mod services;

pub use catalog::{Catalog, CatalogError, CatalogItem, Charity};
pub use cli::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use services::audit::*;
pub use services::config::*;
pub use services::label::*;
pub use services::output::*;
pub use services::recommend::*;
pub use services::scoring::*;
pub use services::session::*;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        print_error(cli.json, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let catalog = catalog::load_catalog(cli.catalog.as_deref())?;

    if commands::handle_session_command(cli, &config, &catalog)? {
        return Ok(());
    }
    commands::handle_runtime_commands(cli, &config, &catalog)
}
