use anyhow::Result;
use clap::Parser;

use setman::cli::{Cli, Commands};
use setman::commands;
use setman::config::{load_config, resolve_settings_file};
use setman::store::SettingsStore;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config()?;
    let settings_file = resolve_settings_file(cli.file.as_deref(), &config);
    let store = SettingsStore::with_path(&config.store_name, settings_file);

    match &cli.command {
        Commands::Init { dirs } => commands::init::run(&store, dirs),
        Commands::Set { key, value, json } => commands::set::run(&store, key, value, *json),
        Commands::Get { key } => commands::get::run(&store, key),
        Commands::Show => commands::show::run(&store),
    }
}
