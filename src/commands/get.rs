use anyhow::Result;
use colored::Colorize;
use serde_json::Value;

use crate::store::SettingsStore;

pub fn run(store: &SettingsStore, key: &str) -> Result<()> {
    match store.get_option(key)? {
        // Bare strings for easy shell use; everything else as compact JSON.
        Some(Value::String(text)) => println!("{text}"),
        Some(value) => println!("{value}"),
        None => eprintln!("{} '{}' is not set.", "[!]".yellow(), key),
    }
    Ok(())
}
