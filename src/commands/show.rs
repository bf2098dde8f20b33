use anyhow::Result;
use colored::Colorize;
use tabled::settings::style::Style;
use tabled::Table;

use crate::error::SettingsError;
use crate::models::json_type_name;
use crate::store::SettingsStore;
use crate::ui;

pub fn run(store: &SettingsStore) -> Result<()> {
    println!("{}", "─".repeat(60).dimmed());
    println!("{}", "Settings".cyan().bold());
    println!("{}", "─".repeat(60).dimmed());

    let document = match store.read_config() {
        Ok(document) => document,
        Err(SettingsError::NotFound { path }) => {
            println!(
                "{} No settings file at {} yet. Run {} or {} first.",
                "[!]".yellow(),
                path.display(),
                "setman init".cyan(),
                "setman set".cyan()
            );
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!(
        "{} store '{}' at {}{}",
        "[*]".blue(),
        store.name(),
        store.settings_path().display(),
        modified_suffix(store)
    );
    println!();

    if document.is_empty() {
        println!("{} Settings file is empty.", "✓".green());
        return Ok(());
    }

    // serde_json's map keeps keys sorted, which makes for a stable table.
    let rows: Vec<ui::SettingRow> = document
        .iter()
        .map(|(key, value)| ui::SettingRow {
            key: key.clone(),
            kind: json_type_name(value),
            value: ui::format_value_preview(value, 60),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::markdown());
    println!("{table}");

    Ok(())
}

// Best-effort; an unreadable mtime just drops the suffix.
fn modified_suffix(store: &SettingsStore) -> String {
    let modified = std::fs::metadata(store.settings_path())
        .and_then(|meta| meta.modified())
        .ok();
    match modified {
        Some(time) => format!(" (modified {})", humantime::format_rfc3339_seconds(time)),
        None => String::new(),
    }
}
