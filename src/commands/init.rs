use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::store::SettingsStore;
use crate::ui;

pub fn run(store: &SettingsStore, dirs: &[String]) -> Result<()> {
    println!("{}", "─".repeat(60).dimmed());
    println!("{}", "Recording input directories".cyan().bold());
    println!("{}", "─".repeat(60).dimmed());

    let dirs: Vec<PathBuf> = dirs.iter().map(|raw| ui::expand_tilde(raw)).collect();

    for dir in &dirs {
        if dir.exists() {
            println!("{} {}", "[*]".blue(), dir.display());
        } else {
            // Recorded anyway; the store does not validate paths.
            eprintln!(
                "{} Directory {} does not exist (recorded anyway).",
                "[!]".yellow(),
                dir.display()
            );
        }
    }

    store.initial_settings(&dirs)?;

    println!();
    println!(
        "{} Recorded {} input directories in {}.",
        "✓".green().bold(),
        dirs.len(),
        store.settings_path().display()
    );

    Ok(())
}
