use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value;

use crate::models::SettingKey;
use crate::store::SettingsStore;

pub fn run(store: &SettingsStore, key: &str, raw: &str, json: bool) -> Result<()> {
    let value = if json {
        serde_json::from_str::<Value>(raw)
            .with_context(|| format!("Failed to parse value as JSON: {raw}"))?
    } else {
        Value::String(raw.to_string())
    };

    advise_on_known_key_shape(key, &value);

    store.set_option(key, value)?;

    println!(
        "{} Set '{}' in {}.",
        "✓".green(),
        key,
        store.settings_path().display()
    );

    Ok(())
}

// Known keys have expected shapes, but values are stored as given either
// way; the store does not validate.
fn advise_on_known_key_shape(key: &str, value: &Value) {
    let note = match SettingKey::from_name(key) {
        Some(SettingKey::ResultDir) | Some(SettingKey::Name) => {
            (!value.is_string()).then_some("a string")
        }
        Some(SettingKey::InputDirs) => {
            let is_string_array = value
                .as_array()
                .is_some_and(|entries| entries.iter().all(Value::is_string));
            (!is_string_array).then_some("an array of strings")
        }
        None => None,
    };

    if let Some(expected) = note {
        eprintln!(
            "{} Known key '{}' normally holds {}; stored as given.",
            "[i]".blue(),
            key,
            expected
        );
    }
}
