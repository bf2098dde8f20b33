use anyhow::Result;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;

use crate::models::CliConfig;
use crate::ui;

fn config_file_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("setman").join("config.toml")
}

/// Loads the tool configuration, writing the defaults on first run.
pub fn load_config() -> Result<CliConfig> {
    let path = config_file_path();

    if path.exists() {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let cfg: CliConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config TOML: {}", path.display()))?;
        return Ok(cfg);
    }

    let cfg = CliConfig::default();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let raw = toml::to_string_pretty(&cfg).context("Failed to serialize default config")?;
    fs::write(&path, raw)
        .with_context(|| format!("Failed to write default config: {}", path.display()))?;

    Ok(cfg)
}

/// Settings file the CLI should operate on: an explicit `--file` argument
/// wins over the configured default. Tilde is expanded in the argument.
pub fn resolve_settings_file(flag: Option<&str>, config: &CliConfig) -> PathBuf {
    match flag {
        Some(raw) => ui::expand_tilde(raw),
        None => config.settings_file.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_configured_settings_file() {
        let config = CliConfig {
            settings_file: PathBuf::from("./files/settings.json"),
            store_name: "default".to_string(),
        };
        let resolved = resolve_settings_file(Some("./elsewhere/custom.json"), &config);
        assert_eq!(resolved, PathBuf::from("./elsewhere/custom.json"));
    }

    #[test]
    fn configured_settings_file_used_without_flag() {
        let config = CliConfig::default();
        let resolved = resolve_settings_file(None, &config);
        assert_eq!(resolved, PathBuf::from("./files/settings.json"));
    }
}
