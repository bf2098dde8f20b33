use std::fmt;
use std::path::PathBuf;

use serde_json::Value;

use crate::store::default_settings_path;

/// The full settings mapping as persisted: string keys to arbitrary JSON
/// values. Key order is irrelevant; keys are unique.
pub type SettingsDocument = serde_json::Map<String, Value>;

/// The closed set of keys with dedicated typed accessors. Any other key can
/// still be stored and read through the generic string-keyed API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    ResultDir,
    InputDirs,
    Name,
}

impl SettingKey {
    /// The literal key name as it appears in the settings file.
    pub const fn as_str(self) -> &'static str {
        match self {
            SettingKey::ResultDir => "result_dir",
            SettingKey::InputDirs => "input_dirs",
            SettingKey::Name => "name",
        }
    }

    /// Looks up a known key by its literal name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "result_dir" => Some(SettingKey::ResultDir),
            "input_dirs" => Some(SettingKey::InputDirs),
            "name" => Some(SettingKey::Name),
            _ => None,
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short name for a JSON value's type, used in error messages and the
/// `show` table.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Settings file the CLI operates on unless `--file` overrides it.
    pub settings_file: PathBuf,
    /// Identifying name given to stores the CLI constructs.
    pub store_name: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            settings_file: default_settings_path(),
            store_name: "default".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_key_names_round_trip() {
        for key in [SettingKey::ResultDir, SettingKey::InputDirs, SettingKey::Name] {
            assert_eq!(SettingKey::from_name(key.as_str()), Some(key));
        }
        assert_eq!(SettingKey::from_name("unknown"), None);
    }
}
