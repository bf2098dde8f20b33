use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::SettingsError;
use crate::models::{json_type_name, SettingKey, SettingsDocument};

/// Default location of the settings file, relative to the working directory.
pub fn default_settings_path() -> PathBuf {
    PathBuf::from("./files/settings.json")
}

/// Persists a settings document to a single JSON file and reads it back.
///
/// Every operation opens and closes the file on its own; no handle or
/// cached state survives between calls. Writes are plain overwrites, so
/// concurrent writers are not protected against and the last write wins.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    name: String,
    settings_path: PathBuf,
}

impl SettingsStore {
    /// Store operating on [`default_settings_path`].
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_path(name, default_settings_path())
    }

    /// Store operating on an explicit settings file, so tests and embedders
    /// can point instances at isolated locations.
    pub fn with_path(name: impl Into<String>, settings_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            settings_path: settings_path.into(),
        }
    }

    /// Identifying name given at construction. Not used by persistence.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Reads the settings file and parses it into the full document.
    ///
    /// Fails with [`SettingsError::NotFound`] if the file does not exist
    /// (reading never falls back to an empty document) and with
    /// [`SettingsError::Malformed`] if the contents are not a JSON object.
    pub fn read_config(&self) -> Result<SettingsDocument, SettingsError> {
        let raw = match fs::read(&self.settings_path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                return Err(SettingsError::NotFound {
                    path: self.settings_path.clone(),
                })
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.settings_path.clone(),
                    source,
                })
            }
        };

        // Parsed from raw bytes so that non-UTF-8 contents count as a
        // parse failure, not an I/O failure.
        serde_json::from_slice(&raw).map_err(|source| SettingsError::Malformed {
            path: self.settings_path.clone(),
            source,
        })
    }

    /// Writes `document` as the entire settings file, pretty-printed.
    ///
    /// Creates the parent directory if needed and overwrites any existing
    /// file unconditionally; there is no merge with what was on disk.
    pub fn store_config(&self, document: &SettingsDocument) -> Result<(), SettingsError> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let raw = render_pretty(document)?;
        fs::write(&self.settings_path, raw).map_err(|source| SettingsError::Io {
            path: self.settings_path.clone(),
            source,
        })
    }

    /// Value stored under `key`, or `Ok(None)` if the key is unset.
    ///
    /// Reads the whole document, so a missing settings file is still
    /// [`SettingsError::NotFound`]; only an absent *key* yields the `None`
    /// sentinel. A stored JSON `null` comes back as `Some(Value::Null)`.
    pub fn get_option(&self, key: &str) -> Result<Option<Value>, SettingsError> {
        let mut document = self.read_config()?;
        Ok(document.remove(key))
    }

    /// Assigns `key` in the current document and rewrites the file.
    ///
    /// A missing settings file is treated as an empty document first, which
    /// makes this the call that creates the file on first use. A present
    /// but malformed file still fails.
    pub fn set_option(&self, key: &str, value: impl Into<Value>) -> Result<(), SettingsError> {
        let mut document = match self.read_config() {
            Ok(document) => document,
            Err(SettingsError::NotFound { .. }) => SettingsDocument::new(),
            Err(err) => return Err(err),
        };
        document.insert(key.to_string(), value.into());
        self.store_config(&document)
    }

    /// Seeds the `input_dirs` key with the string form of each given path.
    pub fn initial_settings<I, P>(&self, input_dirs: I) -> Result<(), SettingsError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let dirs: Vec<String> = input_dirs
            .into_iter()
            .map(|dir| path_string(dir.as_ref()))
            .collect();
        self.set_option(SettingKey::InputDirs.as_str(), dirs)
    }

    /// The recorded input directories as paths, in stored order.
    ///
    /// An unset `input_dirs` yields an empty vector, not an error; a value
    /// that is not an array of strings is [`SettingsError::UnexpectedType`].
    pub fn files_path(&self) -> Result<Vec<PathBuf>, SettingsError> {
        let key = SettingKey::InputDirs;
        match self.get_option(key.as_str())? {
            None => Ok(Vec::new()),
            Some(Value::Array(entries)) => entries
                .iter()
                .map(|entry| match entry {
                    Value::String(dir) => Ok(PathBuf::from(dir)),
                    other => Err(unexpected(key, "an array of strings", other)),
                })
                .collect(),
            Some(other) => Err(unexpected(key, "an array of strings", &other)),
        }
    }

    /// The recorded result directory, defaulting to `.` when unset.
    ///
    /// A stored `null` or empty string counts as unset.
    pub fn result_path(&self) -> Result<PathBuf, SettingsError> {
        let key = SettingKey::ResultDir;
        match self.get_option(key.as_str())? {
            None | Some(Value::Null) => Ok(PathBuf::from(".")),
            Some(Value::String(dir)) if dir.is_empty() => Ok(PathBuf::from(".")),
            Some(Value::String(dir)) => Ok(PathBuf::from(dir)),
            Some(other) => Err(unexpected(key, "a string", &other)),
        }
    }
}

fn unexpected(key: SettingKey, expected: &'static str, found: &Value) -> SettingsError {
    SettingsError::UnexpectedType {
        key: key.as_str().to_string(),
        expected,
        found: json_type_name(found),
    }
}

// The file format is four-space-indented JSON; serde_json's default
// pretty printer indents by two, so the formatter is set up by hand.
fn render_pretty(document: &SettingsDocument) -> Result<Vec<u8>, SettingsError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    Ok(buf)
}

/// String form of a path as recorded in the document: `.` components are
/// dropped (`./input/dir1` becomes `input/dir1`) and an empty path is `.`.
fn path_string(path: &Path) -> String {
    let trimmed: PathBuf = path
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();
    if trimmed.as_os_str().is_empty() {
        ".".to_string()
    } else {
        trimmed.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_string_drops_dot_components() {
        assert_eq!(path_string(Path::new("./input/dir1")), "input/dir1");
        assert_eq!(path_string(Path::new("input/./dir2")), "input/dir2");
        assert_eq!(path_string(Path::new("input//dir3/")), "input/dir3");
    }

    #[test]
    fn path_string_keeps_parent_and_root_components() {
        assert_eq!(path_string(Path::new("../shared")), "../shared");
        assert_eq!(path_string(Path::new("/var/data")), "/var/data");
    }

    #[test]
    fn path_string_of_bare_dot_is_dot() {
        assert_eq!(path_string(Path::new(".")), ".");
        assert_eq!(path_string(Path::new("")), ".");
    }

    #[test]
    fn render_pretty_uses_four_space_indent() {
        let mut document = SettingsDocument::new();
        document.insert("name".to_string(), Value::String("student1".to_string()));
        let raw = String::from_utf8(render_pretty(&document).unwrap()).unwrap();
        assert_eq!(raw, "{\n    \"name\": \"student1\"\n}");
    }
}
