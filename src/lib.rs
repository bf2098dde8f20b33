//! Store and retrieve named settings in a single JSON file.
//!
//! The core is [`SettingsStore`]: a thin read-modify-write wrapper around
//! one pretty-printed JSON object on disk, with typed accessors for the
//! well-known `input_dirs` and `result_dir` keys. The companion `setman`
//! binary fronts the same API with subcommands.
//!
//! ```rust,no_run
//! use setman::{SettingKey, SettingsStore};
//!
//! # fn main() -> Result<(), setman::SettingsError> {
//! let store = SettingsStore::new("student1");
//! store.initial_settings(["./input/dir1", "./input/dir2"])?;
//! store.set_option(SettingKey::ResultDir.as_str(), "./output/results")?;
//!
//! let inputs = store.files_path()?; // [input/dir1, input/dir2]
//! let result = store.result_path()?; // ./output/results
//! println!("{} inputs, results in {}", inputs.len(), result.display());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod ui;

pub use error::SettingsError;
pub use models::{SettingKey, SettingsDocument};
pub use store::{default_settings_path, SettingsStore};
