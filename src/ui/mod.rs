use serde_json::Value;
use std::path::PathBuf;
use tabled::Tabled;

// One row of the `show` table.
#[derive(Tabled)]
pub struct SettingRow {
    #[tabled(rename = "KEY")]
    pub key: String,

    #[tabled(rename = "TYPE")]
    pub kind: &'static str,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

/// Helper to convert "~" to the actual home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if !path.starts_with('~') {
        return PathBuf::from(path);
    }

    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        return home;
    }

    // Handle common forms: "~/..." and "~\\...".
    if let Some(rest) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        return home.join(rest);
    }

    PathBuf::from(path)
}

/// Single-line rendering of a value for table cells. Strings are shown
/// bare and everything else as compact JSON. Long values are truncated so
/// a wide array doesn't wreck the layout.
pub fn format_value_preview(value: &Value, max_chars: usize) -> String {
    let rendered = match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    truncate(&rendered, max_chars)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{cut}…")
}
