//! Reading and writing the editor settings document.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, warn};
use watchmute_utils::{AtomicWriteOptions, PersistMode, atomic_write_with_options, existing_mode};

use crate::toggle::ToggleError;

/// Editor settings as a JSON object, in file order.
pub type SettingsDocument = Map<String, Value>;

/// Load the settings file, treating anything unusable as an empty document.
///
/// Missing or unreadable files and content that is not a JSON object all
/// yield an empty map.
#[must_use]
pub fn read_settings(path: &Path) -> SettingsDocument {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No settings file; starting from empty settings");
            return Map::new();
        }
        Err(err) => {
            warn!(path = %path.display(), "Failed to read settings file, discarding it: {err}");
            return Map::new();
        }
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            warn!(
                path = %path.display(),
                kind = json_kind(&other),
                "Settings file is not a JSON object; discarding it"
            );
            Map::new()
        }
        Err(err) => {
            warn!(path = %path.display(), "Failed to parse settings file, discarding it: {err}");
            Map::new()
        }
    }
}

/// Write `settings` pretty-printed (2-space indent), creating parent directories.
pub fn write_settings(path: &Path, settings: &SettingsDocument) -> Result<(), ToggleError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ToggleError::Io {
            action: "create directory",
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let rendered = serde_json::to_string_pretty(settings)?;
    write_bytes(path, rendered.as_bytes(), existing_mode(path))
}

/// Atomically replace `path` with `bytes` using the given permission policy.
pub(crate) fn write_bytes(path: &Path, bytes: &[u8], mode: PersistMode) -> Result<(), ToggleError> {
    let options = AtomicWriteOptions {
        mode,
        ..AtomicWriteOptions::default()
    };
    atomic_write_with_options(path, bytes, options).map_err(|source| ToggleError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
