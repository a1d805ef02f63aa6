use std::path::{Path, PathBuf};

/// Editor settings directory, relative to the project root.
pub const SETTINGS_DIR: &str = ".vscode";
pub const SETTINGS_FILE: &str = "settings.json";
pub const BACKUP_FILE: &str = "settings.before-install.json";
/// Optional project-level configuration, relative to the project root.
pub const CONFIG_FILE: &str = ".watchmute.toml";

/// Resolved locations of every file the toggle touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPaths {
    root: PathBuf,
    settings: PathBuf,
    backup: PathBuf,
}

impl SettingsPaths {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let dir = root.join(SETTINGS_DIR);
        Self {
            settings: dir.join(SETTINGS_FILE),
            backup: dir.join(BACKUP_FILE),
            root,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn settings(&self) -> &Path {
        &self.settings
    }

    /// Pre-mute copy of the settings file. Its presence means "muted".
    #[must_use]
    pub fn backup(&self) -> &Path {
        &self.backup
    }

    #[must_use]
    pub fn config(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }
}
