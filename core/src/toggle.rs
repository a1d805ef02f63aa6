//! Mute and restore of the editor settings file.
//!
//! The toggle keeps no state of its own: the backup file next to
//! `settings.json` is the on/off flag, so the state survives across separate
//! process invocations.
//!
//! ```text
//!            mute (backup created)
//!  Unmuted ───────────────────────▶ Muted ──┐ mute (backup kept,
//!     ▲                               │     │ overrides re-applied)
//!     └───────────────────────────────┘ ◀───┘
//!            restore (backup copied back, then deleted)
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use watchmute_utils::existing_mode;

use crate::document::{read_settings, write_bytes, write_settings};
use crate::overrides::MuteOverrides;
use crate::paths::SettingsPaths;

#[derive(Debug, Error)]
pub enum ToggleError {
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Whether the overrides are currently in effect, as recorded on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Muted,
    Unmuted,
}

/// What `mute` did with the backup file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupAction {
    /// The settings file was copied to the backup path.
    Created,
    /// A backup from an earlier mute was left untouched.
    KeptExisting,
    /// There was no settings file to back up.
    NoSettingsFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuteOutcome {
    pub backup: BackupAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    Restored,
    /// Nothing to restore; no file was touched.
    NoBackup,
}

#[derive(Debug, Clone)]
pub struct SettingsToggle {
    paths: SettingsPaths,
    overrides: MuteOverrides,
}

impl SettingsToggle {
    #[must_use]
    pub fn new(paths: SettingsPaths, overrides: MuteOverrides) -> Self {
        Self { paths, overrides }
    }

    #[must_use]
    pub fn paths(&self) -> &SettingsPaths {
        &self.paths
    }

    #[must_use]
    pub fn state(&self) -> ToggleState {
        if self.paths.backup().exists() {
            ToggleState::Muted
        } else {
            ToggleState::Unmuted
        }
    }

    /// Back up the settings (once per cycle) and merge the overrides into them.
    pub fn mute(&self) -> Result<MuteOutcome, ToggleError> {
        let settings_path = self.paths.settings();
        let backup_path = self.paths.backup();

        let backup = if backup_path.exists() {
            debug!(path = %backup_path.display(), "Backup already present; keeping it");
            BackupAction::KeptExisting
        } else if settings_path.exists() {
            copy_file(settings_path, backup_path)?;
            info!(
                from = %settings_path.display(),
                to = %backup_path.display(),
                "Backed up editor settings"
            );
            BackupAction::Created
        } else {
            BackupAction::NoSettingsFile
        };

        let mut settings = read_settings(settings_path);
        self.overrides.apply(&mut settings);
        write_settings(settings_path, &settings)?;
        debug!(
            path = %settings_path.display(),
            keys = settings.len(),
            "Wrote muted settings"
        );

        Ok(MuteOutcome { backup })
    }

    /// Put the pre-mute settings back and drop the backup.
    pub fn restore(&self) -> Result<RestoreOutcome, ToggleError> {
        let settings_path = self.paths.settings();
        let backup_path = self.paths.backup();

        if !backup_path.exists() {
            debug!(path = %backup_path.display(), "No backup to restore");
            return Ok(RestoreOutcome::NoBackup);
        }

        let original = fs::read(backup_path).map_err(|source| ToggleError::Io {
            action: "read",
            path: backup_path.to_path_buf(),
            source,
        })?;
        // Permissions come from the backup, which `fs::copy` took from the pre-mute file.
        write_bytes(settings_path, &original, existing_mode(backup_path))?;
        fs::remove_file(backup_path).map_err(|source| ToggleError::Io {
            action: "remove",
            path: backup_path.to_path_buf(),
            source,
        })?;
        info!(path = %settings_path.display(), "Restored editor settings from backup");

        Ok(RestoreOutcome::Restored)
    }
}

fn copy_file(from: &Path, to: &Path) -> Result<(), ToggleError> {
    fs::copy(from, to)
        .map(|_| ())
        .map_err(|source| ToggleError::Io {
            action: "copy",
            path: from.to_path_buf(),
            source,
        })
}
