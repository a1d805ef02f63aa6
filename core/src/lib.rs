//! Core logic for watchmute.
//!
//! Mutes editor file watching, search indexing, and Git/SCM background work
//! by merging fixed overrides into `.vscode/settings.json`, and restores the
//! file byte-for-byte afterwards.
//!
//! - **`toggle`**: [`SettingsToggle`] with `mute`/`restore`
//! - **`overrides`**: the override set merged while muted
//! - **`document`**: fail-soft settings reads, pretty-printed atomic writes
//! - **`config`**: optional `.watchmute.toml` project config
//! - **`paths`**: file locations relative to the project root

pub mod config;
pub mod document;
pub mod overrides;
pub mod paths;
pub mod toggle;

pub use config::{ConfigError, MuteConfig, WatchmuteConfig};
pub use document::{SettingsDocument, read_settings, write_settings};
pub use overrides::{MuteOverrides, ScalarOverride};
pub use paths::SettingsPaths;
pub use toggle::{
    BackupAction, MuteOutcome, RestoreOutcome, SettingsToggle, ToggleError, ToggleState,
};
