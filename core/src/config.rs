use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::overrides::MuteOverrides;

/// Project-level settings read from `.watchmute.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatchmuteConfig {
    pub mute: Option<MuteConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MuteConfig {
    /// Also apply the TypeScript/ESLint overrides.
    #[serde(default)]
    pub extras: bool,
    /// Extra globs added to `files.watcherExclude` and `search.exclude`.
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl WatchmuteConfig {
    /// Load the config at `path`. A missing file is `Ok(None)`.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::debug!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::debug!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Build the override set this config asks for.
    ///
    /// `force_extras` comes from the command line and wins over the file.
    #[must_use]
    pub fn overrides(&self, force_extras: bool) -> MuteOverrides {
        let mut overrides = MuteOverrides::default();
        let mute = self.mute.as_ref();

        if force_extras || mute.is_some_and(|m| m.extras) {
            overrides = overrides.with_extras();
        }
        if let Some(mute) = mute {
            overrides = overrides.with_exclude_globs(mute.exclude.iter().cloned());
        }
        overrides
    }
}
