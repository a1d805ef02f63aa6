//! The fixed override set applied while muted.

use serde_json::{Map, Value};

/// Nested settings that receive exclusion globs.
pub const EXCLUDE_KEYS: [&str; 2] = ["files.watcherExclude", "search.exclude"];

/// Globs always excluded from watching and search while muted.
pub const DEFAULT_EXCLUDE_GLOBS: [&str; 2] = ["**/node_modules/**", "**/.pnpm/**"];

/// tsserver memory cap (MB) applied with the extras.
const EXTRA_MAX_TS_SERVER_MEMORY: u64 = 1024;

/// A scalar setting forced to a fixed value.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarOverride {
    pub key: &'static str,
    pub value: Value,
}

impl ScalarOverride {
    fn new(key: &'static str, value: impl Into<Value>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Git and SCM flags that stop background refresh and decoration work.
fn scm_overrides() -> Vec<ScalarOverride> {
    vec![
        ScalarOverride::new("git.autorefresh", false),
        ScalarOverride::new("git.autofetch", false),
        ScalarOverride::new("git.decorations.enabled", false),
        ScalarOverride::new("git.countBadge", "off"),
        ScalarOverride::new("scm.diffDecorations", "none"),
    ]
}

fn extra_overrides() -> Vec<ScalarOverride> {
    vec![
        ScalarOverride::new(
            "typescript.tsserver.maxTsServerMemory",
            EXTRA_MAX_TS_SERVER_MEMORY,
        ),
        ScalarOverride::new(
            "typescript.tsserver.experimental.enableProjectDiagnostics",
            false,
        ),
        ScalarOverride::new("eslint.lintTask.enable", false),
    ]
}

/// Everything `mute` merges into the settings document.
#[derive(Debug, Clone, PartialEq)]
pub struct MuteOverrides {
    exclude_globs: Vec<String>,
    scalars: Vec<ScalarOverride>,
}

impl Default for MuteOverrides {
    fn default() -> Self {
        Self {
            exclude_globs: DEFAULT_EXCLUDE_GLOBS.iter().map(ToString::to_string).collect(),
            scalars: scm_overrides(),
        }
    }
}

impl MuteOverrides {
    /// Add the language-tooling extras (tsserver memory cap, diagnostics, lint task).
    #[must_use]
    pub fn with_extras(mut self) -> Self {
        for extra in extra_overrides() {
            if !self.scalars.iter().any(|s| s.key == extra.key) {
                self.scalars.push(extra);
            }
        }
        self
    }

    /// Append project-specific exclusion globs, skipping duplicates.
    #[must_use]
    pub fn with_exclude_globs<I, S>(mut self, globs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for glob in globs {
            let glob = glob.into();
            if !self.exclude_globs.contains(&glob) {
                self.exclude_globs.push(glob);
            }
        }
        self
    }

    #[must_use]
    pub fn exclude_globs(&self) -> &[String] {
        &self.exclude_globs
    }

    #[must_use]
    pub fn scalars(&self) -> &[ScalarOverride] {
        &self.scalars
    }

    /// Merge the overrides into `settings`.
    ///
    /// Existing entries of the nested exclusion maps are kept; a nested key
    /// holding anything other than an object is replaced outright.
    pub fn apply(&self, settings: &mut Map<String, Value>) {
        for key in EXCLUDE_KEYS {
            // Mutate in place so the key keeps its position in the file.
            let entry = settings
                .entry(key)
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(merged) = entry {
                for glob in &self.exclude_globs {
                    merged.insert(glob.clone(), Value::Bool(true));
                }
            }
        }

        for scalar in &self.scalars {
            settings.insert(scalar.key.to_string(), scalar.value.clone());
        }
    }
}
