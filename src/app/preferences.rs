use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{domain::weather::UnitSystem, error::PreferenceError};

const FILE_NAME: &str = "preferences.json";

/// The persisted subset of dashboard state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub units: UnitSystem,
    #[serde(rename = "lastCity", default)]
    pub last_city: Option<String>,
}

/// Best-effort JSON store for [`Preferences`]. A store without a path keeps
/// nothing and always loads defaults.
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
}

impl PreferenceStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Store in the user config directory, or a disabled store when none can be found.
    #[must_use]
    pub fn from_env() -> Self {
        config_dir().map_or_else(Self::disabled, |dir| Self::at(dir.join(FILE_NAME)))
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Saved preferences, or defaults when nothing usable is on disk.
    #[must_use]
    pub fn load(&self) -> Preferences {
        match self.try_load() {
            Ok(Some(preferences)) => preferences,
            Ok(None) => Preferences::default(),
            Err(err) => {
                warn!(error = %err, "ignoring saved preferences");
                Preferences::default()
            }
        }
    }

    pub fn try_load(&self) -> Result<Option<Preferences>, PreferenceError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Overwrites the stored record. Failures are logged and otherwise ignored.
    pub fn save(&self, preferences: &Preferences) {
        let Some(path) = &self.path else {
            return;
        };
        match write_preferences(path, preferences) {
            Ok(()) => debug!(path = %path.display(), "preferences saved"),
            Err(err) => warn!(path = %path.display(), error = %err, "saving preferences failed"),
        }
    }
}

fn write_preferences(path: &Path, preferences: &Preferences) -> Result<(), PreferenceError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let payload = serde_json::to_string_pretty(preferences)?;
    fs::write(path, payload)?;
    Ok(())
}

/// `$WEATHERWISE_CONFIG_DIR`, else `$HOME/.config/weatherwise`.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("WEATHERWISE_CONFIG_DIR") {
        return Some(PathBuf::from(base));
    }
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".config").join("weatherwise"))
}
