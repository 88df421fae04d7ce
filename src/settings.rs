//! Persisted user settings.
//!
//! Two values survive reloads: whether bionic reading is enabled and the
//! emphasis mode. They are stored as JSON under the keys `bionicEnabled` and
//! `boldCount`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bionic::EmphasisMode;
use crate::error::Result;

/// The persisted settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "bionicEnabled", default)]
    pub enabled: bool,
    #[serde(
        rename = "boldCount",
        default,
        deserialize_with = "deserialize_mode_or_auto"
    )]
    pub bold_count: EmphasisMode,
}

fn deserialize_mode_or_auto<'de, D>(deserializer: D) -> std::result::Result<EmphasisMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(crate::bionic::deserialize_lenient(deserializer)?.unwrap_or_default())
}

/// Storage for [`Settings`].
pub trait SettingsStore {
    /// Load the stored settings; missing values take their defaults.
    fn load(&self) -> Result<Settings>;

    /// Persist `settings`, replacing what was stored.
    fn save(&mut self, settings: &Settings) -> Result<()>;
}

/// Settings held in memory, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    settings: Settings,
}

impl MemoryStore {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Settings> {
        Ok(self.settings)
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        self.settings = *settings;
        Ok(())
    }
}

/// Settings kept in a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileStore {
    fn load(&self) -> Result<Settings> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
                Ok(Settings::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        let json = serde_json::to_vec_pretty(settings)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
