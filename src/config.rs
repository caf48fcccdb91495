//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (stock Bugzilla vocabularies)
//! 2. Global config: `$XDG_CONFIG_HOME/bugz/bugz.toml`
//! 3. Environment variables: `BUGZ_*` prefix
//!
//! The grammar and partition layers never read configuration ambiently;
//! the loaded [`Settings`] are passed in explicitly.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::choices::ChoiceTable;
use crate::domain::error::DomainError;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid choice table: {0}")]
    Choices(#[from] DomainError),
}

/// Loaded settings. Tracker installations override the choice vocabularies
/// here; everything else about an invocation comes from the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub choices: ChoiceTable,
}

impl Settings {
    /// Load settings from the default global config location.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(Self::global_config_path().as_deref())
    }

    /// Load settings, reading the given file (if any) over the compiled
    /// defaults, then applying `BUGZ_*` environment overrides.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path.to_path_buf()).required(false));
        }
        let loaded = builder
            .add_source(Environment::with_prefix("BUGZ").separator("__"))
            .build()?;

        let settings: Settings = loaded.try_deserialize()?;
        settings.choices.verify()?;
        Ok(settings)
    }

    /// `$XDG_CONFIG_HOME/bugz/bugz.toml` (platform equivalent elsewhere).
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "bugz").map(|dirs| dirs.config_dir().join("bugz.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_file_when_load_then_compiled_defaults() {
        let settings = Settings::load_from(None).unwrap();
        assert_eq!(settings.choices, ChoiceTable::default());
    }

    #[test]
    fn given_missing_config_file_when_load_then_compiled_defaults() {
        let settings =
            Settings::load_from(Some(Path::new("/nonexistent/bugz.toml"))).unwrap();
        assert_eq!(settings.choices, ChoiceTable::default());
    }
}
