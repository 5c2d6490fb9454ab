//! File-backed settings store.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{ApiConfig, AppError};
use crate::ports::SettingsStore;

/// On-disk layout of the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    /// Platform options (`github_repo_url`, `github_personal_access_token`).
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    /// GitHub API configuration.
    #[serde(default)]
    pub api: ApiConfig,
}

impl SettingsFile {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let file: SettingsFile = toml::from_str(content)?;
        file.api.validate()?;
        Ok(file)
    }
}

/// Settings stored in a TOML file; every `set` rewrites the file.
#[derive(Debug)]
pub struct TomlSettingsStore {
    path: PathBuf,
    file: SettingsFile,
}

impl TomlSettingsStore {
    /// Load `path`, or start empty when it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let file = if path.exists() {
            SettingsFile::parse(&fs::read_to_string(&path)?)?
        } else {
            SettingsFile::default()
        };

        Ok(Self { path, file })
    }

    pub fn api_config(&self) -> &ApiConfig {
        &self.file.api
    }

    fn persist(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string_pretty(&self.file)?)?;
        Ok(())
    }
}

impl SettingsStore for TomlSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.file.options.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.file.options.insert(key.to_string(), value.to_string());
        self.persist()
    }
}
