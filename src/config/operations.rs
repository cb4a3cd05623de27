//! Config loading, validation, and credential resolution.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{AppletError, Result};
use secrecy::SecretString;
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppletError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Without one, `zapplet.yaml` in the working
    /// directory is used when present, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let implicit = PathBuf::from(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    log::debug!("loading config from {}", implicit.display());
                    Self::load(&implicit)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| AppletError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `model` must be non-empty
    /// - `api_base` must be an http(s) URL
    /// - `library_dir` must be a non-empty relative name
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(AppletError::Config("model must not be empty".to_string()));
        }

        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(AppletError::Config(format!(
                "api_base must start with http:// or https:// (found '{}')",
                self.api_base
            )));
        }

        let library_dir = self.library_dir.trim();
        if library_dir.is_empty() || Path::new(library_dir).is_absolute() {
            return Err(AppletError::Config(format!(
                "library_dir must be a non-empty relative directory name (found '{}')",
                self.library_dir
            )));
        }

        Ok(())
    }

    /// File name of the rendering library (e.g. `zdog.dist.min.js`).
    pub fn library_file_name(&self) -> String {
        Path::new(&self.library_path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.library_path.clone())
    }

    /// Name file path, or `None` when disabled.
    pub fn name_file_path(&self) -> Option<PathBuf> {
        let trimmed = self.name_file.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}

#[cfg(test)]
impl Config {
    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppletError::Config(format!("failed to serialize config to YAML: {}", e)))
    }
}

/// Resolve the service credential.
///
/// A non-empty `--api-key` override wins; otherwise the configured
/// environment variable is consulted. Blank values count as absent.
pub fn resolve_api_key(override_key: Option<&str>, env_var: &str) -> Option<SecretString> {
    let from_flag = override_key
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string);

    let key = from_flag.or_else(|| {
        std::env::var(env_var)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    })?;

    Some(SecretString::from(key))
}
