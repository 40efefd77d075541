use crate::error::{PatternError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings shared by the showcases. Every field has a default, so an empty
/// file (or no file at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Capitals file for the injected record finder. The bundled data set is
    /// used when this is unset.
    pub capitals_path: Option<PathBuf>,
    pub tea_volume_ml: u32,
    pub coffee_volume_ml: u32,
    pub html_indent: usize,
    pub color: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            capitals_path: None,
            tea_volume_ml: 200,
            coffee_volume_ml: 50,
            html_indent: 2,
            color: true,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| PatternError::io(path, err))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Loads `path` when given, otherwise falls back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
