use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{fs, path::Path};

/// File-based synthesizer configuration.
///
/// Table entries are merged over the built-in ones; caps may only lower the hard
/// limits of 5 managers and 10 suppliers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesizerConfig {
    /// maximum number of manager notifier nodes, range [1, 5]
    pub manager_cap: Option<usize>,
    /// maximum number of supplier notifier nodes, range [1, 10]
    pub supplier_cap: Option<usize>,
    /// industry key -> description
    pub industries: BTreeMap<String, String>,
    /// response time code -> phrase
    pub response_times: BTreeMap<String, String>,
}

impl SynthesizerConfig {
    pub fn from_file<T: AsRef<Path>>(path: T) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::load_from_str(&data)
    }

    pub fn load_from_str(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str::<SynthesizerConfig>(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
