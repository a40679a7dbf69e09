use crate::group::GroupLogic;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// When the host should recompose the selector from group state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseOn {
    /// Recompose on every control change (real-time filtering).
    Change,
    /// Recompose only on an explicit submit interaction.
    Submit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MultifilterConfig {
    /// Logic combining multiple active tokens inside one group, unless the
    /// group overrides it.
    pub logic_within_groups: GroupLogic,
    /// Logic combining the groups' contributions into the final selector.
    pub logic_between_groups: GroupLogic,
    /// Minimum character count before a text-input value participates as a
    /// filter token. Prevents short fragments with many matches from
    /// triggering composition.
    pub min_search_length: usize,
    /// When the host recomposes: on every change, or only on submit.
    pub parse_on: ParseOn,
    /// Fallback selector substituted when composition yields no constraint.
    pub toggle_default: String,
}

impl Default for MultifilterConfig {
    fn default() -> Self {
        Self {
            logic_within_groups: GroupLogic::Or,
            logic_between_groups: GroupLogic::And,
            min_search_length: 3,
            parse_on: ParseOn::Change,
            toggle_default: "all".to_string(),
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<MultifilterConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(default_config().clone())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<MultifilterConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    toml::from_str::<MultifilterConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}

pub fn default_config() -> &'static MultifilterConfig {
    static DEFAULT_CONFIG: LazyLock<MultifilterConfig> = LazyLock::new(MultifilterConfig::default);
    &DEFAULT_CONFIG
}
