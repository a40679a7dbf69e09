//! Declarative group-state files
//!
//! The CLI takes a JSON5 document describing each group and its currently
//! active selections, standing in for the live UI state an adapter layer
//! would otherwise supply:
//!
//! ```json5
//! {
//!     // optional, overrides the configured inter-group logic
//!     logic_between_groups: "or",
//!     groups: [
//!         { name: "color", toggles: [".red", ".blue"] },
//!         { name: "size", logic: "and", toggles: [".small", ".wide"] },
//!         { name: "search", single: ".apple" },
//!     ],
//! }
//! ```

use crate::config::MultifilterConfig;
use crate::group::{FilterGroup, GroupLogic};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("Failed to read state file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse state file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: json5::Error,
    },
}

/// Declared state of one group.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GroupState {
    pub name: Option<String>,
    /// Overrides the configured default intra-group logic.
    pub logic: Option<GroupLogic>,
    /// Exclusive value (text input, single-select). Takes precedence over
    /// `toggles` when both are given.
    pub single: Option<String>,
    /// Currently toggled/checked tokens.
    pub toggles: Vec<String>,
}

/// Declared state of the whole filter UI.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FilterState {
    pub logic_between_groups: Option<GroupLogic>,
    pub groups: Vec<GroupState>,
}

impl FilterState {
    /// Materialize the declared groups, filling unset logic from config.
    pub fn build_groups(&self, config: &MultifilterConfig) -> Vec<FilterGroup> {
        self.groups
            .iter()
            .map(|state| {
                let logic = state.logic.unwrap_or(config.logic_within_groups);
                let mut group = match &state.name {
                    Some(name) => FilterGroup::named(name, logic),
                    None => FilterGroup::new(logic),
                };

                if let Some(single) = &state.single {
                    group.set_single(single);
                } else if !state.toggles.is_empty() {
                    group.set_multiple(state.toggles.iter().cloned());
                }

                group
            })
            .collect()
    }

    /// Inter-group logic to compose with, preferring the file's override.
    pub fn between_logic(&self, config: &MultifilterConfig) -> GroupLogic {
        self.logic_between_groups
            .unwrap_or(config.logic_between_groups)
    }
}

pub fn load_state_from_path(path: &Path) -> Result<FilterState, StateError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| StateError::Read {
        path: path_display.clone(),
        source,
    })?;

    json5::from_str::<FilterState>(&raw).map_err(|source| StateError::Parse {
        path: path_display,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_state() {
        let state: FilterState =
            json5::from_str(r#"{ groups: [{ name: "color", toggles: [".red"] }] }"#)
                .expect("valid state");

        assert_eq!(state.groups.len(), 1);
        assert_eq!(state.groups[0].name.as_deref(), Some("color"));
        assert_eq!(state.groups[0].toggles, vec![".red"]);
    }

    #[test]
    fn test_build_groups_uses_config_default_logic() {
        let state: FilterState = json5::from_str(
            r#"{
                groups: [
                    { name: "color", toggles: [".red", ".blue"] },
                    { name: "size", logic: "and", toggles: [".small", ".wide"] },
                ],
            }"#,
        )
        .expect("valid state");

        let config = MultifilterConfig::default();
        let groups = state.build_groups(&config);

        assert_eq!(groups[0].logic(), GroupLogic::Or);
        assert_eq!(groups[1].logic(), GroupLogic::And);
        assert_eq!(groups[0].active_selectors().len(), 2);
        // AND group compresses into one compound selector
        assert_eq!(groups[1].active_selectors().len(), 1);
        assert_eq!(groups[1].active_selectors()[0].flatten(), ".small.wide");
    }

    #[test]
    fn test_single_takes_precedence_over_toggles() {
        let state: FilterState = json5::from_str(
            r#"{ groups: [{ name: "search", single: ".apple", toggles: [".ignored"] }] }"#,
        )
        .expect("valid state");

        let groups = state.build_groups(&MultifilterConfig::default());

        assert_eq!(groups[0].active_selectors()[0].flatten(), ".apple");
    }

    #[test]
    fn test_between_logic_override() {
        let state: FilterState =
            json5::from_str(r#"{ logic_between_groups: "or", groups: [] }"#).expect("valid state");

        let config = MultifilterConfig::default();
        assert_eq!(state.between_logic(&config), GroupLogic::Or);

        let empty = FilterState::default();
        assert_eq!(empty.between_logic(&config), GroupLogic::And);
    }
}
