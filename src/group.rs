//! Filter group state
//!
//! A `FilterGroup` tracks the currently active selection tokens for one
//! logical group of controls (a checkbox row, a select, a text input) and
//! the logic used to combine multiple simultaneous selections within the
//! group.
//!
//! # Logic modes
//!
//! ```text
//! or     any active token in the group may match (tokens listed separately)
//! and    all active tokens must match (tokens compressed into one compound)
//! ```
//!
//! Under `and` logic, raw toggled tokens are kept in `active_toggles` and
//! compressed into a single [`Selector::Compound`] node, which serializes by
//! concatenation (e.g. `.green` + `.small` becomes `.green.small`).

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseLogicError {
    #[error("Unknown group logic: '{0}'. Valid values are: or, and")]
    UnknownLogic(String),
}

/// Logic used to combine simultaneously active tokens, either within one
/// group or between groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GroupLogic {
    /// Any active token may match.
    Or,
    /// All active tokens must match.
    And,
}

impl FromStr for GroupLogic {
    type Err = ParseLogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "or" => Ok(GroupLogic::Or),
            "and" => Ok(GroupLogic::And),
            _ => Err(ParseLogicError::UnknownLogic(s.to_string())),
        }
    }
}

impl GroupLogic {
    pub fn canonical_name(&self) -> &'static str {
        match self {
            GroupLogic::Or => "or",
            GroupLogic::And => "and",
        }
    }
}

/// One entry in a group's active selection list.
///
/// A `Single` selector is an atomic token; a `Compound` selector is an
/// ordered set of tokens that must all match and which serializes as their
/// direct concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Single(String),
    Compound(Vec<String>),
}

impl Selector {
    /// Serialized string form: identity for a single token, concatenation
    /// with no separator for a compound.
    pub fn flatten(&self) -> String {
        match self {
            Selector::Single(token) => token.clone(),
            Selector::Compound(tokens) => tokens.concat(),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Selector::Single(token) => token.trim().is_empty(),
            Selector::Compound(tokens) => tokens.iter().all(|t| t.trim().is_empty()),
        }
    }
}

/// State holder for one logical group of filter controls.
///
/// Mutated in place by the event/adapter layer; read as an immutable
/// snapshot by the composition engine. Holds no handles to anything
/// external.
#[derive(Debug, Clone)]
pub struct FilterGroup {
    /// Optional identifier for external correlation (e.g. a
    /// `data-filter-group` attribute value).
    pub name: Option<String>,
    logic: GroupLogic,
    active_selectors: Vec<Selector>,
    active_toggles: Vec<String>,
}

impl FilterGroup {
    pub fn new(logic: GroupLogic) -> Self {
        Self {
            name: None,
            logic,
            active_selectors: Vec::new(),
            active_toggles: Vec::new(),
        }
    }

    pub fn named(name: impl Into<String>, logic: GroupLogic) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(logic)
        }
    }

    pub fn logic(&self) -> GroupLogic {
        self.logic
    }

    /// Current selection list. Empty means the group contributes no
    /// constraint and is excluded from composition.
    pub fn active_selectors(&self) -> &[Selector] {
        &self.active_selectors
    }

    /// Raw toggled tokens, prior to AND-compression.
    pub fn active_toggles(&self) -> &[String] {
        &self.active_toggles
    }

    pub fn is_active(&self) -> bool {
        !self.active_selectors.is_empty()
    }

    /// Replace the selection with a single token. Used for exclusive
    /// controls (text value, single-select, radio). An empty token is
    /// accepted; it is dropped later by the engine's path cleaning, so it
    /// effectively clears the constraint.
    pub fn set_single(&mut self, token: impl Into<String>) {
        self.active_toggles.clear();
        self.active_selectors = vec![Selector::Single(token.into())];
    }

    /// Toggle a token on or off. A token already present is removed (first
    /// match only); otherwise it is appended. The selection list is then
    /// recompressed according to the group logic.
    pub fn toggle(&mut self, token: impl Into<String>) {
        let token = token.into();

        if let Some(index) = self.active_toggles.iter().position(|t| *t == token) {
            self.active_toggles.remove(index);
        } else {
            self.active_toggles.push(token);
        }

        self.compress();
    }

    /// Replace all toggled tokens wholesale (e.g. from the full set of
    /// currently checked boxes), applying the same compression rule as
    /// [`FilterGroup::toggle`].
    pub fn set_multiple(&mut self, tokens: impl IntoIterator<Item = impl Into<String>>) {
        self.active_toggles = tokens.into_iter().map(Into::into).collect();
        self.compress();
    }

    /// Reset the group to contributing no constraint.
    pub fn clear(&mut self) {
        self.active_toggles.clear();
        self.active_selectors.clear();
    }

    /// Rebuild `active_selectors` from `active_toggles`.
    ///
    /// Under AND logic the toggles compress into one compound node; with no
    /// toggles the group becomes inactive rather than contributing an empty
    /// compound. Under OR logic the toggles carry over verbatim.
    fn compress(&mut self) {
        match self.logic {
            GroupLogic::And => {
                if self.active_toggles.is_empty() {
                    self.active_selectors.clear();
                } else {
                    self.active_selectors = vec![Selector::Compound(self.active_toggles.clone())];
                }
            }
            GroupLogic::Or => {
                self.active_selectors = self
                    .active_toggles
                    .iter()
                    .cloned()
                    .map(Selector::Single)
                    .collect();
            }
        }
    }
}
