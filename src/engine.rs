//! Host harness owning the filter groups
//!
//! [`Multifilter`] is the consumer-facing surface: it owns the ordered
//! group list and the configuration, routes control events to groups by
//! name, and wraps the pure composition functions with the configured
//! fallback selector. The composition itself stays in [`crate::compose`]
//! and is side-effect free.

use crate::compose::{build_selector, compose_paths};
use crate::config::MultifilterConfig;
use crate::events::{ControlEvent, apply_event};
use crate::group::{FilterGroup, GroupLogic};

#[derive(Debug)]
pub struct Multifilter {
    config: MultifilterConfig,
    groups: Vec<FilterGroup>,
}

impl Multifilter {
    pub fn new(config: MultifilterConfig) -> Self {
        Self {
            config,
            groups: Vec::new(),
        }
    }

    pub fn config(&self) -> &MultifilterConfig {
        &self.config
    }

    pub fn groups(&self) -> &[FilterGroup] {
        &self.groups
    }

    /// Append a group. Groups keep their insertion order for composition.
    pub fn add_group(&mut self, group: FilterGroup) {
        self.groups.push(group);
    }

    /// Create and append a named group using the configured default
    /// intra-group logic, returning a handle to it.
    pub fn add_named_group(&mut self, name: impl Into<String>) -> &mut FilterGroup {
        let group = FilterGroup::named(name, self.config.logic_within_groups);
        self.groups.push(group);
        self.groups.last_mut().expect("group was just pushed")
    }

    pub fn group(&self, name: &str) -> Option<&FilterGroup> {
        self.groups
            .iter()
            .find(|group| group.name.as_deref() == Some(name))
    }

    pub fn group_mut(&mut self, name: &str) -> Option<&mut FilterGroup> {
        self.groups
            .iter_mut()
            .find(|group| group.name.as_deref() == Some(name))
    }

    /// Route a control event to the named group. Returns `false` when no
    /// group carries that name.
    pub fn handle_event(&mut self, group_name: &str, event: ControlEvent) -> bool {
        let Some(index) = self
            .groups
            .iter()
            .position(|group| group.name.as_deref() == Some(group_name))
        else {
            return false;
        };

        apply_event(&mut self.groups[index], event, &self.config);
        true
    }

    /// Programmatically replace a named group's active tokens, applying the
    /// group's own compression rules. Returns `false` when the group does
    /// not exist.
    pub fn set_group_selectors(
        &mut self,
        group_name: &str,
        tokens: impl IntoIterator<Item = impl Into<String>>,
    ) -> bool {
        match self.group_mut(group_name) {
            Some(group) => {
                group.set_multiple(tokens);
                true
            }
            None => false,
        }
    }

    /// Flattened selector strings currently active in a named group.
    pub fn get_group_selectors(&self, group_name: &str) -> Option<Vec<String>> {
        self.group(group_name).map(|group| {
            group
                .active_selectors()
                .iter()
                .map(|selector| selector.flatten())
                .collect()
        })
    }

    /// Clear every group, as a form reset does.
    pub fn reset(&mut self) {
        for group in &mut self.groups {
            group.clear();
        }
    }

    /// Expand the current state into selector paths.
    pub fn compose_paths(&self) -> Vec<Vec<String>> {
        compose_paths(&self.groups)
    }

    /// Compose the raw selector string, empty when nothing is active.
    pub fn compose_selector(&self) -> String {
        self.compose_selector_with(self.config.logic_between_groups)
    }

    /// Compose the raw selector under an explicit inter-group logic,
    /// overriding the configured one.
    pub fn compose_selector_with(&self, between_logic: GroupLogic) -> String {
        build_selector(&self.compose_paths(), between_logic)
    }

    /// Compose the selector the host should apply: the raw selector, or the
    /// configured `toggle_default` when no group contributes a constraint.
    pub fn compose(&self) -> String {
        let selector = self.compose_selector();

        if selector.is_empty() {
            self.config.toggle_default.clone()
        } else {
            selector
        }
    }
}

impl Default for Multifilter {
    fn default() -> Self {
        Self::new(MultifilterConfig::default())
    }
}
