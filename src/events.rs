//! Control event dispatch
//!
//! Adapters translate raw UI interactions into [`ControlEvent`] values with
//! the token strings already extracted; [`apply_event`] maps each variant
//! onto the corresponding [`FilterGroup`] operation. An explicit enum keeps
//! the dispatch exhaustive instead of assembling handler names from event
//! type strings.

use crate::config::MultifilterConfig;
use crate::group::FilterGroup;

/// A UI interaction reduced to the token values it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// An exclusive filter control was activated (e.g. a radio-style
    /// button); its token replaces the group's selection.
    Filter(String),
    /// A toggle control flipped; its token toggles in the group.
    Toggle(String),
    /// A text or search input changed value.
    TextInput(String),
    /// A single-select or radio input changed value.
    SingleSelect(String),
    /// The full set of checked values in a multi-select or checkbox row.
    MultiSelect(Vec<String>),
    /// The owning form was reset.
    Reset,
}

/// Apply one control event to its group.
///
/// Text input is subject to `config.min_search_length`: values shorter than
/// the minimum are treated as an empty value so that incomplete words do
/// not constrain the selection.
pub fn apply_event(group: &mut FilterGroup, event: ControlEvent, config: &MultifilterConfig) {
    match event {
        ControlEvent::Filter(token) | ControlEvent::SingleSelect(token) => {
            group.set_single(token);
        }
        ControlEvent::Toggle(token) => {
            group.toggle(token);
        }
        ControlEvent::TextInput(value) => {
            if value.chars().count() < config.min_search_length {
                group.set_single("");
            } else {
                group.set_single(value);
            }
        }
        ControlEvent::MultiSelect(values) => {
            group.set_multiple(values);
        }
        ControlEvent::Reset => {
            group.clear();
        }
    }
}

/// Counts form-level events (reset/submit) across the groups bound to one
/// form, so the host recomposes once per form interaction rather than once
/// per group.
///
/// Created on the first form event with the number of groups bound to that
/// form; the owner drops it once [`FormEventTracker::note_handled`] reports
/// completion.
#[derive(Debug)]
pub struct FormEventTracker {
    total_bound: usize,
    total_handled: usize,
}

impl FormEventTracker {
    pub fn new(total_bound: usize) -> Self {
        Self {
            total_bound,
            total_handled: 0,
        }
    }

    pub fn total_bound(&self) -> usize {
        self.total_bound
    }

    pub fn total_handled(&self) -> usize {
        self.total_handled
    }

    /// Record one group having handled the form event. Returns `true` when
    /// every bound group has reported in and the tracker should be
    /// discarded.
    pub fn note_handled(&mut self) -> bool {
        self.total_handled += 1;
        self.total_handled >= self.total_bound
    }
}
