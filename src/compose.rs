//! Selector composition engine
//!
//! Pure functions that turn a snapshot of [`FilterGroup`] state into one
//! compound selector string:
//!
//! 1. [`compose_paths`] expands the Cartesian product of every active
//!    group's selections into a list of paths, one entry per active group.
//! 2. [`build_selector`] serializes the paths into a single string under
//!    the configured inter-group logic.
//!
//! [`compose`] chains the two. Nothing here mutates group state or caches
//! results; callers may invoke these as often as they like on the current
//! snapshot.

use crate::group::{FilterGroup, GroupLogic, Selector};

/// Expand the active groups into all selector paths.
///
/// Groups with no active selections are skipped. Each path picks exactly one
/// selection per surviving group, in input group order, with compound
/// selections flattened to their concatenated form and blank elements
/// removed. Paths are produced in nested-loop order: the first group varies
/// slowest, the last group fastest.
pub fn compose_paths(groups: &[FilterGroup]) -> Vec<Vec<String>> {
    let matrix: Vec<&[Selector]> = groups
        .iter()
        .filter(|group| group.is_active())
        .map(|group| group.active_selectors())
        .collect();

    if matrix.is_empty() {
        return Vec::new();
    }

    let mut paths = Vec::new();
    let mut trackers = vec![0usize; matrix.len()];

    loop {
        // One path per tracker position, blanks dropped so hollow terms
        // never reach the output.
        let path: Vec<String> = matrix
            .iter()
            .zip(&trackers)
            .map(|(row, &tracker)| row[tracker].flatten())
            .filter(|node| !node.trim().is_empty())
            .collect();

        paths.push(path);

        // Advance the innermost tracker, carrying leftwards on overflow.
        let mut index = matrix.len();
        loop {
            if index == 0 {
                return paths;
            }
            index -= 1;

            trackers[index] += 1;
            if trackers[index] < matrix[index].len() {
                break;
            }
            trackers[index] = 0;
        }
    }
}

/// Serialize selector paths into one selector string.
///
/// Within a path, elements join with `", "` under OR logic and concatenate
/// directly under AND logic. Distinct paths are alternative satisfying
/// combinations, so across paths the join is always `", "` regardless of
/// `between_logic`; duplicate path selectors collapse to their first
/// occurrence.
pub fn build_selector(paths: &[Vec<String>], between_logic: GroupLogic) -> String {
    if paths.is_empty() {
        return String::new();
    }

    let node_joiner = match between_logic {
        GroupLogic::Or => ", ",
        GroupLogic::And => "",
    };

    if paths.len() == 1 {
        return paths[0].join(node_joiner);
    }

    let mut output: Vec<String> = Vec::new();

    for path in paths {
        let path_selector = path.join(node_joiner);

        if !output.contains(&path_selector) {
            output.push(path_selector);
        }
    }

    output.join(", ")
}

/// Convenience wrapper chaining [`compose_paths`] and [`build_selector`].
///
/// Returns the empty string when no group contributes a constraint; the
/// caller decides what fallback selector that maps to.
pub fn compose(groups: &[FilterGroup], between_logic: GroupLogic) -> String {
    build_selector(&compose_paths(groups), between_logic)
}
