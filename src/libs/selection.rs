//! Entity selection for comparison trend views.
//!
//! In person and project mode the trend table shows a user-chosen subset of
//! entities. The subset moves through three phases:
//!
//! ```text
//!   ┌──────────┐  toggle X   ┌──────────┐  toggle Y   ┌──────────┐
//!   │   All    │────────────▶│ Single X │────────────▶│ Partial  │
//!   │ selected │             │          │◀────────────│  {X, Y}  │
//!   └──────────┘             └──────────┘  toggle Y   └──────────┘
//!        ▲                        │
//!        └────────────────────────┘
//!              toggle X (reset)
//! ```
//!
//! The selection is never left empty: deselecting the last entity resets to
//! "select all", which the next trend build expands into the full entity set.
//!
//! [`AnalysisContext`] bundles the current mode, the group drill-down filter
//! and one [`SelectionState`] per comparison mode. It is persisted between
//! CLI invocations by the settings store.

use crate::libs::entry::AnalysisMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which entities a comparison view includes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected: BTreeSet<String>,
    /// Set when the next trend build should select every entity it finds.
    pub select_all_pending: bool,
    /// Number of entities the last trend build discovered.
    pub known_entities: usize,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
            select_all_pending: true,
            known_entities: 0,
        }
    }
}

/// Coarse shape of a selection, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectionPhase {
    All,
    Single,
    Partial,
}

impl SelectionState {
    /// True when every known entity is selected, or a select-all is pending.
    pub fn is_all_selected(&self) -> bool {
        self.select_all_pending || (self.known_entities > 0 && self.selected.len() == self.known_entities)
    }

    pub fn phase(&self) -> SelectionPhase {
        if self.is_all_selected() {
            SelectionPhase::All
        } else if self.selected.len() == 1 {
            SelectionPhase::Single
        } else {
            SelectionPhase::Partial
        }
    }

    /// A reset is only meaningful for a strict, non-empty subset.
    pub fn can_reset(&self) -> bool {
        !self.select_all_pending && !self.selected.is_empty() && self.selected.len() < self.known_entities
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    /// Returns to "select all" on the next build.
    pub fn reset(&mut self) {
        self.selected.clear();
        self.select_all_pending = true;
    }

    /// Selects every entity in `discovered` if a select-all is pending.
    ///
    /// Nothing happens when `discovered` is empty, so the pending flag
    /// survives days without data.
    pub fn apply_pending(&mut self, discovered: &[String]) {
        self.known_entities = discovered.len();
        if self.select_all_pending && !discovered.is_empty() {
            self.selected = discovered.iter().cloned().collect();
            self.select_all_pending = false;
        }
    }
}

/// Applies one click on `name` to the selection.
///
/// - All selected: collapse to just `name`
/// - Only `name` selected: reset to select-all
/// - Otherwise: add or remove `name`
pub fn toggle_entity_selection(state: &mut SelectionState, name: &str) {
    if state.is_all_selected() {
        state.selected.clear();
        state.selected.insert(name.to_string());
        state.select_all_pending = false;
    } else if state.selected.len() == 1 && state.selected.contains(name) {
        state.reset();
    } else if !state.selected.remove(name) {
        state.selected.insert(name.to_string());
    }
}

/// Outcome of [`AnalysisContext::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The comparison selection changed.
    Selection(SelectionPhase),
    /// The group drill-down filter was set.
    FilterSet(String),
    /// The group drill-down filter was cleared.
    FilterCleared,
}

/// Persisted analysis state of the trend view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisContext {
    pub mode: AnalysisMode,
    /// Group drill-down filter, only used in group mode.
    pub active_filter: Option<String>,
    #[serde(default)]
    pub persons: SelectionState,
    #[serde(default)]
    pub projects: SelectionState,
}

impl AnalysisContext {
    /// Switches the analysis mode.
    ///
    /// The drill-down filter is cleared, and a comparison mode starts over
    /// with every entity selected.
    pub fn set_mode(&mut self, mode: AnalysisMode) {
        self.mode = mode;
        self.active_filter = None;
        if let Some(selection) = self.selection_mut() {
            selection.reset();
        }
    }

    /// Selection of the current mode, if it is a comparison mode.
    pub fn selection(&self) -> Option<&SelectionState> {
        match self.mode {
            AnalysisMode::Person => Some(&self.persons),
            AnalysisMode::Project => Some(&self.projects),
            AnalysisMode::Group => None,
        }
    }

    pub fn selection_mut(&mut self) -> Option<&mut SelectionState> {
        match self.mode {
            AnalysisMode::Person => Some(&mut self.persons),
            AnalysisMode::Project => Some(&mut self.projects),
            AnalysisMode::Group => None,
        }
    }

    /// Handles a click on `name` in the current mode.
    pub fn toggle(&mut self, name: &str) -> ToggleOutcome {
        match self.selection_mut() {
            Some(selection) => {
                toggle_entity_selection(selection, name);
                ToggleOutcome::Selection(selection.phase())
            }
            None => {
                if self.active_filter.as_deref() == Some(name) {
                    self.active_filter = None;
                    ToggleOutcome::FilterCleared
                } else {
                    self.active_filter = Some(name.to_string());
                    ToggleOutcome::FilterSet(name.to_string())
                }
            }
        }
    }

    /// Resets the current comparison selection to select-all.
    pub fn reset_selection(&mut self) {
        if let Some(selection) = self.selection_mut() {
            selection.reset();
        }
    }

    pub fn clear_filter(&mut self) {
        self.active_filter = None;
    }
}
