//! Tri-state selection over the action/option tree.
//!
//! [`SelectionTree`] owns an immutable [`Catalog`] and the mutable
//! [`SelectionState`], and is the only way to change that state. Each
//! mutator restores the group invariant before it returns:
//!
//! ```text
//! group ∈ selected_groups  ⇔  group has ≥1 item ∧ every item ∈ selected_items
//! ```
//!
//! # Transitions
//!
//! - Group toggle cascades to every owned item (select all / deselect all).
//! - Item select re-checks only its own group and marks it selected once
//!   the last sibling is in.
//! - Item deselect always clears its group's selected flag, leaving the
//!   group partial or unselected.
//!
//! Unknown ids are ignored by [`SelectionTree::toggle_group`] and
//! [`SelectionTree::toggle_item`]. The `try_` variants surface them as
//! [`SelectionError::ReferenceNotFound`].

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumString};

use crate::catalog::{Catalog, Group};
use crate::error::{CatalogError, SelectionError};

/// Observable status of a group, derived from its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    /// No item selected (also every group without items)
    #[default]
    Unselected,
    /// At least one item selected and at least one not
    Partial,
    /// Every item selected
    Selected,
}

impl GroupStatus {
    /// Check-box marker used by the text renderer.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Unselected => "[ ]",
            Self::Partial => "[-]",
            Self::Selected => "[x]",
        }
    }
}

/// What a toggle did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// The reference resolved but nothing could change (a group with no items)
    Unchanged,
}

impl ToggleOutcome {
    /// Whether the selection state was modified.
    #[inline]
    pub fn changed(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// The two selection sets.
///
/// Only [`SelectionTree`] mutates this; everything else gets `&SelectionState`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_groups: HashSet<String>,
    selected_items: HashSet<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_group(&self, group_id: &str) -> bool {
        self.selected_groups.contains(group_id)
    }

    pub fn contains_item(&self, item_id: &str) -> bool {
        self.selected_items.contains(item_id)
    }

    pub fn item_count(&self) -> usize {
        self.selected_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_items.is_empty() && self.selected_groups.is_empty()
    }

    /// Selected group ids, unordered
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.selected_groups.iter().map(String::as_str)
    }
}

/// Read-only copy of the selection handed to the steps after selection.
///
/// Ids are listed in catalog display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionSnapshot {
    pub items: Vec<String>,
    pub groups: Vec<String>,
}

impl SelectionSnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single toggle command, as typed on the command line.
///
/// `group:<id>` toggles a group, `item:<id>@<group>` toggles an item
/// under its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    ToggleGroup(String),
    ToggleItem { item: String, parent: String },
}

impl FromStr for SelectionAction {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SelectionError::InvalidAction(s.to_string());
        let (kind, target) = s.trim().split_once(':').ok_or_else(invalid)?;

        match kind {
            "group" if !target.is_empty() => Ok(Self::ToggleGroup(target.to_string())),
            "item" => match target.split_once('@') {
                Some((item, parent)) if !item.is_empty() && !parent.is_empty() => {
                    Ok(Self::ToggleItem {
                        item: item.to_string(),
                        parent: parent.to_string(),
                    })
                }
                _ => Err(invalid()),
            },
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for SelectionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToggleGroup(group) => write!(f, "group:{group}"),
            Self::ToggleItem { item, parent } => write!(f, "item:{item}@{parent}"),
        }
    }
}

/// The immutable tree plus the selection made on it.
#[derive(Debug, Clone)]
pub struct SelectionTree {
    catalog: Catalog,
    state: SelectionState,
}

impl SelectionTree {
    /// Create a tree with nothing selected.
    ///
    /// # Errors
    ///
    /// Returns the first structural problem found by [`Catalog::validate`].
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        catalog.validate()?;
        Ok(Self {
            catalog,
            state: SelectionState::new(),
        })
    }

    /// Tree over [`Catalog::builtin`].
    pub fn builtin() -> Self {
        Self {
            catalog: Catalog::builtin(),
            state: SelectionState::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    /// Toggle a group and cascade to its items.
    ///
    /// Returns `true` if the selection changed. Unknown groups are ignored.
    pub fn toggle_group(&mut self, group_id: &str) -> bool {
        match self.try_toggle_group(group_id) {
            Ok(outcome) => outcome.changed(),
            Err(e) => {
                tracing::debug!("Ignoring group toggle: {}", e);
                false
            }
        }
    }

    /// Toggle an item under its owning group.
    ///
    /// Returns `true` if the selection changed. An unknown item, or one the
    /// named group does not own, is ignored.
    pub fn toggle_item(&mut self, item_id: &str, parent_id: &str) -> bool {
        match self.try_toggle_item(item_id, parent_id) {
            Ok(outcome) => outcome.changed(),
            Err(e) => {
                tracing::debug!("Ignoring item toggle: {}", e);
                false
            }
        }
    }

    /// Strict form of [`toggle_group`](Self::toggle_group).
    ///
    /// A selected group is deselected together with all its items; any
    /// other group is selected together with all its items. A group with no
    /// items cannot become selected and yields [`ToggleOutcome::Unchanged`].
    pub fn try_toggle_group(&mut self, group_id: &str) -> Result<ToggleOutcome, SelectionError> {
        let group = self
            .catalog
            .group(group_id)
            .ok_or_else(|| SelectionError::group_not_found(group_id))?;

        if group.items.is_empty() {
            tracing::debug!("Group '{}' has no items, nothing to toggle", group_id);
            return Ok(ToggleOutcome::Unchanged);
        }

        let outcome = if self.state.selected_groups.remove(group_id) {
            for item_id in group.item_ids() {
                self.state.selected_items.remove(item_id);
            }
            ToggleOutcome::Deselected
        } else {
            self.state.selected_groups.insert(group.id.clone());
            self.state
                .selected_items
                .extend(group.item_ids().map(str::to_string));
            ToggleOutcome::Selected
        };

        tracing::trace!("Group '{}' {:?}", group_id, outcome);
        debug_assert!(self.is_consistent());
        Ok(outcome)
    }

    /// Strict form of [`toggle_item`](Self::toggle_item).
    ///
    /// Deselecting an item always drops its parent from the selected groups.
    /// Selecting one marks the parent selected once every sibling, including
    /// the item just added, is selected.
    pub fn try_toggle_item(
        &mut self,
        item_id: &str,
        parent_id: &str,
    ) -> Result<ToggleOutcome, SelectionError> {
        let group = self
            .catalog
            .group(parent_id)
            .ok_or_else(|| SelectionError::group_not_found(parent_id))?;
        if !group.owns(item_id) {
            return Err(SelectionError::item_not_found(item_id));
        }

        let outcome = if self.state.selected_items.remove(item_id) {
            self.state.selected_groups.remove(parent_id);
            ToggleOutcome::Deselected
        } else {
            self.state.selected_items.insert(item_id.to_string());
            if all_selected(group, &self.state.selected_items) {
                self.state.selected_groups.insert(group.id.clone());
            }
            ToggleOutcome::Selected
        };

        tracing::trace!("Item '{}' in '{}' {:?}", item_id, parent_id, outcome);
        debug_assert!(self.is_consistent());
        Ok(outcome)
    }

    /// Apply a parsed toggle command, ignoring unknown references.
    pub fn apply(&mut self, action: &SelectionAction) -> bool {
        match action {
            SelectionAction::ToggleGroup(group) => self.toggle_group(group),
            SelectionAction::ToggleItem { item, parent } => self.toggle_item(item, parent),
        }
    }

    /// Apply a parsed toggle command, surfacing unknown references.
    pub fn try_apply(&mut self, action: &SelectionAction) -> Result<ToggleOutcome, SelectionError> {
        match action {
            SelectionAction::ToggleGroup(group) => self.try_toggle_group(group),
            SelectionAction::ToggleItem { item, parent } => self.try_toggle_item(item, parent),
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Derived status of a group, `None` if the group is unknown.
    pub fn group_status(&self, group_id: &str) -> Option<GroupStatus> {
        let group = self.catalog.group(group_id)?;
        let selected = group
            .item_ids()
            .filter(|id| self.state.selected_items.contains(*id))
            .count();

        Some(match selected {
            0 => GroupStatus::Unselected,
            n if n == group.items.len() => GroupStatus::Selected,
            _ => GroupStatus::Partial,
        })
    }

    /// True iff the group has at least one selected and one unselected item.
    pub fn is_group_indeterminate(&self, group_id: &str) -> bool {
        self.group_status(group_id) == Some(GroupStatus::Partial)
    }

    pub fn is_group_selected(&self, group_id: &str) -> bool {
        self.state.contains_group(group_id)
    }

    pub fn is_item_selected(&self, item_id: &str) -> bool {
        self.state.contains_item(item_id)
    }

    /// Number of selected items (the "N options selected" badge).
    pub fn selection_count(&self) -> usize {
        self.state.item_count()
    }

    /// Selected item ids in catalog display order.
    pub fn selected_items(&self) -> Vec<&str> {
        self.catalog
            .groups
            .iter()
            .flat_map(|group| group.item_ids())
            .filter(|id| self.state.contains_item(id))
            .collect()
    }

    /// Selected group ids in catalog display order.
    pub fn selected_groups(&self) -> Vec<&str> {
        self.catalog
            .groups
            .iter()
            .map(|group| group.id.as_str())
            .filter(|id| self.state.contains_group(id))
            .collect()
    }

    /// Owned copy of the current selection.
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            items: self.selected_items().into_iter().map(String::from).collect(),
            groups: self.selected_groups().into_iter().map(String::from).collect(),
        }
    }

    /// Check the group invariant for every group in the tree.
    pub fn is_consistent(&self) -> bool {
        let known_groups = self
            .state
            .groups()
            .all(|id| self.catalog.group(id).is_some());

        known_groups
            && self.catalog.groups.iter().all(|group| {
                let full = !group.items.is_empty()
                    && all_selected(group, &self.state.selected_items);
                self.state.contains_group(&group.id) == full
            })
    }
}

fn all_selected(group: &Group, selected_items: &HashSet<String>) -> bool {
    group.item_ids().all(|id| selected_items.contains(id))
}
