//! Per-row UI flags for the management view.
//!
//! Each row carries `visible` (secret unmasked) and `pending_delete`. Entries
//! are kept in roster order and tagged with the account's id, so a delete
//! shifts surviving state down with its account instead of leaving it at the
//! old position.

use crate::collection::Roster;
use crate::models::AccountId;

/// Local flags for one management row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowUiState {
    pub visible: bool,
    pub pending_delete: bool,
}

#[derive(Debug, Clone)]
struct RowEntry {
    id: AccountId,
    state: RowUiState,
}

/// Ordered row state, one entry per roster position.
#[derive(Debug, Clone, Default)]
pub struct RowStateMap {
    rows: Vec<RowEntry>,
}

impl RowStateMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state for every row.
    pub fn on_collection_loaded(&mut self, roster: &Roster) {
        self.rows = roster
            .entries()
            .iter()
            .map(|e| RowEntry {
                id: e.id,
                state: RowUiState::default(),
            })
            .collect();
    }

    /// An account was appended; existing rows keep their state.
    ///
    /// If the roster was rebuilt instead (fresh ids), every row resets.
    pub fn on_added(&mut self, roster: &Roster) {
        if roster.len() != self.rows.len() + 1 || !self.matches_prefix_of(roster) {
            self.on_collection_loaded(roster);
            return;
        }
        if let Some(entry) = roster.entries().last() {
            self.rows.push(RowEntry {
                id: entry.id,
                state: RowUiState::default(),
            });
        }
    }

    /// The account at `removed_index` is gone.
    ///
    /// Row `i` of the new list takes the old state at `i` when
    /// `i < removed_index`, otherwise the old state at `i + 1`.
    pub fn on_deleted(&mut self, removed_index: usize, roster: &Roster) {
        if removed_index >= self.rows.len() || roster.len() + 1 != self.rows.len() {
            self.on_collection_loaded(roster);
            return;
        }
        self.rows.remove(removed_index);
        if !self.matches_prefix_of(roster) {
            self.on_collection_loaded(roster);
        }
    }

    /// Whether every row still belongs to the account at its position.
    fn matches_prefix_of(&self, roster: &Roster) -> bool {
        self.rows
            .iter()
            .zip(roster.entries())
            .all(|(row, entry)| row.id == entry.id)
    }

    /// Flip secret visibility. Returns `false` if `index` is out of range.
    pub fn toggle_visibility(&mut self, index: usize) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.state.visible = !row.state.visible;
                true
            }
            None => false,
        }
    }

    /// Mark or clear a pending delete. Returns `false` if out of range.
    pub fn set_pending_delete(&mut self, index: usize, pending: bool) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.state.pending_delete = pending;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> RowUiState {
        self.rows.get(index).map(|r| r.state).unwrap_or_default()
    }

    pub fn get_by_id(&self, id: AccountId) -> Option<RowUiState> {
        self.rows.iter().find(|r| r.id == id).map(|r| r.state)
    }

    pub fn any_pending_delete(&self) -> bool {
        self.rows.iter().any(|r| r.state.pending_delete)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
