use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{catalog::Catalog, trip::TripId};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChecklistError {
    #[error("{trip} checklist has no item '{id}'")]
    UnknownItem { trip: TripId, id: String },
}

/// Completion flags for one trip's fixed set of checklist items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChecklistState {
    checked: HashMap<String, bool>,
}

impl ChecklistState {
    pub fn new(items: &[ChecklistItem]) -> Self {
        Self {
            checked: items.iter().map(|item| (item.id.clone(), false)).collect(),
        }
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.get(id).copied().unwrap_or(false)
    }

    /// Flips the flag and returns its new value, or `None` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let checked = self.checked.get_mut(id)?;
        *checked = !*checked;
        Some(*checked)
    }

    /// `(checked, total)`
    pub fn progress(&self) -> (usize, usize) {
        let done = self.checked.values().filter(|checked| **checked).count();
        (done, self.checked.len())
    }
}

/// One independent checklist per trip, kept for the lifetime of the app.
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistStore {
    states: HashMap<TripId, ChecklistState>,
}

impl ChecklistStore {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            states: catalog
                .trips()
                .map(|trip| (trip.id, ChecklistState::new(&trip.checklist)))
                .collect(),
        }
    }

    pub fn state(&self, trip: TripId) -> Option<&ChecklistState> {
        self.states.get(&trip)
    }

    pub fn is_checked(&self, trip: TripId, id: &str) -> bool {
        self.state(trip).is_some_and(|state| state.is_checked(id))
    }

    pub fn toggle(&mut self, trip: TripId, id: &str) -> Result<bool, ChecklistError> {
        let checked = self
            .states
            .get_mut(&trip)
            .and_then(|state| state.toggle(id))
            .ok_or_else(|| {
                tracing::warn!(trip = %trip, id, "Toggle of unknown checklist item");
                ChecklistError::UnknownItem {
                    trip,
                    id: id.to_owned(),
                }
            })?;

        tracing::debug!(trip = %trip, id, checked, "Toggled checklist item");
        Ok(checked)
    }

    pub fn progress(&self, trip: TripId) -> (usize, usize) {
        self.state(trip).map(ChecklistState::progress).unwrap_or((0, 0))
    }
}
