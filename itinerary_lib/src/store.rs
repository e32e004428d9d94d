use std::rc::Rc;

use crate::{
    catalog::Catalog,
    checklist::{ChecklistError, ChecklistState, ChecklistStore},
    projection::ViewProjection,
    selection::{MapMode, SelectionError, SelectionState, Tab},
    trip::{DatasetError, TripId},
};

/// A user interaction, mapped one to one onto a store operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectTrip(Option<TripId>),
    SelectTab(Tab),
    ToggleDay(u32),
    SelectActivity(usize),
    ToggleHotel(String),
    HighlightLocation(Option<String>),
    SetMapMode(MapMode),
    ToggleChecklistItem(String),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Checklist(#[from] ChecklistError),
}

/// Owns everything that changes while the app runs.
#[derive(Debug, Clone)]
pub struct Store {
    catalog: Rc<Catalog>,
    selection: SelectionState,
    checklists: ChecklistStore,
}

impl Store {
    pub fn new(catalog: Catalog) -> Self {
        let checklists = ChecklistStore::new(&catalog);
        Self {
            catalog: Rc::new(catalog),
            selection: SelectionState::new(),
            checklists,
        }
    }

    pub fn load() -> Result<Self, DatasetError> {
        Ok(Self::new(Catalog::load()?))
    }

    pub fn catalog(&self) -> &Rc<Catalog> {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn checklists(&self) -> &ChecklistStore {
        &self.checklists
    }

    /// Checklist of the trip on screen, if any.
    pub fn active_checklist(&self) -> Option<&ChecklistState> {
        self.checklists.state(self.selection.selected_trip()?)
    }

    pub fn projection(&self) -> Option<ViewProjection<'_>> {
        ViewProjection::project(&self.selection, &self.catalog)
    }

    /// Applies `action`. On error nothing has changed.
    pub fn dispatch(&mut self, action: Action) -> Result<(), StoreError> {
        let catalog = &self.catalog;
        let selection = &mut self.selection;

        match action {
            Action::SelectTrip(trip) => selection.select_trip(trip),
            Action::SelectTab(tab) => selection.select_tab(tab),
            Action::ToggleDay(day) => selection.toggle_day(catalog, day)?,
            Action::SelectActivity(index) => selection.select_activity(catalog, index)?,
            Action::ToggleHotel(location_id) => {
                selection.toggle_hotel_selection(catalog, &location_id)?
            }
            Action::HighlightLocation(location_id) => {
                selection.set_highlighted_location(catalog, location_id.as_deref())?
            }
            Action::SetMapMode(mode) => selection.set_map_mode(mode),
            Action::ToggleChecklistItem(id) => {
                let trip = selection.selected_trip().ok_or(SelectionError::NoTrip)?;
                self.checklists.toggle(trip, &id)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::projection::{ActivityKey, should_fly};

    #[test]
    fn dispatch_drives_selection_and_checklists() {
        let mut store = Store::load().unwrap();
        assert!(store.projection().is_none());
        assert!(store.active_checklist().is_none());

        store.dispatch(Action::SelectTrip(Some(TripId::Suzuka))).unwrap();
        store.dispatch(Action::ToggleDay(3)).unwrap();
        store.dispatch(Action::SelectActivity(5)).unwrap();
        store.dispatch(Action::SetMapMode(MapMode::Geodetic)).unwrap();

        let view = store.projection().unwrap();
        assert_eq!(
            view.current_activity.unwrap().name,
            "JAPANESE GRAND PRIX (53 Laps) - V1 Seats"
        );
        assert_eq!(store.selection().map_mode(), MapMode::Geodetic);

        store.dispatch(Action::SelectTab(Tab::Checklist)).unwrap();
        store
            .dispatch(Action::ToggleChecklistItem("binoculars".into()))
            .unwrap();
        assert_eq!(store.active_checklist().unwrap().progress(), (1, 5));
        assert!(store.checklists().is_checked(TripId::Suzuka, "binoculars"));
    }

    #[test]
    fn rejected_actions_change_nothing() {
        let mut store = Store::load().unwrap();

        assert_eq!(
            store.dispatch(Action::ToggleChecklistItem("tickets".into())),
            Err(StoreError::Selection(SelectionError::NoTrip))
        );

        store.dispatch(Action::SelectTrip(Some(TripId::Bali))).unwrap();
        let before = store.selection().clone();

        assert_eq!(
            store.dispatch(Action::SelectActivity(0)),
            Err(StoreError::Selection(SelectionError::NoDay))
        );
        assert_eq!(
            store.dispatch(Action::ToggleHotel("hotel".into())),
            Err(StoreError::Selection(SelectionError::UnknownHotel("hotel".into())))
        );
        assert_eq!(
            store.dispatch(Action::ToggleChecklistItem("tickets".into())),
            Err(StoreError::Checklist(ChecklistError::UnknownItem {
                trip: TripId::Bali,
                id: "tickets".into(),
            }))
        );
        assert_eq!(store.selection(), &before);
        assert_eq!(store.checklists().progress(TripId::Bali), (0, 5));
    }

    #[test]
    fn selecting_activity_changes_fly_target() {
        let mut store = Store::load().unwrap();
        store.dispatch(Action::SelectTrip(Some(TripId::Bali))).unwrap();
        assert_eq!(store.projection().unwrap().activity_key(), None);

        store.dispatch(Action::ToggleDay(2)).unwrap();
        let opened = store.projection().unwrap().activity_key();
        assert_eq!(opened, Some(ActivityKey { trip: TripId::Bali, day: 2, index: 0 }));
        assert!(should_fly(None, opened));

        store.dispatch(Action::SelectActivity(1)).unwrap();
        let picked = store.projection().unwrap().activity_key();
        assert_eq!(picked, Some(ActivityKey { trip: TripId::Bali, day: 2, index: 1 }));
        assert!(should_fly(opened, picked));

        store.dispatch(Action::SelectActivity(1)).unwrap();
        assert!(!should_fly(picked, store.projection().unwrap().activity_key()));

        store.dispatch(Action::ToggleDay(2)).unwrap();
        let collapsed = store.projection().unwrap().activity_key();
        assert_eq!(collapsed, None);
        assert!(!should_fly(picked, collapsed));
    }

    #[test]
    fn highlight_from_food_entry() {
        let mut store = Store::load().unwrap();
        store.dispatch(Action::SelectTrip(Some(TripId::Bali))).unwrap();
        store.dispatch(Action::SelectTab(Tab::Food)).unwrap();
        store
            .dispatch(Action::HighlightLocation(Some("seminyak".into())))
            .unwrap();

        let view = store.projection().unwrap();
        assert_eq!(view.highlighted_location.unwrap().name, "Seminyak");
    }
}
