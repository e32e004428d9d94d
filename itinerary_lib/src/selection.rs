use crate::{
    catalog::Catalog,
    trip::{Trip, TripId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Itinerary,
    Hotels,
    Food,
    Checklist,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Itinerary, Tab::Hotels, Tab::Food, Tab::Checklist];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Itinerary => "Itinerary",
            Tab::Hotels => "Hotels",
            Tab::Food => "Food",
            Tab::Checklist => "Checklist",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapMode {
    /// Marker over a static background image.
    #[default]
    Illustrative,
    /// Interactive tile map.
    Geodetic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Hub,
    Detail(TripId),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no trip is selected")]
    NoTrip,
    #[error("day {0} does not exist")]
    UnknownDay(u32),
    #[error("no day is open")]
    NoDay,
    #[error("activity {index} is out of range for day {day} with {len} activities")]
    ActivityOutOfRange { day: u32, index: usize, len: usize },
    #[error("no hotel at location '{0}'")]
    UnknownHotel(String),
    #[error("unknown location '{0}'")]
    UnknownLocation(String),
}

/// The hierarchical selection trip -> tab -> day -> activity.
///
/// Fields are only reachable through the operations below. Changing any
/// level clears every level beneath it, so lookups against the catalog
/// never see a reference left over from an earlier selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
    trip: Option<TripId>,
    tab: Tab,
    day: Option<u32>,
    activity: Option<usize>,
    hotel: Option<String>,
    highlighted: Option<String>,
    map_mode: MapMode,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_trip(&self) -> Option<TripId> {
        self.trip
    }

    pub fn active_tab(&self) -> Tab {
        self.tab
    }

    pub fn selected_day(&self) -> Option<u32> {
        self.day
    }

    pub fn selected_activity_index(&self) -> Option<usize> {
        self.activity
    }

    pub fn selected_hotel(&self) -> Option<&str> {
        self.hotel.as_deref()
    }

    pub fn highlighted_location(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    pub fn map_mode(&self) -> MapMode {
        self.map_mode
    }

    pub fn view_mode(&self) -> ViewMode {
        match self.trip {
            Some(trip) => ViewMode::Detail(trip),
            None => ViewMode::Hub,
        }
    }

    /// `None` returns to the hub.
    pub fn select_trip(&mut self, trip: Option<TripId>) {
        self.trip = trip;
        self.tab = Tab::Itinerary;
        self.clear_tab_content();
        tracing::debug!(trip = ?trip, "Selected trip");
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.clear_tab_content();
        tracing::debug!(tab = ?tab, "Selected tab");
    }

    /// Opens `day`, or collapses it if it is already open. A newly opened
    /// day never carries an explicit activity selection.
    pub fn toggle_day(&mut self, catalog: &Catalog, day: u32) -> Result<(), SelectionError> {
        let trip = self.active_trip(catalog)?;
        if trip.day(day).is_none() {
            return Err(reject(SelectionError::UnknownDay(day)));
        }

        self.day = if self.day == Some(day) { None } else { Some(day) };
        self.activity = None;
        tracing::debug!(day = ?self.day, "Toggled day");
        Ok(())
    }

    pub fn select_activity(&mut self, catalog: &Catalog, index: usize) -> Result<(), SelectionError> {
        let trip = self.active_trip(catalog)?;
        let day = self
            .day
            .and_then(|number| trip.day(number))
            .ok_or_else(|| reject(SelectionError::NoDay))?;

        if index >= day.activities.len() {
            return Err(reject(SelectionError::ActivityOutOfRange {
                day: day.day,
                index,
                len: day.activities.len(),
            }));
        }

        self.activity = Some(index);
        tracing::debug!(day = day.day, index, "Selected activity");
        Ok(())
    }

    pub fn toggle_hotel_selection(
        &mut self,
        catalog: &Catalog,
        location_id: &str,
    ) -> Result<(), SelectionError> {
        let trip = self.active_trip(catalog)?;
        if trip.hotel(location_id).is_none() {
            return Err(reject(SelectionError::UnknownHotel(location_id.to_owned())));
        }

        self.hotel = if self.hotel.as_deref() == Some(location_id) {
            None
        } else {
            Some(location_id.to_owned())
        };
        tracing::debug!(hotel = ?self.hotel, "Toggled hotel");
        Ok(())
    }

    pub fn set_highlighted_location(
        &mut self,
        catalog: &Catalog,
        location_id: Option<&str>,
    ) -> Result<(), SelectionError> {
        if let Some(id) = location_id {
            let trip = self.active_trip(catalog)?;
            if trip.location(id).is_none() {
                return Err(reject(SelectionError::UnknownLocation(id.to_owned())));
            }
        }

        self.highlighted = location_id.map(str::to_owned);
        tracing::debug!(location = ?self.highlighted, "Highlighted location");
        Ok(())
    }

    pub fn set_map_mode(&mut self, mode: MapMode) {
        self.map_mode = mode;
        tracing::debug!(mode = ?mode, "Switched map mode");
    }

    fn active_trip<'a>(&self, catalog: &'a Catalog) -> Result<&'a Trip, SelectionError> {
        self.trip
            .map(|id| catalog.trip(id))
            .ok_or_else(|| reject(SelectionError::NoTrip))
    }

    fn clear_tab_content(&mut self) {
        self.day = None;
        self.activity = None;
        self.hotel = None;
        self.highlighted = None;
    }
}

fn reject(err: SelectionError) -> SelectionError {
    tracing::warn!("Rejected selection: {err}");
    err
}
