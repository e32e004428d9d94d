use geo_types::LineString;

use crate::{
    catalog::Catalog,
    day::{Activity, Day},
    hotel::Hotel,
    location::{GeoPoint, Location, RelativePosition},
    selection::SelectionState,
    trip::{Trip, TripId},
};

/// Identity of the activity currently on display. The geodetic map
/// animates whenever this changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivityKey {
    pub trip: TripId,
    pub day: u32,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPopup {
    pub day: u32,
    pub name: String,
    pub time: String,
}

impl MarkerPopup {
    pub fn to_html(&self) -> String {
        format!(
            "<b>Day {}</b><br>{}<br><span class=\"popup-time\">{}</span>",
            self.day,
            escape_html(&self.name),
            escape_html(&self.time)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeodeticMarker {
    pub position: GeoPoint,
    pub popup: MarkerPopup,
}

/// What the tile map should show: where to centre, how far to zoom and
/// which marker to pin.
#[derive(Debug, Clone, PartialEq)]
pub struct GeodeticView {
    pub center: GeoPoint,
    pub zoom: f64,
    pub marker: Option<GeodeticMarker>,
}

/// Content of the info card over the map, in display priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayInfo<'a> {
    Activity { day: &'a Day, activity: &'a Activity },
    Hotel { hotel: &'a Hotel },
    Place { location: &'a Location },
    Prompt(&'a str),
}

/// Read-only view of the selection resolved against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewProjection<'a> {
    pub trip: &'a Trip,
    pub active_day: Option<&'a Day>,
    pub current_activity: Option<&'a Activity>,
    /// Index of `current_activity`, explicit or the day's first activity.
    pub current_index: Option<usize>,
    pub illustrative_position: Option<RelativePosition>,
    pub geodetic_position: GeoPoint,
    pub selected_hotel: Option<&'a Hotel>,
    pub highlighted_location: Option<&'a Location>,
}

impl<'a> ViewProjection<'a> {
    /// Returns `None` while the hub is shown.
    pub fn project(selection: &SelectionState, catalog: &'a Catalog) -> Option<Self> {
        let trip = catalog.trip(selection.selected_trip()?);

        let active_day = selection.selected_day().and_then(|number| trip.day(number));

        // An open day without an explicit pick shows its first activity.
        let current = active_day.and_then(|day| {
            let index = selection.selected_activity_index().unwrap_or(0);
            day.activity(index).map(|activity| (index, activity))
        });
        let current_index = current.map(|(index, _)| index);
        let current_activity = current.map(|(_, activity)| activity);

        Some(Self {
            trip,
            active_day,
            current_activity,
            current_index,
            illustrative_position: current_activity.map(|activity| activity.position),
            geodetic_position: current_activity
                .map(|activity| activity.coords)
                .unwrap_or(trip.map.fallback_center),
            selected_hotel: selection.selected_hotel().and_then(|id| trip.hotel(id)),
            highlighted_location: selection.highlighted_location().and_then(|id| trip.location(id)),
        })
    }

    pub fn activity_key(&self) -> Option<ActivityKey> {
        Some(ActivityKey {
            trip: self.trip.id,
            day: self.active_day?.day,
            index: self.current_index?,
        })
    }

    pub fn hotel_location(&self) -> Option<&'a Location> {
        self.selected_hotel
            .and_then(|hotel| self.trip.location(&hotel.location_id))
    }

    /// The open day's route; empty while no day is open.
    pub fn route(&self) -> LineString<f64> {
        let points = self
            .active_day
            .into_iter()
            .flat_map(|day| day.route.iter())
            .filter_map(|id| self.trip.location(id))
            .map(|location| (location.coords.lng, location.coords.lat));

        LineString::from_iter(points)
    }

    pub fn overlay(&self) -> OverlayInfo<'a> {
        if let (Some(day), Some(activity)) = (self.active_day, self.current_activity) {
            OverlayInfo::Activity { day, activity }
        } else if let Some(hotel) = self.selected_hotel {
            OverlayInfo::Hotel { hotel }
        } else if let Some(location) = self.highlighted_location {
            OverlayInfo::Place { location }
        } else {
            OverlayInfo::Prompt(&self.trip.profile.prompt)
        }
    }

    pub fn geodetic_view(&self) -> GeodeticView {
        let marker = self
            .active_day
            .zip(self.current_activity)
            .map(|(day, activity)| GeodeticMarker {
                position: activity.coords,
                popup: MarkerPopup {
                    day: day.day,
                    name: activity.name.clone(),
                    time: activity.time.clone(),
                },
            });

        GeodeticView {
            center: self.geodetic_position,
            zoom: self.trip.map.zoom,
            marker,
        }
    }
}

/// Whether the geodetic map should animate to a newly projected activity.
/// Collapsing a day clears the key but leaves the camera where it is.
pub fn should_fly(old: Option<ActivityKey>, new: Option<ActivityKey>) -> bool {
    new.is_some() && old != new
}

/// Leaflet renders popup content as HTML, and activity names carry
/// apostrophes and ampersands.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
