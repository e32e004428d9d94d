use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    checklist::ChecklistItem,
    day::Day,
    food::FoodCategory,
    hotel::Hotel,
    location::{GeoPoint, Location, RelativePosition},
    profile::{MapSettings, TripProfile},
};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TripId {
    Bali,
    Suzuka,
}

impl TripId {
    pub const ALL: [TripId; 2] = [TripId::Bali, TripId::Suzuka];

    fn source(self) -> &'static str {
        match self {
            TripId::Bali => include_str!("../data/bali.json"),
            TripId::Suzuka => include_str!("../data/suzuka.json"),
        }
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripId::Bali => write!(f, "bali"),
            TripId::Suzuka => write!(f, "suzuka"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to parse {trip} dataset: {source}")]
    Parse {
        trip: TripId,
        #[source]
        source: serde_json::Error,
    },
    #[error("{trip}: location '{id}' is defined more than once")]
    DuplicateLocation { trip: TripId, id: String },
    #[error("{trip}: {context} references unknown location '{id}'")]
    UnknownLocation {
        trip: TripId,
        context: String,
        id: String,
    },
    #[error("{trip}: day numbers start at 1")]
    ZeroDay { trip: TripId },
    #[error("{trip}: day {day} is listed more than once")]
    DuplicateDay { trip: TripId, day: u32 },
    #[error("{trip}: day {day} is listed after day {previous}")]
    DayOrder { trip: TripId, day: u32, previous: u32 },
    #[error("{trip}: more than one hotel at location '{id}'")]
    DuplicateHotel { trip: TripId, id: String },
    #[error("{trip}: checklist item '{id}' is defined more than once")]
    DuplicateChecklistItem { trip: TripId, id: String },
    #[error("{trip}: {context} has coordinates out of range")]
    CoordinatesOutOfRange { trip: TripId, context: String },
}

#[derive(Deserialize)]
struct TripDocument {
    profile: TripProfile,
    map: MapSettings,
    locations: Vec<Location>,
    days: Vec<Day>,
    #[serde(default)]
    hotels: Vec<Hotel>,
    #[serde(default)]
    food: Vec<FoodCategory>,
    #[serde(default)]
    checklist: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: TripId,
    pub profile: TripProfile,
    pub map: MapSettings,
    pub locations: Vec<Location>,
    pub days: Vec<Day>,
    pub hotels: Vec<Hotel>,
    pub food: Vec<FoodCategory>,
    pub checklist: Vec<ChecklistItem>,
}

impl Trip {
    /// Loads the dataset compiled into the binary for `id`.
    pub fn load(id: TripId) -> Result<Self, DatasetError> {
        Self::parse(id, id.source())
    }

    pub fn parse(id: TripId, source: &str) -> Result<Self, DatasetError> {
        let document: TripDocument = serde_json::from_str(source)
            .map_err(|source| DatasetError::Parse { trip: id, source })?;

        let trip = Self {
            id,
            profile: document.profile,
            map: document.map,
            locations: document.locations,
            days: document.days,
            hotels: document.hotels,
            food: document.food,
            checklist: document.checklist,
        };
        trip.validate()?;

        tracing::debug!(
            trip = %id,
            days = trip.days.len(),
            locations = trip.locations.len(),
            "Loaded trip dataset"
        );

        Ok(trip)
    }

    /// Checks that every reference resolves and every coordinate is in range.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let trip = self.id;

        let mut location_ids = HashSet::new();
        for location in &self.locations {
            if !location_ids.insert(location.id.as_str()) {
                return Err(DatasetError::DuplicateLocation {
                    trip,
                    id: location.id.clone(),
                });
            }
            self.check_coordinates(&location.coords, &location.position, || {
                format!("location '{}'", location.id)
            })?;
        }

        let mut previous = None;
        for day in &self.days {
            if day.day == 0 {
                return Err(DatasetError::ZeroDay { trip });
            }
            match previous {
                Some(previous) if previous == day.day => {
                    return Err(DatasetError::DuplicateDay { trip, day: day.day });
                }
                Some(previous) if previous > day.day => {
                    return Err(DatasetError::DayOrder {
                        trip,
                        day: day.day,
                        previous,
                    });
                }
                _ => {}
            }
            previous = Some(day.day);

            for id in &day.route {
                self.require_location(id, || format!("day {} route", day.day))?;
            }
            for (index, activity) in day.activities.iter().enumerate() {
                let context = || format!("day {} activity {}", day.day, index);
                self.require_location(&activity.location_id, context)?;
                self.check_coordinates(&activity.coords, &activity.position, context)?;
            }
        }

        let mut hotel_ids = HashSet::new();
        for hotel in &self.hotels {
            self.require_location(&hotel.location_id, || format!("hotel '{}'", hotel.name))?;
            if !hotel_ids.insert(hotel.location_id.as_str()) {
                return Err(DatasetError::DuplicateHotel {
                    trip,
                    id: hotel.location_id.clone(),
                });
            }
        }

        for category in &self.food {
            for item in &category.items {
                if let Some(id) = &item.location_id {
                    self.require_location(id, || format!("food '{}'", item.name))?;
                }
            }
        }

        let mut checklist_ids = HashSet::new();
        for item in &self.checklist {
            if !checklist_ids.insert(item.id.as_str()) {
                return Err(DatasetError::DuplicateChecklistItem {
                    trip,
                    id: item.id.clone(),
                });
            }
        }

        if !self.map.fallback_center.is_valid() {
            return Err(DatasetError::CoordinatesOutOfRange {
                trip,
                context: "map fallback center".into(),
            });
        }

        Ok(())
    }

    fn require_location(
        &self,
        id: &str,
        context: impl FnOnce() -> String,
    ) -> Result<&Location, DatasetError> {
        self.location(id).ok_or_else(|| DatasetError::UnknownLocation {
            trip: self.id,
            context: context(),
            id: id.to_owned(),
        })
    }

    fn check_coordinates(
        &self,
        coords: &GeoPoint,
        position: &RelativePosition,
        context: impl FnOnce() -> String,
    ) -> Result<(), DatasetError> {
        if coords.is_valid() && position.is_valid() {
            Ok(())
        } else {
            Err(DatasetError::CoordinatesOutOfRange {
                trip: self.id,
                context: context(),
            })
        }
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.id == id)
    }

    pub fn day(&self, number: u32) -> Option<&Day> {
        self.days.iter().find(|day| day.day == number)
    }

    pub fn hotel(&self, location_id: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|hotel| hotel.location_id == location_id)
    }

    pub fn has_checklist_item(&self, id: &str) -> bool {
        self.checklist.iter().any(|item| item.id == id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;

    pub(crate) fn fixture() -> Value {
        json!({
            "profile": {
                "title": "TEST",
                "accent": "1",
                "subtitle": "Fixture",
                "date_range": "Jan 1 - 2",
                "tagline": "Two days",
                "highlights": [],
                "badges": [],
                "variant": "light",
                "display_font": "Inter",
                "accent_color": "#000000",
                "prompt": "Select a day"
            },
            "map": {
                "background_image": "/test.jpg",
                "tile_url": "https://tiles/{z}/{x}/{y}.png",
                "attribution": "OSM",
                "fallback_center": { "lat": 10.0, "lng": 20.0 }
            },
            "locations": [
                { "id": "a", "name": "A", "position": { "top": 10, "left": 10 }, "coords": { "lat": 10.0, "lng": 20.0 } },
                { "id": "b", "name": "B", "position": { "top": 20, "left": 20 }, "coords": { "lat": 11.0, "lng": 21.0 } }
            ],
            "days": [
                {
                    "day": 1, "date": "Jan 1", "title": "One", "color": "#111111", "route": ["a", "b"],
                    "activities": [
                        { "name": "First", "time": "9:00 AM", "category": "transit", "location_id": "a", "query": "A", "coords": { "lat": 10.0, "lng": 20.0 }, "position": { "top": 10, "left": 10 } },
                        { "name": "Second", "time": "1:00 PM", "category": "dining", "location_id": "b", "query": "B", "coords": { "lat": 11.0, "lng": 21.0 }, "position": { "top": 20, "left": 20 } }
                    ]
                },
                { "day": 2, "date": "Jan 2", "title": "Two", "color": "#222222", "activities": [] }
            ],
            "hotels": [
                { "name": "Inn", "area": "A", "dates": "Day 1", "room": "Single", "location_id": "a", "category": "lodging", "color": "#333333" }
            ],
            "food": [
                { "name": "Eats", "items": [ { "name": "Stall", "area": "B", "location_id": "b" }, { "name": "Dish", "description": "Tasty" } ] }
            ],
            "checklist": [
                { "id": "passport", "label": "Passport" },
                { "id": "charger", "label": "Charger" }
            ]
        })
    }

    pub(crate) fn fixture_trip() -> Trip {
        Trip::parse(TripId::Bali, &fixture().to_string()).unwrap()
    }

    fn parse(document: &Value) -> Result<Trip, DatasetError> {
        Trip::parse(TripId::Bali, &document.to_string())
    }

    #[test]
    fn embedded_datasets_load() {
        for id in TripId::ALL {
            let trip = Trip::load(id).unwrap();
            assert_eq!(trip.id, id);
            assert!(!trip.days.is_empty());
            assert!(!trip.checklist.is_empty());
        }
    }

    #[test]
    fn embedded_dataset_shapes() {
        let bali = Trip::load(TripId::Bali).unwrap();
        assert_eq!(bali.days.len(), 7);
        assert_eq!(bali.hotels.len(), 3);
        assert_eq!(bali.locations.len(), 13);
        assert!(bali.profile.notes.is_empty());

        let suzuka = Trip::load(TripId::Suzuka).unwrap();
        assert_eq!(suzuka.days.len(), 3);
        assert_eq!(suzuka.hotels.len(), 1);
        assert_eq!(suzuka.profile.notes.len(), 3);
        assert_eq!(suzuka.day(1).unwrap().activities.len(), 12);
    }

    #[test]
    fn lookups() {
        let trip = fixture_trip();
        assert_eq!(trip.location("b").unwrap().name, "B");
        assert!(trip.location("c").is_none());
        assert_eq!(trip.day(2).unwrap().title, "Two");
        assert!(trip.day(3).is_none());
        assert_eq!(trip.hotel("a").unwrap().name, "Inn");
        assert!(trip.hotel("b").is_none());
        assert!(trip.has_checklist_item("charger"));
        assert!(!trip.has_checklist_item("umbrella"));
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let mut document = fixture();
        let object = document.as_object_mut().unwrap();
        object.remove("hotels");
        object.remove("food");
        object.remove("checklist");

        let trip = parse(&document).unwrap();
        assert!(trip.hotels.is_empty());
        assert!(trip.food.is_empty());
        assert!(trip.checklist.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Trip::parse(TripId::Suzuka, "{ not json").unwrap_err();
        assert!(matches!(err, DatasetError::Parse { trip: TripId::Suzuka, .. }));
    }

    #[test]
    fn rejects_duplicate_location() {
        let mut document = fixture();
        document["locations"][1]["id"] = json!("a");

        let err = parse(&document).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateLocation { id, .. } if id == "a"));
    }

    #[test]
    fn rejects_unknown_activity_location() {
        let mut document = fixture();
        document["days"][0]["activities"][1]["location_id"] = json!("nowhere");

        let err = parse(&document).unwrap_err();
        assert_eq!(
            err.to_string(),
            "bali: day 1 activity 1 references unknown location 'nowhere'"
        );
    }

    #[test]
    fn rejects_unknown_route_hotel_and_food_locations() {
        let mut document = fixture();
        document["days"][0]["route"] = json!(["a", "x"]);
        assert!(matches!(parse(&document), Err(DatasetError::UnknownLocation { id, .. }) if id == "x"));

        let mut document = fixture();
        document["hotels"][0]["location_id"] = json!("y");
        assert!(matches!(parse(&document), Err(DatasetError::UnknownLocation { id, .. }) if id == "y"));

        let mut document = fixture();
        document["food"][0]["items"][0]["location_id"] = json!("z");
        assert!(matches!(parse(&document), Err(DatasetError::UnknownLocation { id, .. }) if id == "z"));
    }

    #[test]
    fn rejects_bad_day_numbers() {
        let mut document = fixture();
        document["days"][0]["day"] = json!(0);
        assert!(matches!(parse(&document), Err(DatasetError::ZeroDay { .. })));

        let mut document = fixture();
        document["days"][1]["day"] = json!(1);
        assert!(matches!(parse(&document), Err(DatasetError::DuplicateDay { day: 1, .. })));

        let mut document = fixture();
        document["days"][0]["day"] = json!(3);
        assert!(matches!(
            parse(&document),
            Err(DatasetError::DayOrder { day: 2, previous: 3, .. })
        ));
    }

    #[test]
    fn rejects_duplicate_hotel_and_checklist_ids() {
        let mut document = fixture();
        let hotel = document["hotels"][0].clone();
        document["hotels"].as_array_mut().unwrap().push(hotel);
        assert!(matches!(parse(&document), Err(DatasetError::DuplicateHotel { .. })));

        let mut document = fixture();
        document["checklist"][1]["id"] = json!("passport");
        assert!(matches!(
            parse(&document),
            Err(DatasetError::DuplicateChecklistItem { id, .. }) if id == "passport"
        ));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let mut document = fixture();
        document["days"][0]["activities"][0]["coords"]["lat"] = json!(95.0);
        assert!(matches!(parse(&document), Err(DatasetError::CoordinatesOutOfRange { .. })));

        let mut document = fixture();
        document["locations"][0]["position"]["left"] = json!(140);
        assert!(matches!(parse(&document), Err(DatasetError::CoordinatesOutOfRange { .. })));

        let mut document = fixture();
        document["map"]["fallback_center"]["lng"] = json!(-200.0);
        assert!(matches!(parse(&document), Err(DatasetError::CoordinatesOutOfRange { .. })));
    }
}
