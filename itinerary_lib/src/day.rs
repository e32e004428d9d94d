use serde::{Deserialize, Serialize};

use crate::location::{GeoPoint, RelativePosition};

const SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Kind of activity. Only drives which icon the renderer shows.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    Sunrise,
    Sunset,
    Lodging,
    Water,
    Mountain,
    Nature,
    Cafe,
    Ride,
    Fire,
    Highlight,
    Transit,
    Race,
    Photo,
    Viewing,
    Safety,
    Walking,
    Dining,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    /// Display label only, not guaranteed to sort.
    pub time: String,
    pub category: ActivityCategory,
    pub location_id: String,
    /// Free-text query for the external place search, already `+`-joined.
    pub query: String,
    pub coords: GeoPoint,
    pub position: RelativePosition,
}

impl Activity {
    pub fn search_url(&self) -> String {
        format!("{SEARCH_URL}{}", self.query)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Day {
    pub day: u32,
    pub date: String,
    pub title: String,
    pub color: String,
    /// Location ids visited in order. May be empty.
    #[serde(default)]
    pub route: Vec<String>,
    pub activities: Vec<Activity>,
}

impl Day {
    pub fn activity(&self, index: usize) -> Option<&Activity> {
        self.activities.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_appends_query() {
        let activity = Activity {
            name: "Ubud Market".into(),
            time: "5:00 PM".into(),
            category: ActivityCategory::Cafe,
            location_id: "ubud".into(),
            query: "Ubud+Market+Bali".into(),
            coords: GeoPoint::new(-8.5069, 115.2625),
            position: RelativePosition::new(45.0, 52.0),
        };

        assert_eq!(
            activity.search_url(),
            "https://www.google.com/maps/search/?api=1&query=Ubud+Market+Bali"
        );
    }

    #[test]
    fn category_uses_snake_case() {
        let category: ActivityCategory = serde_json::from_str("\"highlight\"").unwrap();
        assert_eq!(category, ActivityCategory::Highlight);
        assert!(serde_json::from_str::<ActivityCategory>("\"Highlight\"").is_err());
    }
}
