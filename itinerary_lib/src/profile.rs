use serde::{Deserialize, Serialize};

use crate::location::GeoPoint;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ThemeVariant {
    Light,
    Dark,
}

impl ThemeVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            ThemeVariant::Light => "theme-light",
            ThemeVariant::Dark => "theme-dark",
        }
    }
}

/// Everything the renderer needs to present a trip in its own look.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripProfile {
    pub title: String,
    pub accent: String,
    pub subtitle: String,
    pub date_range: String,
    pub tagline: String,
    pub highlights: Vec<String>,
    pub badges: Vec<String>,
    pub variant: ThemeVariant,
    pub display_font: String,
    pub accent_color: String,
    /// Shown on the map while nothing is selected.
    pub prompt: String,
    /// Pre-trip logistics, listed above the itinerary.
    #[serde(default)]
    pub notes: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MapSettings {
    pub background_image: String,
    pub tile_url: String,
    pub attribution: String,
    /// Initial geodetic viewport when no activity is selected.
    pub fallback_center: GeoPoint,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default = "default_fly_duration")]
    pub fly_duration_secs: f64,
}

fn default_zoom() -> f64 {
    13.0
}

fn default_fly_duration() -> f64 {
    1.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_settings_defaults() {
        let settings: MapSettings = serde_json::from_str(
            r#"{
                "background_image": "/map.jpg",
                "tile_url": "https://tiles/{z}/{x}/{y}.png",
                "attribution": "OSM",
                "fallback_center": { "lat": 1.0, "lng": 2.0 }
            }"#,
        )
        .unwrap();

        assert_eq!(settings.zoom, 13.0);
        assert_eq!(settings.fly_duration_secs, 1.5);
        assert_eq!(settings.fallback_center, GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn theme_class() {
        assert_eq!(ThemeVariant::Light.css_class(), "theme-light");
        assert_eq!(ThemeVariant::Dark.css_class(), "theme-dark");
    }
}
