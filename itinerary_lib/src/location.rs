use geo_types::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

// geo-types stores x as longitude and y as latitude
impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Point::new(point.lng, point.lat)
    }
}

impl From<Point<f64>> for GeoPoint {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

/// Marker placement on the illustrative map, in percent of the image size
/// measured from its top-left corner.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RelativePosition {
    pub top: f64,
    pub left: f64,
}

impl RelativePosition {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    pub fn is_valid(&self) -> bool {
        (0.0..=100.0).contains(&self.top) && (0.0..=100.0).contains(&self.left)
    }

    pub fn to_css(&self) -> String {
        format!("top: {}%; left: {}%;", self.top, self.left)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub position: RelativePosition,
    pub coords: GeoPoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_point_maps_latitude_to_y() {
        let point: Point<f64> = GeoPoint::new(-8.5069, 115.2625).into();
        assert_eq!(point.x(), 115.2625);
        assert_eq!(point.y(), -8.5069);
        assert_eq!(GeoPoint::from(point), GeoPoint::new(-8.5069, 115.2625));
    }

    #[test]
    fn coordinate_ranges() {
        assert!(GeoPoint::new(90.0, -180.0).is_valid());
        assert!(!GeoPoint::new(90.5, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, 181.0).is_valid());

        assert!(RelativePosition::new(0.0, 100.0).is_valid());
        assert!(!RelativePosition::new(-1.0, 50.0).is_valid());
        assert!(!RelativePosition::new(50.0, 100.5).is_valid());
    }

    #[test]
    fn relative_position_css() {
        assert_eq!(RelativePosition::new(62.0, 54.5).to_css(), "top: 62%; left: 54.5%;");
    }
}
