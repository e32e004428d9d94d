use serde::{Deserialize, Serialize};

use crate::day::ActivityCategory;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Hotel {
    pub name: String,
    /// Human readable area, e.g. "Ubud".
    pub area: String,
    pub dates: String,
    pub room: String,
    /// Identifies the hotel for selection and resolves in the trip's locations.
    pub location_id: String,
    pub category: ActivityCategory,
    pub color: String,
}
