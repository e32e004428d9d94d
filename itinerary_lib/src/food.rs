use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FoodCategory {
    pub name: String,
    pub items: Vec<FoodItem>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FoodItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    /// Place to highlight on the map when the entry is picked.
    #[serde(default)]
    pub location_id: Option<String>,
}
