pub mod header;
pub mod hub;
pub mod illustrative_map;
pub mod map_component;
pub mod overlay;
pub mod panel;
