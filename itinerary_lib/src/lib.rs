pub mod catalog;
pub mod checklist;
pub mod day;
pub mod food;
pub mod hotel;
pub mod location;
pub mod profile;
pub mod projection;
pub mod selection;
pub mod store;
pub mod trip;
