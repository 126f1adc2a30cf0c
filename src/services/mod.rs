pub mod places;
pub mod timezones;
