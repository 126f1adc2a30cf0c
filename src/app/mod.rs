pub mod comparison;
pub mod place;
pub mod reply;
