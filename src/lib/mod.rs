pub mod date_conv;
pub mod translit;
