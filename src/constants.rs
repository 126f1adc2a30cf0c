pub const MYSQL_HOST_DEFAULT: &'static str = "127.0.0.1";
pub const MYSQL_PORT_DEFAULT: u16 = 3306;
pub const MYSQL_DB_DEFAULT: &'static str = "geoplaces";
pub const MYSQL_USER_DEFAULT: &'static str = "geoplaces";
pub const MYSQL_PASS_DEFAULT: &'static str = "";

pub const WEB_PORT_DEFAULT: u16 = 8000;

pub const PLACE_TABLE: &'static str = "geo_object";

// query-string defaults for the list route
pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_ROWS: i64 = 20;

// rows per INSERT batch when loading a GeoNames dump
pub const LOAD_BATCH_SIZE: usize = 1000;
