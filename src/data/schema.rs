use super::super::constants::PLACE_TABLE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
  Int,
  OptInt,
  Float,
  Text,
  OptText,
  Date,
}

impl ColumnKind {
  pub fn sql_type(&self) -> &'static str {
    match self {
      ColumnKind::Int => "BIGINT NOT NULL",
      ColumnKind::OptInt => "BIGINT NULL",
      ColumnKind::Float => "DOUBLE NOT NULL",
      ColumnKind::Text => "VARCHAR(200) COLLATE utf8mb4_bin NOT NULL",
      ColumnKind::OptText => "TEXT NULL",
      ColumnKind::Date => "DATE NOT NULL",
    }
  }
}

/*
* Columns of the GeoNames dump in file order. Both the loader and the place queries are driven
* by this list so the table, the inserted values and the selected values cannot drift apart.
*/
pub const PLACE_COLUMNS: [(&'static str, ColumnKind); 19] = [
  ("geonameid", ColumnKind::Int),
  ("name", ColumnKind::Text),
  ("asciiname", ColumnKind::Text),
  ("alternatenames", ColumnKind::OptText),
  ("latitude", ColumnKind::Float),
  ("longitude", ColumnKind::Float),
  ("feature_class", ColumnKind::OptText),
  ("feature_code", ColumnKind::OptText),
  ("country_code", ColumnKind::OptText),
  ("cc2", ColumnKind::OptText),
  ("admin1_code", ColumnKind::OptText),
  ("admin2_code", ColumnKind::OptText),
  ("admin3_code", ColumnKind::OptText),
  ("admin4_code", ColumnKind::OptText),
  ("population", ColumnKind::Int),
  ("elevation", ColumnKind::OptInt),
  ("dem", ColumnKind::OptInt),
  ("timezone", ColumnKind::Text),
  ("modification_date", ColumnKind::Date),
];

pub const DATE_FORMAT: &'static str = "%Y-%m-%d";

pub fn create_table_sql() -> String {
  let columns: Vec<String> = PLACE_COLUMNS.iter().map(|(name, kind)| format!("{} {}", name, kind.sql_type())).collect();
  format!("CREATE TABLE IF NOT EXISTS {} ({}, PRIMARY KEY (geonameid), INDEX idx_asciiname (asciiname)) DEFAULT CHARSET=utf8mb4",
    PLACE_TABLE, columns.join(", "))
}

/*
* Dates are selected as plain strings so rows can be read without the driver's date support
*/
pub fn select_list() -> String {
  PLACE_COLUMNS.iter().map(|(name, kind)| match kind {
    ColumnKind::Date => format!("DATE_FORMAT({0}, '{1}') AS {0}", name, DATE_FORMAT),
    _ => name.to_string(),
  }).collect::<Vec<String>>().join(", ")
}

pub fn insert_sql() -> String {
  let names: Vec<&str> = PLACE_COLUMNS.iter().map(|(name, _)| *name).collect();
  let marks = vec!["?"; PLACE_COLUMNS.len()];
  format!("INSERT INTO {} ({}) VALUES ({})", PLACE_TABLE, names.join(", "), marks.join(", "))
}
