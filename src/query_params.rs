use serde::Deserialize;
use crate::errors::{Param, QueryError};

#[derive(Deserialize, Debug, Default)]
pub struct PageOptions {
  pub page: Option<i64>, // 1-based page number, default 1
  pub rows: Option<i64>, // rows per page, default 20
}

#[derive(Deserialize, Debug, Default)]
pub struct CompareOptions {
  pub first_name: Option<String>, // place name in Cyrillic or Latin script
  pub second_name: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct GlossaryOptions {
  pub name: Option<String>, // leading part of a place name
}

/*
* The route only accepts digits, so a segment that does not parse
* is too large to be a stored identifier
*/
pub fn match_place_id(segment: &str) -> Result<i64, QueryError> {
  segment.parse::<i64>().map_err(|_| QueryError::NotFound(Param::Id))
}
