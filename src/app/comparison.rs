use serde::{Serialize, Serializer};
use crate::app::place::PlaceRecord;
use crate::lib::date_conv::secs_to_duration_string;

/// Timezone and latitude comparison of two places.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ComparisonResult {
  #[serde(rename="is equal timezone")]
  pub is_equal_timezone: bool,
  #[serde(rename="difference", skip_serializing_if = "Option::is_none", serialize_with = "serialize_difference")]
  pub offset_difference: Option<i64>,
  #[serde(rename="id northernmost")]
  pub northernmost_id: Option<i64>,
}

fn serialize_difference<S: Serializer>(secs: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
  match secs {
    Some(secs) => serializer.serialize_str(&secs_to_duration_string(*secs)),
    None => serializer.serialize_none(),
  }
}

impl ComparisonResult {
  /// Offsets are seconds east of UTC at the same instant.
  pub fn new(first: &PlaceRecord, first_offset: i32, second: &PlaceRecord, second_offset: i32) -> ComparisonResult {
    let is_equal_timezone = first_offset == second_offset;
    let offset_difference = if is_equal_timezone {
      None
    } else {
      Some((first_offset as i64 - second_offset as i64).abs())
    };
    let northernmost_id = if first.latitude > second.latitude {
      Some(first.id)
    } else if first.latitude < second.latitude {
      Some(second.id)
    } else {
      None
    };
    ComparisonResult { is_equal_timezone, offset_difference, northernmost_id }
  }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PlaceComparison {
  #[serde(rename="first object")]
  pub first: PlaceRecord,
  #[serde(rename="second object")]
  pub second: PlaceRecord,
  #[serde(rename="compare result")]
  pub result: ComparisonResult,
}
