use chrono::NaiveDate;
use serde::Serialize;

/// One GeoNames row. Field order follows the dump columns, serialized keys are the column names.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PlaceRecord {
    #[serde(rename="geonameid")]
    pub id: i64,
    pub name: String,
    #[serde(rename="asciiname")]
    pub ascii_name: String,
    #[serde(rename="alternatenames")]
    pub alternate_names: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub feature_class: Option<String>,
    pub feature_code: Option<String>,
    pub country_code: Option<String>,
    pub cc2: Option<String>,
    pub admin1_code: Option<String>,
    pub admin2_code: Option<String>,
    pub admin3_code: Option<String>,
    pub admin4_code: Option<String>,
    pub population: i64,
    pub elevation: Option<i64>,
    pub dem: Option<i64>,
    pub timezone: String,
    pub modification_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::data::memory::place;

    #[test]
    fn serializes_with_column_names() {
        let mut moscow = place(3017382, "Moscow", 55.75222, 10381222, "Europe/Moscow");
        moscow.modification_date = NaiveDate::from_ymd_opt(2022, 12, 10).unwrap();
        let value = serde_json::to_value(&moscow).unwrap();
        assert_eq!(value["geonameid"], json!(3017382));
        assert_eq!(value["asciiname"], json!("Moscow"));
        assert_eq!(value["alternatenames"], json!(null));
        assert_eq!(value["timezone"], json!("Europe/Moscow"));
        assert_eq!(value["modification_date"], json!("2022-12-10"));
        assert_eq!(value.as_object().unwrap().len(), 19);
    }
}
