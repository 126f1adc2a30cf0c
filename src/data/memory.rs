use chrono::NaiveDate;
use std::sync::Arc;
use crate::app::place::PlaceRecord;
use super::store::{PlaceSource, PlaceStore, StoreError};

/// In-memory place table; rows are kept in ascending id order like the primary key index.
#[derive(Debug, Clone)]
pub struct MemoryPlaceStore {
  rows: Arc<Vec<PlaceRecord>>,
}

impl MemoryPlaceStore {
  pub fn new(mut rows: Vec<PlaceRecord>) -> Self {
    rows.sort_by_key(|r| r.id);
    MemoryPlaceStore { rows: Arc::new(rows) }
  }
}

impl PlaceStore for MemoryPlaceStore {
  fn min_id(&mut self) -> Result<Option<i64>, StoreError> {
    Ok(self.rows.first().map(|r| r.id))
  }

  fn find_by_id(&mut self, id: i64) -> Result<Option<PlaceRecord>, StoreError> {
    Ok(self.rows.iter().find(|r| r.id == id).cloned())
  }

  fn list_from_id(&mut self, start: i64, limit: usize) -> Result<Vec<PlaceRecord>, StoreError> {
    Ok(self.rows.iter().filter(|r| r.id >= start).take(limit).cloned().collect())
  }

  fn find_by_name(&mut self, ascii_name: &str) -> Result<Option<PlaceRecord>, StoreError> {
    let mut matches: Vec<&PlaceRecord> = self.rows.iter().filter(|r| r.ascii_name == ascii_name).collect();
    matches.sort_by(|a, b| b.population.cmp(&a.population).then(a.id.cmp(&b.id)));
    Ok(matches.first().map(|r| (*r).clone()))
  }

  fn names_with_prefix(&mut self, prefix: &str) -> Result<Vec<String>, StoreError> {
    let mut matches: Vec<&PlaceRecord> = self.rows.iter().filter(|r| r.ascii_name.starts_with(prefix)).collect();
    matches.sort_by(|a, b| a.population.cmp(&b.population).then(a.id.cmp(&b.id)));
    Ok(matches.into_iter().map(|r| r.ascii_name.clone()).collect())
  }
}

impl PlaceSource for MemoryPlaceStore {
  fn open(&self) -> Result<Box<dyn PlaceStore>, StoreError> {
    Ok(Box::new(self.clone()))
  }
}

/// A store that cannot be reached.
#[derive(Debug, Clone, Copy)]
pub struct DownPlaceStore;

impl PlaceStore for DownPlaceStore {
  fn min_id(&mut self) -> Result<Option<i64>, StoreError> {
    Err(StoreError::Unavailable("connection refused".to_owned()))
  }

  fn find_by_id(&mut self, _id: i64) -> Result<Option<PlaceRecord>, StoreError> {
    Err(StoreError::Unavailable("connection refused".to_owned()))
  }

  fn list_from_id(&mut self, _start: i64, _limit: usize) -> Result<Vec<PlaceRecord>, StoreError> {
    Err(StoreError::Unavailable("connection refused".to_owned()))
  }

  fn find_by_name(&mut self, _ascii_name: &str) -> Result<Option<PlaceRecord>, StoreError> {
    Err(StoreError::Unavailable("connection refused".to_owned()))
  }

  fn names_with_prefix(&mut self, _prefix: &str) -> Result<Vec<String>, StoreError> {
    Err(StoreError::Unavailable("connection refused".to_owned()))
  }
}

impl PlaceSource for DownPlaceStore {
  fn open(&self) -> Result<Box<dyn PlaceStore>, StoreError> {
    Err(StoreError::Unavailable("connection refused".to_owned()))
  }
}

/// Record with only the columns the queries look at filled in.
pub fn place(id: i64, ascii_name: &str, latitude: f64, population: i64, timezone: &str) -> PlaceRecord {
  PlaceRecord {
    id,
    name: ascii_name.to_owned(),
    ascii_name: ascii_name.to_owned(),
    alternate_names: None,
    latitude,
    longitude: 0f64,
    feature_class: None,
    feature_code: None,
    country_code: None,
    cc2: None,
    admin1_code: None,
    admin2_code: None,
    admin3_code: None,
    admin4_code: None,
    population,
    elevation: None,
    dem: None,
    timezone: timezone.to_owned(),
    modification_date: NaiveDate::default(),
  }
}

/// A small slice of the Russian GeoNames dump with contiguous ids starting at 3017382.
pub fn sample_places() -> Vec<PlaceRecord> {
  vec![
    place(3017382, "Moscow", 55.75222, 10381222, "Europe/Moscow"),
    place(3017383, "Moskva", 55.75222, 10381222, "Europe/Moscow"),
    place(3017384, "Yekaterinburg", 56.8519, 1349772, "Asia/Yekaterinburg"),
    place(3017385, "Sankt-Peterburg", 59.93863, 5351935, "Europe/Moscow"),
    place(3017386, "Moskva", 57.3, 150, "Europe/Moscow"),
    place(3017387, "Mozhaysk", 55.50693, 31470, "Europe/Moscow"),
    place(3017388, "Nizhniy Novgorod", 56.32867, 1284164, "Europe/Moscow"),
    place(3017389, "Khabarovsk", 48.48271, 579000, "Asia/Vladivostok"),
    place(3017390, "Kaliningrad", 54.70649, 434954, "Europe/Kaliningrad"),
    place(3017391, "Tolyatti", 53.5303, 702879, "Europe/Samara"),
    place(3017392, "Bryansk", 53.25209, 427236, "Europe/Moscow"),
    place(3017393, "Mozdok", 43.74, 38000, "Europe/Moscow"),
  ]
}
