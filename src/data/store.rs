use thiserror::Error;
use crate::app::place::PlaceRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("place store unavailable: {0}")]
    Unavailable(String),
    #[error("malformed place row: {0}")]
    Malformed(String),
}

impl From<::mysql::Error> for StoreError {
    fn from(e: ::mysql::Error) -> Self {
        StoreError::Unavailable(e.to_string())
    }
}

/// Read-only view of the place table held for the duration of one request.
pub trait PlaceStore {
    fn min_id(&mut self) -> Result<Option<i64>, StoreError>;

    fn find_by_id(&mut self, id: i64) -> Result<Option<PlaceRecord>, StoreError>;

    /// Up to `limit` records with `geonameid >= start`, ascending by id.
    fn list_from_id(&mut self, start: i64, limit: usize) -> Result<Vec<PlaceRecord>, StoreError>;

    /// Exact `asciiname` match, the most populous place first.
    fn find_by_name(&mut self, ascii_name: &str) -> Result<Option<PlaceRecord>, StoreError>;

    /// Every `asciiname` starting with `prefix`, ascending by population.
    fn names_with_prefix(&mut self, prefix: &str) -> Result<Vec<String>, StoreError>;
}

impl<S: PlaceStore + ?Sized> PlaceStore for Box<S> {
    fn min_id(&mut self) -> Result<Option<i64>, StoreError> {
        (**self).min_id()
    }

    fn find_by_id(&mut self, id: i64) -> Result<Option<PlaceRecord>, StoreError> {
        (**self).find_by_id(id)
    }

    fn list_from_id(&mut self, start: i64, limit: usize) -> Result<Vec<PlaceRecord>, StoreError> {
        (**self).list_from_id(start, limit)
    }

    fn find_by_name(&mut self, ascii_name: &str) -> Result<Option<PlaceRecord>, StoreError> {
        (**self).find_by_name(ascii_name)
    }

    fn names_with_prefix(&mut self, prefix: &str) -> Result<Vec<String>, StoreError> {
        (**self).names_with_prefix(prefix)
    }
}

/// Hands out a fresh store handle per request. The handle is released when dropped.
pub trait PlaceSource: Send + Sync {
    fn open(&self) -> Result<Box<dyn PlaceStore>, StoreError>;
}
