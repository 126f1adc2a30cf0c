use chrono::{DateTime, Utc};
use log::debug;
use crate::app::comparison::{ComparisonResult, PlaceComparison};
use crate::app::place::PlaceRecord;
use crate::constants::{DEFAULT_PAGE, DEFAULT_ROWS};
use crate::data::store::PlaceStore;
use crate::errors::{Param, QueryError};
use crate::lib::date_conv::current_datetime;
use crate::lib::translit::{to_presentation_script, to_storage_script};
use super::timezones::utc_offset_secs;

/// The four gazetteer queries over one store handle.
pub struct PlaceQueries<S: PlaceStore> {
    store: S,
}

fn normalized_name(raw: Option<&str>) -> Result<String, QueryError> {
    let name = to_storage_script(raw.unwrap_or(""));
    if name.is_empty() {
        Err(QueryError::MissingParameter(Param::Name))
    } else {
        Ok(name)
    }
}

fn zone_offset(place: &PlaceRecord, at: &DateTime<Utc>) -> Result<i32, QueryError> {
    utc_offset_secs(&place.timezone, at).ok_or_else(|| QueryError::UnknownTimezone(place.timezone.clone()))
}

impl<S: PlaceStore> PlaceQueries<S> {
    pub fn new(store: S) -> PlaceQueries<S> {
        PlaceQueries { store }
    }

    /// Zero counts as a missing id.
    pub fn get_by_id(&mut self, id: Option<i64>) -> Result<PlaceRecord, QueryError> {
        let id = id.filter(|id| *id != 0).ok_or(QueryError::MissingParameter(Param::Id))?;
        self.store.find_by_id(id)?.ok_or(QueryError::NotFound(Param::Id))
    }

    /**
     * Page through the table by identifier. Page n starts at the id
     * (n - 1) * rows above the smallest id in the store and holds at most rows records.
     */
    pub fn list_page(&mut self, page: Option<i64>, rows: Option<i64>) -> Result<Vec<PlaceRecord>, QueryError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let rows = rows.unwrap_or(DEFAULT_ROWS);
        if page <= 0 {
            return Err(QueryError::MissingParameter(Param::Page));
        }
        if rows <= 0 {
            return Err(QueryError::MissingParameter(Param::Rows));
        }
        let min_id = match self.store.min_id()? {
            Some(id) => id,
            None => return Ok(vec![]),
        };
        let start = (page - 1).checked_mul(rows).and_then(|skip| skip.checked_add(min_id));
        match start {
            Some(start) => {
                let limit = usize::try_from(rows).unwrap_or(usize::MAX);
                Ok(self.store.list_from_id(start, limit)?)
            },
            // beyond any representable id
            None => Ok(vec![]),
        }
    }

    pub fn compare_by_name(&mut self, first_name: Option<&str>, second_name: Option<&str>) -> Result<PlaceComparison, QueryError> {
        self.compare_by_name_at(first_name, second_name, current_datetime())
    }

    /// Compare two places by name with UTC offsets resolved at `at`.
    pub fn compare_by_name_at(&mut self, first_name: Option<&str>, second_name: Option<&str>, at: DateTime<Utc>) -> Result<PlaceComparison, QueryError> {
        let first_name = normalized_name(first_name.map(str::trim))?;
        let second_name = normalized_name(second_name.map(str::trim))?;
        debug!("comparing {} with {}", first_name, second_name);
        let first = self.store.find_by_name(&first_name)?;
        let second = self.store.find_by_name(&second_name)?;
        let (first, second) = match (first, second) {
            (Some(first), Some(second)) => (first, second),
            _ => return Err(QueryError::NotFound(Param::Name)),
        };
        let first_offset = zone_offset(&first, &at)?;
        let second_offset = zone_offset(&second, &at)?;
        let result = ComparisonResult::new(&first, first_offset, &second, second_offset);
        Ok(PlaceComparison { first, second, result })
    }

    /// Full names starting with the prefix, least populous first, in presentation script.
    pub fn autocomplete_by_name(&mut self, prefix: Option<&str>) -> Result<Vec<String>, QueryError> {
        let prefix = normalized_name(prefix.map(str::trim_start))?;
        let names = self.store.names_with_prefix(&prefix)?;
        Ok(names.iter().map(|name| to_presentation_script(name)).collect())
    }
}
