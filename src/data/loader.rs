use chrono::{Datelike, NaiveDate};
use log::{info, warn};
use mysql::prelude::*;
use mysql::{Params, Pool, Transaction, TxOpts, Value};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use thiserror::Error;
use super::super::constants::LOAD_BATCH_SIZE;
use super::schema::{create_table_sql, insert_sql, ColumnKind, DATE_FORMAT, PLACE_COLUMNS};
use super::store::StoreError;
use crate::services::timezones::is_valid_zone_name;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read dataset: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount { line: usize, expected: usize, found: usize },
    #[error("line {line}: invalid {column} value {value:?}")]
    InvalidValue { line: usize, column: &'static str, value: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<mysql::Error> for LoadError {
    fn from(e: mysql::Error) -> Self {
        LoadError::Store(e.into())
    }
}

const TIMEZONE_COLUMN: usize = 17;

/// A dump column converted according to its schema kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Null,
}

impl From<Field> for Value {
    fn from(field: Field) -> Value {
        match field {
            Field::Int(n) => Value::Int(n),
            Field::Float(n) => Value::Double(n),
            Field::Text(s) => Value::from(s),
            Field::Date(d) => Value::Date(d.year() as u16, d.month() as u8, d.day() as u8, 0, 0, 0, 0),
            Field::Null => Value::NULL,
        }
    }
}

fn parse_field(kind: ColumnKind, raw: &str) -> Option<Field> {
    match kind {
        ColumnKind::OptInt | ColumnKind::OptText if raw.is_empty() => Some(Field::Null),
        ColumnKind::Int | ColumnKind::OptInt => raw.parse::<i64>().ok().map(Field::Int),
        ColumnKind::Float => raw.parse::<f64>().ok().map(Field::Float),
        ColumnKind::Text | ColumnKind::OptText => Some(Field::Text(raw.to_owned())),
        ColumnKind::Date => NaiveDate::parse_from_str(raw, DATE_FORMAT).ok().map(Field::Date),
    }
}

/// Split one tab-separated dump line and type every column by the place schema.
pub fn parse_place_line(line: &str, line_no: usize) -> Result<Vec<Field>, LoadError> {
    let raw_fields: Vec<&str> = line.trim_end_matches(|c| c == '\n' || c == '\r').split('\t').collect();
    if raw_fields.len() != PLACE_COLUMNS.len() {
        return Err(LoadError::ColumnCount { line: line_no, expected: PLACE_COLUMNS.len(), found: raw_fields.len() });
    }
    PLACE_COLUMNS.iter().zip(raw_fields).map(|((column, kind), raw)| {
        parse_field(*kind, raw).ok_or_else(|| LoadError::InvalidValue { line: line_no, column: *column, value: raw.to_owned() })
    }).collect()
}

/// Where parsed batches go. Nothing written through a sink is visible until `commit` succeeds.
pub trait PlaceSink {
    fn insert_batch(&mut self, batch: Vec<Params>) -> Result<(), LoadError>;
    fn commit(self) -> Result<(), LoadError>;
}

impl<'a> PlaceSink for Transaction<'a> {
    fn insert_batch(&mut self, batch: Vec<Params>) -> Result<(), LoadError> {
        self.exec_batch(insert_sql(), batch)?;
        Ok(())
    }

    fn commit(self) -> Result<(), LoadError> {
        Transaction::commit(self)?;
        Ok(())
    }
}

/// Insert every line of the dump into the sink. Returns the number of rows inserted.
pub fn load_places<S: PlaceSink, R: BufRead>(sink: &mut S, reader: R) -> Result<usize, LoadError> {
    let mut batch: Vec<Params> = Vec::with_capacity(LOAD_BATCH_SIZE);
    let mut loaded = 0usize;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields = parse_place_line(&line, index + 1)?;
        if let Some(Field::Text(zone)) = fields.get(TIMEZONE_COLUMN) {
            if !is_valid_zone_name(zone) {
                warn!("line {}: unknown time zone {:?}, comparisons with this place will fail", index + 1, zone);
            }
        }
        batch.push(Params::Positional(fields.into_iter().map(Value::from).collect()));
        if batch.len() >= LOAD_BATCH_SIZE {
            loaded += batch.len();
            sink.insert_batch(std::mem::take(&mut batch))?;
            info!("staged {} places", loaded);
        }
    }
    if !batch.is_empty() {
        loaded += batch.len();
        sink.insert_batch(batch)?;
    }
    Ok(loaded)
}

/// Load the whole dump and commit once. On any error the sink is dropped uncommitted.
pub fn load_into<S: PlaceSink, R: BufRead>(mut sink: S, reader: R) -> Result<usize, LoadError> {
    let loaded = load_places(&mut sink, reader)?;
    sink.commit()?;
    Ok(loaded)
}

pub fn load_places_file(pool: &Pool, path: &str) -> Result<usize, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    let mut conn = pool.get_conn()?;
    // DDL commits implicitly in MySQL, so the table is created before the transaction opens
    conn.query_drop(create_table_sql())?;
    info!("loading places from {}", path);
    let tx = conn.start_transaction(TxOpts::default())?;
    let loaded = load_into(tx, reader)?;
    info!("finished loading {} places from {}", loaded, path);
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stages batches like a transaction would and publishes them on commit.
    #[derive(Default)]
    struct StagingSink {
        staged: usize,
        batches: usize,
        committed: usize,
    }

    impl PlaceSink for &mut StagingSink {
        fn insert_batch(&mut self, batch: Vec<Params>) -> Result<(), LoadError> {
            self.staged += batch.len();
            self.batches += 1;
            Ok(())
        }

        fn commit(self) -> Result<(), LoadError> {
            self.committed = self.staged;
            Ok(())
        }
    }

    fn dump(count: usize) -> String {
        (0..count).map(|n| MOSCOW.replacen("524901", &(524901 + n).to_string(), 1)).collect::<Vec<String>>().join("\n")
    }

    const MOSCOW: &str = "524901\tMoscow\tMoscow\tMOW,Maskva,Moskau\t55.75222\t37.61556\tP\tPPLC\tRU\t\t48\t\t\t\t10381222\t\t144\tEurope/Moscow\t2022-12-10";

    #[test]
    fn parses_a_dump_line() {
        let fields = parse_place_line(MOSCOW, 1).unwrap();
        assert_eq!(fields.len(), 19);
        assert_eq!(fields[0], Field::Int(524901));
        assert_eq!(fields[2], Field::Text("Moscow".to_owned()));
        assert_eq!(fields[4], Field::Float(55.75222));
        assert_eq!(fields[9], Field::Null);
        assert_eq!(fields[14], Field::Int(10381222));
        assert_eq!(fields[15], Field::Null);
        assert_eq!(fields[16], Field::Int(144));
        assert_eq!(fields[18], Field::Date(NaiveDate::from_ymd_opt(2022, 12, 10).unwrap()));
    }

    #[test]
    fn timezone_column_is_where_the_schema_says() {
        assert_eq!(PLACE_COLUMNS[TIMEZONE_COLUMN].0, "timezone");
        let fields = parse_place_line(MOSCOW, 1).unwrap();
        assert_eq!(fields[TIMEZONE_COLUMN], Field::Text("Europe/Moscow".to_owned()));
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let line = format!("{}\r\n", MOSCOW);
        assert!(parse_place_line(&line, 1).is_ok());
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = parse_place_line("524901\tMoscow", 7).unwrap_err();
        assert!(matches!(err, LoadError::ColumnCount { line: 7, expected: 19, found: 2 }));
    }

    #[test]
    fn names_the_offending_column() {
        let line = MOSCOW.replace("10381222", "many");
        let err = parse_place_line(&line, 3).unwrap_err();
        assert_eq!(err.to_string(), "line 3: invalid population value \"many\"");
        let line = MOSCOW.replace("2022-12-10", "yesterday");
        assert!(matches!(parse_place_line(&line, 4).unwrap_err(), LoadError::InvalidValue { column: "modification_date", .. }));
    }

    #[test]
    fn dates_become_mysql_dates() {
        let value = Value::from(Field::Date(NaiveDate::from_ymd_opt(2022, 12, 10).unwrap()));
        assert_eq!(value, Value::Date(2022, 12, 10, 0, 0, 0, 0));
        assert_eq!(Value::from(Field::Null), Value::NULL);
    }

    #[test]
    fn commits_every_row_once() {
        let mut sink = StagingSink::default();
        let loaded = load_into(&mut sink, dump(LOAD_BATCH_SIZE * 2 + 5).as_bytes()).unwrap();
        assert_eq!(loaded, LOAD_BATCH_SIZE * 2 + 5);
        assert_eq!(sink.batches, 3);
        assert_eq!(sink.committed, loaded);
    }

    #[test]
    fn a_bad_line_late_in_the_dump_commits_nothing() {
        let mut text = dump(LOAD_BATCH_SIZE + 10);
        text.push_str("\n524000\tBroken");
        let mut sink = StagingSink::default();
        let err = load_into(&mut sink, text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::ColumnCount { line, .. } if line == LOAD_BATCH_SIZE + 11));
        assert_eq!(sink.staged, LOAD_BATCH_SIZE);
        assert_eq!(sink.committed, 0);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = format!("{}\n\n{}\n", MOSCOW, MOSCOW.replacen("524901", "524902", 1));
        let mut sink = StagingSink::default();
        assert_eq!(load_into(&mut sink, text.as_bytes()).unwrap(), 2);
        assert_eq!(sink.committed, 2);
    }
}
