use chrono::NaiveDate;
use log::debug;
use mysql::*;
use mysql::prelude::*;
use super::super::args::*;
use super::super::constants::*;
use super::super::app::place::PlaceRecord;
use super::schema::{select_list, DATE_FORMAT};
use super::store::{PlaceSource, PlaceStore, StoreError};

#[derive(Debug, Clone)]
pub struct DbParameters {
    host: String,
    port: u16,
    db: String,
    user: String,
    pass: String,
}

impl DbParameters {
  pub fn url(&self) -> String {
    format!("mysql://{}:{}@{}:{}/{}", self.user, self.pass, self.host, self.port, self.db)
  }
}

pub fn parse_db_options(args: &Args) -> DbParameters {
  DbParameters{
      host: match_host(args),
      port: match_db_port(args),
      db: match_db(args),
      user: match_user(args),
      pass: match_pass(args),
  }
}

fn match_text_option(arg_var: &str, env_key: &str, default: &str) -> String {
  if arg_var.len() < 1 {
    dotenv::var(env_key).unwrap_or(default.to_string())
  } else {
    arg_var.to_owned()
  }
}

fn match_db(args: &Args) -> String {
  match_text_option(&args.db, "db_name", MYSQL_DB_DEFAULT)
}

fn match_user(args: &Args) -> String {
  match_text_option(&args.user, "db_user", MYSQL_USER_DEFAULT)
}

fn match_pass(args: &Args) -> String {
  match_text_option(&args.pass, "db_pass", MYSQL_PASS_DEFAULT)
}

fn match_host(args: &Args) -> String {
  match_text_option(&args.host, "db_host", MYSQL_HOST_DEFAULT)
}

fn match_db_port(args: &Args) -> u16 {
  let arg_var = args.port;
  if arg_var < 1 {
    let env_port = dotenv::var("db_port").unwrap_or(MYSQL_PORT_DEFAULT.to_string());
    if let Ok(port_num) = env_port.parse::<u16>() {
      port_num
    } else {
      MYSQL_PORT_DEFAULT
    }
  } else {
    arg_var
  }
}

pub fn open_pool(db_params: &DbParameters) -> std::result::Result<Pool, StoreError> {
  debug!("connecting to mysql://{}@{}:{}/{}", db_params.user, db_params.host, db_params.port, db_params.db);
  Ok(Pool::new(db_params.url().as_str())?)
}

impl PlaceSource for Pool {
  fn open(&self) -> std::result::Result<Box<dyn PlaceStore>, StoreError> {
    let conn = self.get_conn()?;
    debug!("acquired place store connection {}", conn.connection_id());
    Ok(Box::new(MysqlPlaceStore { conn }))
  }
}

/// A pooled connection scoped to one request; it goes back to the pool on drop.
pub struct MysqlPlaceStore {
  conn: PooledConn,
}

impl Drop for MysqlPlaceStore {
  fn drop(&mut self) {
    debug!("released place store connection {}", self.conn.connection_id());
  }
}

fn to_place(row: Row) -> std::result::Result<PlaceRecord, StoreError> {
  PlaceRecord::from_row_opt(row).map_err(|e| StoreError::Malformed(format!("{:?}", e.0)))
}

impl PlaceStore for MysqlPlaceStore {
  fn min_id(&mut self) -> std::result::Result<Option<i64>, StoreError> {
    let sql = format!("SELECT MIN(geonameid) FROM {}", PLACE_TABLE);
    let min = self.conn.query_first::<Option<i64>, _>(sql)?;
    Ok(min.flatten())
  }

  fn find_by_id(&mut self, id: i64) -> std::result::Result<Option<PlaceRecord>, StoreError> {
    let sql = format!("SELECT {} FROM {} WHERE geonameid = ?", select_list(), PLACE_TABLE);
    match self.conn.exec_first::<Row, _, _>(sql, (id,))? {
      Some(row) => Ok(Some(to_place(row)?)),
      None => Ok(None),
    }
  }

  fn list_from_id(&mut self, start: i64, limit: usize) -> std::result::Result<Vec<PlaceRecord>, StoreError> {
    let sql = format!("SELECT {} FROM {} WHERE geonameid >= ? ORDER BY geonameid LIMIT ?", select_list(), PLACE_TABLE);
    let rows = self.conn.exec::<Row, _, _>(sql, (start, limit as u64))?;
    rows.into_iter().map(to_place).collect()
  }

  fn find_by_name(&mut self, ascii_name: &str) -> std::result::Result<Option<PlaceRecord>, StoreError> {
    let sql = format!("SELECT {} FROM {} WHERE asciiname = ? ORDER BY population DESC, geonameid LIMIT 1", select_list(), PLACE_TABLE);
    match self.conn.exec_first::<Row, _, _>(sql, (ascii_name,))? {
      Some(row) => Ok(Some(to_place(row)?)),
      None => Ok(None),
    }
  }

  fn names_with_prefix(&mut self, prefix: &str) -> std::result::Result<Vec<String>, StoreError> {
    let sql = format!("SELECT asciiname FROM {} WHERE asciiname LIKE ? ORDER BY population, geonameid", PLACE_TABLE);
    let pattern = format!("{}%", escape_like(prefix));
    Ok(self.conn.exec::<String, _, _>(sql, (pattern,))?)
  }
}

/*
* LIKE treats % and _ as wildcards and \ as the escape character,
* so a user prefix has to be escaped to be matched literally
*/
pub fn escape_like(prefix: &str) -> String {
  let mut escaped = String::with_capacity(prefix.len());
  for c in prefix.chars() {
    if c == '\\' || c == '%' || c == '_' {
      escaped.push('\\');
    }
    escaped.push(c);
  }
  escaped
}

fn column<T: FromValue>(row: &Row, name: &str) -> Option<T> {
  row.get_opt::<T, &str>(name).and_then(|v| v.ok())
}

fn read_place(row: &Row) -> Option<PlaceRecord> {
  let modification_date = column::<String>(row, "modification_date")
    .and_then(|d| NaiveDate::parse_from_str(&d, DATE_FORMAT).ok())?;
  Some(PlaceRecord {
    id: column(row, "geonameid")?,
    name: column(row, "name")?,
    ascii_name: column(row, "asciiname")?,
    alternate_names: column(row, "alternatenames")?,
    latitude: column(row, "latitude")?,
    longitude: column(row, "longitude")?,
    feature_class: column(row, "feature_class")?,
    feature_code: column(row, "feature_code")?,
    country_code: column(row, "country_code")?,
    cc2: column(row, "cc2")?,
    admin1_code: column(row, "admin1_code")?,
    admin2_code: column(row, "admin2_code")?,
    admin3_code: column(row, "admin3_code")?,
    admin4_code: column(row, "admin4_code")?,
    population: column(row, "population")?,
    elevation: column(row, "elevation")?,
    dem: column(row, "dem")?,
    timezone: column(row, "timezone")?,
    modification_date,
  })
}

impl FromRow for PlaceRecord {
  fn from_row_opt(row: Row) -> std::result::Result<Self, FromRowError> {
    match read_place(&row) {
      Some(place) => Ok(place),
      None => Err(FromRowError(row)),
    }
  }
}
