use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use serde_json::json;
use std::fmt;
use thiserror::Error;
use crate::data::store::StoreError;

/// Request inputs an operation can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
  Id,
  Page,
  Rows,
  Name,
}

impl Param {
  pub fn key(&self) -> &'static str {
    match self {
      Param::Id => "id",
      Param::Page => "page",
      Param::Rows => "rows",
      Param::Name => "name",
    }
  }

  fn label(&self) -> &'static str {
    match self {
      Param::Id => "id",
      Param::Page => "number of page",
      Param::Rows => "number of rows",
      Param::Name => "name of the object",
    }
  }
}

impl fmt::Display for Param {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

#[derive(Debug, Error)]
pub enum QueryError {
  #[error("Please, enter the {} at first.", .0.label())]
  MissingParameter(Param),
  #[error("Incorrect {0}.")]
  NotFound(Param),
  #[error(transparent)]
  StoreUnavailable(#[from] StoreError),
  #[error("unknown time zone {0}")]
  UnknownTimezone(String),
}

impl QueryError {
  /// Faults abort the request; the rest are answered with an error body.
  pub fn is_fault(&self) -> bool {
    matches!(self, QueryError::StoreUnavailable(_) | QueryError::UnknownTimezone(_))
  }
}

impl ResponseError for QueryError {
  fn status_code(&self) -> StatusCode {
    if self.is_fault() {
      StatusCode::INTERNAL_SERVER_ERROR
    } else {
      StatusCode::OK
    }
  }

  fn error_response(&self) -> HttpResponse {
    if self.is_fault() {
      // driver details stay in the log
      error!("request aborted: {}", self);
      return HttpResponse::InternalServerError().finish();
    }
    HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
  }
}
