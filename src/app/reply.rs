use serde::Serialize;
use crate::errors::QueryError;

/// JSON body of a query: the payload itself, or `{"error": message}`, never both.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Reply<T> {
  Found(T),
  Failed { error: String },
}

impl<T> Reply<T> {
  /// Faults are handed back to the caller so the request fails instead of being shaped.
  pub fn from_result(result: Result<T, QueryError>) -> Result<Reply<T>, QueryError> {
    match result {
      Ok(payload) => Ok(Reply::Found(payload)),
      Err(e) if e.is_fault() => Err(e),
      Err(e) => Ok(Reply::Failed { error: e.to_string() }),
    }
  }

  pub fn is_failed(&self) -> bool {
    matches!(self, Reply::Failed { .. })
  }
}
