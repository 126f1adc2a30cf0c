use actix_web::{get, error::InternalError, web::{self, Data, Json, Path, Query, ServiceConfig}, HttpResponse, Responder};
use serde_json::json;
use crate::app::reply::Reply;
use crate::data::store::{PlaceSource, PlaceStore, StoreError};
use crate::errors::QueryError;
use crate::query_params::*;
use crate::services::places::PlaceQueries;

pub async fn route_not_found() -> impl Responder {
  Json( json!({ "valid": false, "error": "route not found" }))
}

/*
* Runs one query on the blocking pool with a store handle that lives exactly as long as the query
*/
async fn run_query<T, F>(source: Data<dyn PlaceSource>, query: F) -> Result<T, QueryError>
where
  T: Send + 'static,
  F: FnOnce(&mut PlaceQueries<Box<dyn PlaceStore>>) -> Result<T, QueryError> + Send + 'static,
{
  let outcome = web::block(move || -> Result<T, QueryError> {
    let store = source.open()?;
    let mut queries = PlaceQueries::new(store);
    query(&mut queries)
  }).await;
  match outcome {
    Ok(result) => result,
    Err(e) => Err(QueryError::StoreUnavailable(StoreError::Unavailable(e.to_string()))),
  }
}

#[get("/{id:\\d+}")]
pub async fn place_by_id(source: Data<dyn PlaceSource>, path: Path<String>) -> Result<HttpResponse, QueryError> {
  let result = match match_place_id(&path.into_inner()) {
    Ok(id) => run_query(source, move |q| q.get_by_id(Some(id))).await,
    Err(e) => Err(e),
  };
  Ok(HttpResponse::Ok().json(Reply::from_result(result)?))
}

#[get("/")]
pub async fn list_places(source: Data<dyn PlaceSource>, params: Query<PageOptions>) -> Result<HttpResponse, QueryError> {
  let PageOptions { page, rows } = params.into_inner();
  let reply = Reply::from_result(run_query(source, move |q| q.list_page(page, rows)).await)?;
  // this route always answers with an array, errors included
  if reply.is_failed() {
    Ok(HttpResponse::Ok().json(vec![reply]))
  } else {
    Ok(HttpResponse::Ok().json(reply))
  }
}

#[get("/compare")]
pub async fn compare_places(source: Data<dyn PlaceSource>, params: Query<CompareOptions>) -> Result<HttpResponse, QueryError> {
  let CompareOptions { first_name, second_name } = params.into_inner();
  let result = run_query(source, move |q| q.compare_by_name(first_name.as_deref(), second_name.as_deref())).await;
  Ok(HttpResponse::Ok().json(Reply::from_result(result)?))
}

#[get("/glossary")]
pub async fn glossary(source: Data<dyn PlaceSource>, params: Query<GlossaryOptions>) -> Result<HttpResponse, QueryError> {
  let GlossaryOptions { name } = params.into_inner();
  let result = run_query(source, move |q| q.autocomplete_by_name(name.as_deref())).await;
  Ok(HttpResponse::Ok().json(Reply::from_result(result)?))
}

pub fn configure_routes(cfg: &mut ServiceConfig) {
  cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
      let body = json!({ "error": err.to_string() });
      InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    }))
    .service(compare_places)
    .service(glossary)
    .service(list_places)
    .service(place_by_id)
    .default_service(web::to(route_not_found));
}
