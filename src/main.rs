extern crate serde_json;
extern crate chrono;

mod app;
mod args;
mod constants;
mod data;
mod errors;
mod lib;
mod services;
mod query_params;
mod routes;

use args::*;
use clap::Parser;
use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use data::{loader::load_places_file, mysql::*, store::PlaceSource};
use log::{error, info};
use routes::*;
use std::{io, sync::Arc};

#[actix_web::main]
async fn main()  -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let db_params = parse_db_options(&args);
    let pool = open_pool(&db_params).map_err(|e| {
        error!("{}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;

    if let Some(path) = args.load.as_deref() {
        return match load_places_file(&pool, path) {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("{}", e);
                Err(io::Error::new(io::ErrorKind::Other, e.to_string()))
            }
        };
    }

    let source: Arc<dyn PlaceSource> = Arc::new(pool);
    let source = Data::from(source);
    let port = args.webport;
    info!("serving places on 127.0.0.1:{}", port);
    HttpServer::new(move || {
        App::new()
        .app_data(source.clone())
        .wrap(Logger::default())
        .configure(configure_routes)
  })
  .bind(("127.0.0.1", port))?
  .run()
  .await
}
