use clap::Parser;
use super::constants::*;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
  // -H MySql/MariaDB host, falls back to db_host in .env
  #[clap(short = 'H', long, value_parser, default_value_t = String::new() )]
  pub host: String,
  // -P MySql/MariaDB port, falls back to db_port in .env
  #[clap(short = 'P', long, value_parser, default_value_t = 0 )]
  pub port: u16,
  // -d MySql/MariaDB database name
  #[clap(short, long, value_parser, default_value_t = String::new() )]
  pub db: String,
  // -u MySql/MariaDB user name
  #[clap(short, long, value_parser, default_value_t = String::new() )]
  pub user: String,
  // -p MySql/MariaDB password
  #[clap(short, long, value_parser, default_value_t = String::new() )]
  pub pass: String,
  // -w place service port
  #[clap(short, long, value_parser, default_value_t = WEB_PORT_DEFAULT )]
  pub webport: u16,
  // -l load a tab-separated GeoNames dump into the place table and exit
  #[clap(short, long, value_parser)]
  pub load: Option<String>,
}
