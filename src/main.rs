use crate::config::DealsConfig;
use crate::pages::deal_pages;
use crate::sheet_interface::sheet_client::SheetClient;

use actix_web::{middleware, web::ThinData, App, HttpServer};
use confik::{Configuration as _, EnvSource};
use std::io;
use std::time::Duration;

use dotenv::dotenv;
use env_logger::Env;
use log::info;

mod config;
mod constants;
mod entities;
mod pages;
mod sheet_interface;

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    let config = match DealsConfig::builder()
        .override_with(EnvSource::new())
        .try_build() {
        Ok(config) => config,
        Err(build_error) => panic!("Could not create DealsConfig: {}", build_error),
    };

    env_logger::init_from_env(Env::default().default_filter_or(config.log_level.clone()));

    let sheet_client = match SheetClient::new(Duration::from_secs(config.fetch_timeout_secs)) {
        Ok(sheet_client) => sheet_client,
        Err(client_error) => panic!("Could not create SheetClient: {}", client_error),
    };

    info!("Serving deals from {} on http://{}", config.sheet_url, config.server_addr);

    let server_addr = config.server_addr.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(ThinData(sheet_client.clone()))
            .app_data(ThinData(config.clone()))
            .wrap(middleware::Logger::default())
            .service(deal_pages::deals_page)
         })
        .bind(server_addr)?
        .run()
        .await
}
