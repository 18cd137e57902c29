mod config;
mod error;
mod services;
mod storage;

use crate::config::Config;
use crate::storage::csv_log::CsvLog;
use crate::storage::writer::{start_row_writer, RowWriter};
use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::info;
use tokio::sync::mpsc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();
    let url = format!("http://{}:{}", config.host, config.port);

    // Single writer owning the CSV log
    let (tx, rx) = mpsc::channel(config.queue_capacity.max(1));
    let writer = RowWriter::new(tx);
    let log = CsvLog::new(config.output.clone(), config.column_layout);
    tokio::spawn(async move {
        start_row_writer(log, rx).await;
    });

    info!("Server running at {}", url);
    info!("Submissions: POST {}/submit", url);

    let body_limit = config.body_limit;
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::PayloadConfig::new(body_limit))
            .app_data(web::Data::new(writer.clone()))
            .service(services::submissions::configure_routes())
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
