mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod routes;
mod services;
mod state;
mod structs;
mod utils;

use std::sync::Arc;

use crate::config::app_config::AppConfig;
use crate::db::mongodb::MongoStore;
use crate::services::content::seed_default_content;
use crate::services::file_storage::{FileStorage, PUBLIC_PREFIX};
use crate::state::app_state::AppState;
use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware::Logger, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use routes::init_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize the database connection
    let store = match MongoStore::connect(&config.mongo_url, &config.db_name).await {
        Ok(store) => store,
        Err(e) => {
            error!("Error connecting to the database: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = seed_default_content(&store).await {
        error!("Failed to seed default content: {:#}", e);
        std::process::exit(1);
    }

    let files = FileStorage::new(config.uploads_dir.clone(), config.base_url.clone());
    if let Err(e) = files.ensure_dir().await {
        error!("{:#}", e);
        std::process::exit(1);
    }

    let client = store.client().clone();
    let app_state = web::Data::new(AppState {
        store: Arc::new(store),
        files,
    });

    let server_config = config.clone();
    info!("Listening on {}:{}", config.bind_address, config.port);

    HttpServer::new(move || {
        let logger = Logger::new("%a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %D ms");
        let cors = cors_from_config(&server_config);
        App::new()
            .wrap(logger)
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(init_routes)
            .service(Files::new(PUBLIC_PREFIX, app_state.files.dir()))
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await?;

    info!("Server stopped, closing database connection");
    client.shutdown().await;
    Ok(())
}

fn cors_from_config(config: &AppConfig) -> Cors {
    let cors = if config.allows_any_origin() {
        Cors::default().allow_any_origin()
    } else {
        config
            .cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .supports_credentials()
    };

    cors.allow_any_method().allow_any_header().max_age(3600)
}
