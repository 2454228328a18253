mod assets;
mod config;

use crate::config::HostConfig;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = HostConfig::load();
    let url = config.url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url_clone) {
                warn!("Could not open browser: {}", err);
            }
        });
    }

    info!(
        "Certificate desk running at {} (student API: {})",
        url,
        config.api.base_url()
    );

    let api = web::Data::new(config.api.clone());

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(api.clone())
            .route(assets::CONFIG_PATH, web::get().to(assets::config_json))
            .default_service(web::route().to(assets::serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
