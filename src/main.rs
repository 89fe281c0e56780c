use actix_web::{App, HttpServer, middleware, web};

use ramaera::config::AppConfig;
use ramaera::handlers;
use ramaera::models::shareholder::ShareholderStore;
use ramaera::models::slide::Deck;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env may set RUST_LOG, so load it before the logger
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    if let Err(e) = dotenv {
        log::debug!("No .env file loaded: {e}");
    }
    let config = AppConfig::from_env();

    // The deck is validated once; a bad slide table stops startup
    let deck = match &config.slides_path {
        Some(path) => {
            log::info!("Loading slides from {}", path.display());
            Deck::from_file(path)
        }
        None => Deck::builtin(),
    }
    .map_err(|e| {
        log::error!("Invalid slide deck: {e}");
        std::io::Error::other(e)
    })?;
    log::info!("Slide deck ready ({} slides)", deck.len());

    let store = ShareholderStore::new();
    let bind_addr = config.bind_addr.clone();

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(deck.clone()))
            .app_data(web::Data::new(store.clone()))
            // Static files
            .service(actix_files::Files::new("/static", &config.static_dir))
            .service(actix_files::Files::new("/assets", &config.assets_dir))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::site_handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
