mod cors;

use actix_web::{
    App, HttpResponse, HttpServer, Responder, get,
    web::{self},
};
use common::env_config::Config;

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let is_production = config.is_production();
    let origin = config.cors_allowed_origin.clone();

    // init logger
    if config.console_logging_enabled {
        let level = if is_production {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Debug
        };
        logger::setup(level).expect("Failed to set up logger");
    }

    // init db connection
    let pool = db::setup(&config.database_url, is_production)
        .await
        .expect("Failed to set up database");

    if config.lemon_settings().is_err() {
        log::warn!("Lemon Squeezy is not configured, provider procedures will fail");
    }

    log::info!(
        "Starting server on {}:{}",
        config.server_host,
        config.server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .wrap(api_auth::auth_middleware(&config_data.jwt_secret)) // 3rd
            .wrap(logger::middleware(config_data.console_logging_enabled)) // 2nd
            .wrap(cors::middleware(&origin)) // 1st
            .service(health)
            .service(
                web::scope("/api")
                    .service(api_subs::mount_subs())
                    .service(api_subs::mount_catalog())
                    .service(api_subs::mount_pay())
                    .service(api_usage::mount_usage()),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
