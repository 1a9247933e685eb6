use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;

use asset_maintenance_be::app::{self, AppState};
use asset_maintenance_be::config::Config;

fn cors(allowed_origin: Option<&str>) -> Cors {
    let cors = Cors::default()
        .allow_any_header()
        .allow_any_method()
        .supports_credentials();
    match allowed_origin {
        Some(origin) => cors.allowed_origin(origin),
        None => cors.allow_any_origin(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    let pool = match PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            log::info!("Connection to the database is successful");
            pool
        }
        Err(err) => {
            log::error!("Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    if config.run_migrations {
        if let Err(err) = sqlx::migrate!("./migrations").run(&pool).await {
            log::error!("Failed to run migrations: {}", err);
            std::process::exit(1);
        }
        log::info!("Migrations applied");
    }

    let state = web::Data::new(AppState::new(pool));
    let allowed_origin = config.cors_allowed_origin.clone();

    log::info!(
        "Server starting on {}:{}",
        config.http_host,
        config.http_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors(allowed_origin.as_deref()))
            .wrap(Logger::default())
            .configure(app::configure)
    })
    .bind((config.http_host.as_str(), config.http_port))?
    .run()
    .await
}
