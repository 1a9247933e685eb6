use actix_web::{error::JsonPayloadError, web, HttpRequest};
use sqlx::PgPool;

use crate::error::AppError;
use crate::handlers::{asset, health, maintenance};
use crate::repository::{AssetRepository, MaintenanceRepository};
use crate::service::{AssetService, MaintenanceService};

pub struct AppState {
    pub assets: AssetService,
    pub maintenance: MaintenanceService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let asset_repo = AssetRepository::new(pool.clone());
        AppState {
            assets: AssetService::new(asset_repo.clone()),
            maintenance: MaintenanceService::new(MaintenanceRepository::new(pool), asset_repo),
        }
    }
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(format!("Invalid JSON: {}", err)).into()
}

/// Registers every route. `AppState` must be provided by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::index).service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .configure(health::configure)
            .configure(asset::configure)
            .configure(maintenance::configure),
    );
}
