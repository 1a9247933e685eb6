use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::app::AppState;
use crate::error::AppError;
use crate::identity::AuthenticatedUser;
use crate::model::{MaintenancePatch, NewMaintenance};

#[post("/maintenance")]
async fn post_maintenance(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    request: web::Json<NewMaintenance>,
) -> Result<HttpResponse, AppError> {
    let record = data
        .maintenance
        .create(user.id(), request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(record))
}

#[get("/maintenance/history")]
async fn get_history(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let records = data.maintenance.history(user.id()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "rows": records.len(),
        "maintenance": records
    })))
}

#[get("/maintenance/pending")]
async fn get_pending(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let pending = data.maintenance.pending(user.id()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "rows": pending.len(),
        "pending": pending
    })))
}

#[put("/maintenance/{id}")]
async fn put_maintenance(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(i32,)>,
    request: web::Json<MaintenancePatch>,
) -> Result<HttpResponse, AppError> {
    let maintenance_id = path.into_inner().0;
    let record = data
        .maintenance
        .update(maintenance_id, user.id(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(record))
}

#[delete("/maintenance/{id}")]
async fn delete_maintenance(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(i32,)>,
) -> Result<HttpResponse, AppError> {
    let maintenance_id = path.into_inner().0;
    let record = data.maintenance.delete(maintenance_id, user.id()).await?;
    Ok(HttpResponse::Ok().json(record))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_history)
        .service(get_pending)
        .service(post_maintenance)
        .service(put_maintenance)
        .service(delete_maintenance);
}
