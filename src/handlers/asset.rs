use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::app::AppState;
use crate::error::AppError;
use crate::identity::AuthenticatedUser;
use crate::model::{AssetPatch, NewAsset};

#[post("/assets")]
async fn post_asset(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    request: web::Json<NewAsset>,
) -> Result<HttpResponse, AppError> {
    let asset = data.assets.create(user.id(), request.into_inner()).await?;
    Ok(HttpResponse::Created().json(asset))
}

#[get("/assets")]
async fn get_assets(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let assets = data.assets.list(user.id()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "rows": assets.len(),
        "assets": assets
    })))
}

#[put("/assets/{id}")]
async fn put_asset(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(i32,)>,
    request: web::Json<AssetPatch>,
) -> Result<HttpResponse, AppError> {
    let asset_id = path.into_inner().0;
    let asset = data
        .assets
        .update(asset_id, user.id(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(asset))
}

#[delete("/assets/{id}")]
async fn delete_asset(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(i32,)>,
) -> Result<HttpResponse, AppError> {
    let asset_id = path.into_inner().0;
    let asset = data.assets.delete(asset_id, user.id()).await?;
    Ok(HttpResponse::Ok().json(asset))
}

#[get("/assets/{id}/maintenance")]
async fn get_asset_maintenance(
    data: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(i32,)>,
) -> Result<HttpResponse, AppError> {
    let asset_id = path.into_inner().0;
    let records = data.maintenance.asset_history(asset_id, user.id()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "rows": records.len(),
        "maintenance": records
    })))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(post_asset)
        .service(get_assets)
        .service(put_asset)
        .service(delete_asset)
        .service(get_asset_maintenance);
}
