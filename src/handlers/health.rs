use actix_web::{get, web, HttpResponse, Responder};

#[get("/")]
pub async fn index() -> impl Responder {
    "Asset maintenance API"
}

#[get("/health")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
}
