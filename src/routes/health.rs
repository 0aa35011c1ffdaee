use actix_web::{get, web, Responder, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[get("/health")]
pub async fn health_check() -> Result<impl Responder> {
    Ok(web::Json(HealthStatus {
        status: "OK",
        timestamp: Utc::now(),
    }))
}
