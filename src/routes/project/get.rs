use crate::helpers::JsonResponse;
use crate::models;
use crate::store::Store;
use actix_web::{get, web, Responder, Result};

#[tracing::instrument(name = "Get project list.")]
#[get("")]
pub async fn list(store: web::Data<Store>) -> Result<impl Responder> {
    Ok(JsonResponse::build().set_list(store.projects()).ok("OK"))
}

#[tracing::instrument(name = "Get project.")]
#[get("/{id}")]
pub async fn item(path: web::Path<(i32,)>, store: web::Data<Store>) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    match store.project(id) {
        Some(project) => Ok(JsonResponse::build().set_item(project).ok("OK")),
        None => Err(JsonResponse::<models::Project>::build().not_found("not found")),
    }
}
