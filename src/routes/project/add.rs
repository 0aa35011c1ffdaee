use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::store::Store;
use actix_web::Error;
use actix_web::{
    post,
    web::{Bytes, Data},
    Responder, Result,
};
use serde_valid::Validate;
use std::str;

#[tracing::instrument(name = "Add project.")]
#[post("")]
pub async fn item(body: Bytes, store: Data<Store>) -> Result<impl Responder> {
    let form = body_into_form(body).await?;
    let project: models::Project = form.into();
    let project = store.insert_project(project);

    tracing::info!(project_id = project.id, name = %project.name, "project created");

    Ok(JsonResponse::<models::Project>::build()
        .set_id(project.id)
        .set_item(project)
        .ok("Project created"))
}

async fn body_into_form(body: Bytes) -> Result<forms::project::ProjectForm, Error> {
    let body_str = str::from_utf8(&body).map_err(|err| {
        JsonResponse::<forms::project::ProjectForm>::build().bad_request(err.to_string())
    })?;
    let deserializer = &mut serde_json::Deserializer::from_str(body_str);
    serde_path_to_error::deserialize(deserializer)
        .map_err(|err| {
            let msg = format!("{}:{:?}", err.path(), err);
            JsonResponse::<forms::project::ProjectForm>::build().bad_request(msg)
        })
        .and_then(|form: forms::project::ProjectForm| {
            if let Err(errors) = form.validate() {
                let err_msg = format!("Invalid data received {:?}", errors.to_string());
                tracing::debug!(err_msg);

                return Err(
                    JsonResponse::<forms::project::ProjectForm>::build().bad_request(errors.to_string())
                );
            }

            Ok(form)
        })
}
