use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::store::Store;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;

/// POST /api/feedback
/// Appends the entry and returns a static confirmation with the new id.
#[tracing::instrument(name = "Submit feedback.")]
#[post("")]
pub async fn item(
    web::Json(form): web::Json<forms::feedback::FeedbackForm>,
    store: web::Data<Store>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Feedback>::build().bad_request(errors.to_string()));
    }

    let feedback = store.insert_feedback(form.into());

    tracing::info!(feedback_id = feedback.id, "feedback recorded");

    Ok(JsonResponse::<models::Feedback>::build()
        .set_id(feedback.id)
        .ok("Feedback submitted successfully"))
}
