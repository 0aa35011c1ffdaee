use crate::helpers::JsonResponse;
use crate::store::Store;
use actix_web::{get, web, Responder, Result};

/// GET /api/chat/history
/// Returns the last 20 chat messages in original order.
#[tracing::instrument(name = "Get chat history.")]
#[get("/history")]
pub async fn history(store: web::Data<Store>) -> Result<impl Responder> {
    let messages = store.recent_chat_messages(super::HISTORY_LIMIT);
    Ok(JsonResponse::build().set_list(messages).ok("OK"))
}
