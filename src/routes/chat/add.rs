use crate::configuration::Settings;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::ResponseGenerator;
use crate::store::Store;
use actix_web::{post, web, Responder, Result};

/// POST /api/chat
/// Records the user message, synchronously computes and records the bot
/// reply, and returns the bot message (its `message` field is the reply text).
#[tracing::instrument(name = "Chat exchange.")]
#[post("")]
pub async fn exchange(
    web::Json(request): web::Json<forms::chat::ChatRequest>,
    store: web::Data<Store>,
    bot: web::Data<ResponseGenerator>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let user_message = models::ChatMessage::from_user(request.username, request.message.clone());
    store.append_chat_message(user_message);

    let reply = bot.generate(&request.message);
    let bot_message = models::ChatMessage::from_bot(&settings.bot.name, reply);
    store.append_chat_message(bot_message.clone());

    Ok(JsonResponse::build().set_item(bot_message).ok("OK"))
}
