mod server;
mod session;

pub use server::ChatServer;

use actix::Addr;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;

/// WebSocket route handler - entry point for chat connections
#[tracing::instrument(name = "Chat WebSocket connection", skip(req, stream, server))]
pub async fn chat_websocket(
    req: HttpRequest,
    stream: web::Payload,
    server: web::Data<Addr<ChatServer>>,
) -> Result<HttpResponse, Error> {
    ws::start(
        session::ChatSession::new(server.get_ref().clone()),
        &req,
        stream,
    )
}
