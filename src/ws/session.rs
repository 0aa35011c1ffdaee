use super::server;
use crate::forms;
use actix::{
    fut, Actor, ActorContext, ActorFutureExt, Addr, AsyncContext, ContextFutureSpawner, Handler,
    Running, StreamHandler, WrapFuture,
};
use actix_web_actors::ws;
use std::time::{Duration, Instant};

/// WebSocket heartbeat interval
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
/// Client timeout - close connection if no heartbeat received
const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);

/// One actor per connected chat client. Forwards inbound frames to the hub
/// and writes hub broadcasts back to the socket.
pub struct ChatSession {
    id: usize,
    server: Addr<server::ChatServer>,
    hb: Instant,
}

impl ChatSession {
    pub fn new(server: Addr<server::ChatServer>) -> Self {
        Self {
            id: 0,
            server,
            hb: Instant::now(),
        }
    }

    /// Start heartbeat process to check connection health
    fn hb(&self, ctx: &mut <Self as Actor>::Context) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |act, ctx| {
            if Instant::now().duration_since(act.hb) > CLIENT_TIMEOUT {
                tracing::warn!(session_id = act.id, "chat client heartbeat failed, disconnecting");
                ctx.stop();
                return;
            }

            ctx.ping(b"");
        });
    }
}

impl Actor for ChatSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.hb(ctx);

        let addr = ctx.address();
        self.server
            .send(server::Connect {
                addr: addr.recipient(),
            })
            .into_actor(self)
            .then(|res, act, ctx| {
                match res {
                    Ok(id) => act.id = id,
                    // Hub is gone; nothing to chat with.
                    Err(_) => ctx.stop(),
                }
                fut::ready(())
            })
            .wait(ctx);
    }

    fn stopping(&mut self, _ctx: &mut Self::Context) -> Running {
        self.server.do_send(server::Disconnect { id: self.id });
        Running::Stop
    }
}

impl Handler<server::Broadcast> for ChatSession {
    type Result = ();

    fn handle(&mut self, msg: server::Broadcast, ctx: &mut Self::Context) {
        ctx.text(msg.0);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ChatSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                self.hb = Instant::now();
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {
                self.hb = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                match serde_json::from_str::<forms::chat::ChatRequest>(&text) {
                    Ok(request) => self.server.do_send(server::Inbound {
                        username: request.username,
                        message: request.message,
                    }),
                    Err(err) => {
                        tracing::warn!(
                            session_id = self.id,
                            "dropping unparsable chat frame: {}",
                            err
                        );
                    }
                }
            }
            Ok(ws::Message::Binary(_)) => {
                tracing::warn!("binary frames are not part of the chat protocol");
            }
            Ok(ws::Message::Close(reason)) => {
                tracing::info!(session_id = self.id, "chat close received: {:?}", reason);
                ctx.close(reason);
                ctx.stop();
            }
            Err(err) => {
                tracing::warn!(session_id = self.id, "chat websocket protocol error: {}", err);
                ctx.stop();
            }
            _ => {}
        }
    }
}
