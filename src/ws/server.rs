use crate::configuration::BotSettings;
use crate::models;
use crate::services::ResponseGenerator;
use crate::store::Store;
use actix::{Actor, AsyncContext, Context, Handler, Message, Recipient};
use rand::Rng;
use std::collections::HashMap;
use std::time::Duration;

/// Frame pushed to a connected session, already JSON-encoded.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Broadcast(pub String);

#[derive(Message)]
#[rtype(result = "usize")]
pub struct Connect {
    pub addr: Recipient<Broadcast>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub id: usize,
}

/// Chat event received from a client session.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Inbound {
    pub username: Option<String>,
    pub message: String,
}

/// Broadcast hub for the realtime chat. Owns the subscriber registry, records
/// every message in the store, and schedules the delayed bot reply. Events
/// are processed in arrival order; there is no delivery queue limit.
pub struct ChatServer {
    sessions: HashMap<usize, Recipient<Broadcast>>,
    next_session_id: usize,
    store: Store,
    bot: ResponseGenerator,
    settings: BotSettings,
}

impl ChatServer {
    pub fn new(store: Store, bot: ResponseGenerator, settings: BotSettings) -> Self {
        Self {
            sessions: HashMap::new(),
            next_session_id: 1,
            store,
            bot,
            settings,
        }
    }

    fn broadcast(&self, message: &models::ChatMessage) {
        match serde_json::to_string(message) {
            Ok(frame) => {
                for addr in self.sessions.values() {
                    addr.do_send(Broadcast(frame.clone()));
                }
            }
            Err(err) => tracing::error!("failed to encode chat frame: {}", err),
        }
    }

    fn reply_delay(&self) -> Duration {
        let min = self.settings.reply_delay_min_ms;
        let max = self.settings.reply_delay_max_ms;
        Duration::from_millis(rand::thread_rng().gen_range(min..=max))
    }
}

impl Actor for ChatServer {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        tracing::info!(bot = %self.settings.name, "chat hub started");
    }
}

impl Handler<Connect> for ChatServer {
    type Result = usize;

    fn handle(&mut self, msg: Connect, _ctx: &mut Self::Context) -> Self::Result {
        let id = self.next_session_id;
        self.next_session_id += 1;
        self.sessions.insert(id, msg.addr);
        tracing::info!(
            session_id = id,
            connections = self.sessions.len(),
            "chat client connected"
        );
        id
    }
}

impl Handler<Disconnect> for ChatServer {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _ctx: &mut Self::Context) {
        self.sessions.remove(&msg.id);
        tracing::info!(
            session_id = msg.id,
            connections = self.sessions.len(),
            "chat client disconnected"
        );
    }
}

impl Handler<Inbound> for ChatServer {
    type Result = ();

    fn handle(&mut self, msg: Inbound, ctx: &mut Self::Context) {
        let user_message = models::ChatMessage::from_user(msg.username, msg.message.clone());
        self.store.append_chat_message(user_message.clone());
        self.broadcast(&user_message);

        // The reply arrives as a second broadcast after a sampled delay.
        // It is not cancellable once scheduled.
        let input = msg.message;
        ctx.run_later(self.reply_delay(), move |act, _ctx| {
            let reply = act.bot.generate(&input);
            let bot_message = models::ChatMessage::from_bot(&act.settings.name, reply);
            act.store.append_chat_message(bot_message.clone());
            act.broadcast(&bot_message);
        });
    }
}
