//! Message Handler module for processing incoming Telegram messages

use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::Me;
use teloxide::RequestError;
use tracing::{debug, info};

use crate::config::BotConfig;

use super::router::{Route, Router};
use super::ui_builder::build_reply;

/// Pick the route for an inbound message; non-text messages never match
pub fn route_message(router: &Router, msg: &Message, bot_username: &str) -> Option<Route> {
    let text = msg.text()?;
    let route = router.route(text, bot_username);

    if route.is_none() {
        debug!(chat_id = %msg.chat.id, "Ignoring message that matches no trigger");
    }
    route
}

/// Send the reply for a routed message. Send errors go back to the dispatcher.
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    route: Route,
    config: Arc<BotConfig>,
) -> ResponseResult<()> {
    info!(chat_id = %msg.chat.id, ?route, "Replying to message");

    let reply = build_reply(route, &config.webapp_url);
    bot.send_message(msg.chat.id, reply.text)
        .reply_markup(reply.keyboard)
        .await?;

    Ok(())
}

/// Handler tree for the dispatcher. Needs `Arc<Router>` and `Arc<BotConfig>`
/// among its dependencies; `Me` is supplied by teloxide.
pub fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .filter_map(|msg: Message, me: Me, router: Arc<Router>| {
            route_message(&router, &msg, me.username())
        })
        .endpoint(message_handler)
}
