//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::admin::{handle_addgroup_command, handle_admin_command, handle_group_entry_message, handle_start_command};
use super::callbacks::handle_callback_query;
use super::types::{HandlerDeps, HandlerError};
use crate::core::session::SessionState;
use crate::telegram::bot::Command;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// This function returns a handler tree that can be used with teloxide's
/// Dispatcher. The same schema is used in production and in integration
/// tests.
///
/// Branch order matters: commands are consumed first, so a pending group
/// entry never swallows a command, and free text reaches the entry branch
/// only while the operator's session is awaiting one.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_entry = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        .branch(command_handler(deps_commands))
        .branch(group_entry_handler(deps_entry))
        .branch(callback_handler(deps_callback))
}

/// Handler for bot commands (/start, /admin, /addgroup)
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);
                let user_id = msg.from.as_ref().and_then(|u| i64::try_from(u.id.0).ok()).unwrap_or(0);

                match cmd {
                    Command::Start => {
                        handle_start_command(&bot, msg.chat.id, user_id, &deps.db_pool).await?;
                    }
                    Command::Admin => {
                        handle_admin_command(&bot, msg.chat.id, user_id, &deps.db_pool).await?;
                    }
                    Command::Addgroup => {
                        handle_addgroup_command(&bot, msg.chat.id, user_id, &deps.db_pool, &deps.sessions).await?;
                    }
                }
                Ok(())
            }
        },
    ))
}

/// Handler for the free-text message that follows /addgroup
///
/// Fires only while the sender's session is awaiting a group entry; in the
/// idle state plain text is not routed here at all.
fn group_entry_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let sessions = deps.sessions.clone();

    Update::filter_message()
        .filter_async(move |msg: Message| {
            let sessions = sessions.clone();
            async move {
                msg.text().is_some() && sessions.get(msg.chat.id).await == SessionState::AwaitingGroupEntry
            }
        })
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let text = msg.text().unwrap_or_default().to_string();
                handle_group_entry_message(&bot, msg.chat.id, &text, &deps.db_pool, &deps.sessions).await?;
                Ok(())
            }
        })
}

/// Handler for callback queries (inline keyboard buttons)
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            handle_callback_query(&bot, q, &deps.db_pool).await?;
            Ok(())
        }
    })
}
