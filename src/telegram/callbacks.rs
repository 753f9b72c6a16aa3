//! Callback-query routing for the inline admin panel
//!
//! Single entry point for every button press. The raw callback data is
//! decoded into a [`CallbackAction`] once, right here; the rest of the
//! routing works on the decoded variant. Navigation is stateless: the
//! response depends only on the registry contents and the token, never on
//! the operator's session.

use teloxide::prelude::*;

use crate::core::error::AppResult;
use crate::storage::db::{self, DbPool};
use crate::storage::get_connection;
use crate::telegram::admin::{EMPTY_LIST_TEXT, LIST_HEADER_TEXT, UNKNOWN_GROUP_TITLE};
use crate::telegram::keyboard::{group_detail_keyboard, group_list_keyboard, CallbackAction};

/// Handles callback queries from the admin panel inline keyboards.
///
/// Unauthorized presses get an alert-style notice and nothing else. Tokens
/// that fail to decode are answered and dropped; a well-formed token for a
/// group that no longer exists degrades to a placeholder title instead of
/// failing.
pub async fn handle_callback_query(bot: &Bot, q: CallbackQuery, db_pool: &DbPool) -> AppResult<()> {
    let user_id = i64::try_from(q.from.id.0).unwrap_or(0);

    let conn = get_connection(db_pool)?;
    if !db::is_admin(&conn, user_id)? {
        log::debug!("User {} pressed an admin button without permission", user_id);
        bot.answer_callback_query(q.id)
            .text("Siz admin emassiz.")
            .show_alert(true)
            .await?;
        return Ok(());
    }

    let action = q.data.as_deref().and_then(CallbackAction::parse);
    let chat_id = q.message.as_ref().map(|m| m.chat().id);
    let message_id = q.message.as_ref().map(|m| m.id());

    match action {
        Some(CallbackAction::Select(group_id)) => {
            if let (Some(chat_id), Some(message_id)) = (chat_id, message_id) {
                let title = db::find_group(&conn, group_id)?
                    .map(|g| g.title)
                    .unwrap_or_else(|| UNKNOWN_GROUP_TITLE.to_string());

                bot.edit_message_text(chat_id, message_id, format!("Guruh: {}\nID: {}", title, group_id))
                    .reply_markup(group_detail_keyboard(group_id))
                    .await?;
            }
            bot.answer_callback_query(q.id).await?;
        }
        Some(CallbackAction::Delete(group_id)) => {
            db::remove_group(&conn, group_id)?;
            log::info!("Removed group {} from the registry", group_id);
            // The stale detail view is left in place on purpose; the
            // operator refreshes via `back` or /admin.
            bot.answer_callback_query(q.id)
                .text("Guruh ro'yxatdan o'chirildi.")
                .await?;
        }
        Some(CallbackAction::Back) => {
            if let (Some(chat_id), Some(message_id)) = (chat_id, message_id) {
                let groups = db::get_groups(&conn)?;
                if groups.is_empty() {
                    bot.edit_message_text(chat_id, message_id, EMPTY_LIST_TEXT).await?;
                } else {
                    bot.edit_message_text(chat_id, message_id, LIST_HEADER_TEXT)
                        .reply_markup(group_list_keyboard(&groups))
                        .await?;
                }
            }
            bot.answer_callback_query(q.id).await?;
        }
        None => {
            log::debug!("Ignoring undecodable callback data: {:?}", q.data);
            bot.answer_callback_query(q.id).await?;
        }
    }

    Ok(())
}
