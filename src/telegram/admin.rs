//! Admin command handlers
//!
//! All operator-facing commands live here: /start, /admin, /addgroup, and
//! the free-text group-entry message that follows /addgroup. Every
//! privileged handler checks the admin set first and replies with a fixed
//! denial when the check fails; a denied request mutates nothing.

use teloxide::prelude::*;

use crate::core::error::AppResult;
use crate::core::session::{SessionState, SessionStore};
use crate::storage::db::{self, DbPool};
use crate::storage::get_connection;
use crate::telegram::keyboard::group_list_keyboard;

/// Shown when the registry has no groups, both for /admin and the `back`
/// callback.
pub(crate) const EMPTY_LIST_TEXT: &str = "Hozircha guruhlar ro'yxati bo'sh.";

/// Header above the group-list keyboard.
pub(crate) const LIST_HEADER_TEXT: &str = "Guruhlar ro'yxati:";

/// Fallback title: used when an operator registers a group without a name,
/// and as the placeholder for detail views of groups that no longer exist.
pub(crate) const UNKNOWN_GROUP_TITLE: &str = "Noma'lum guruh";

/// Parse a group-entry message: `<id> <rest-of-line as title>`.
///
/// A missing title falls back to [`UNKNOWN_GROUP_TITLE`]. Returns `None`
/// when the leading token is not an integer.
fn parse_group_entry(text: &str) -> Option<(i64, String)> {
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let id = parts.next()?.parse::<i64>().ok()?;
    let title = parts
        .next()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(UNKNOWN_GROUP_TITLE);
    Some((id, title.to_string()))
}

/// Handle /start command - greeting that differs for admins
///
/// No authorization is required; the admin check only selects the greeting
/// text. Never touches the session store or the registry.
pub async fn handle_start_command(bot: &Bot, chat_id: ChatId, user_id: i64, db_pool: &DbPool) -> AppResult<()> {
    let conn = get_connection(db_pool)?;
    if db::is_admin(&conn, user_id)? {
        bot.send_message(chat_id, "Salom Admin! /admin orqali admin panelga kirishingiz mumkin.")
            .await?;
    } else {
        bot.send_message(chat_id, "Salom! Siz admin emassiz.").await?;
    }
    Ok(())
}

/// Handle /admin command - send the group list panel
///
/// # Arguments
/// * `bot` - Bot instance
/// * `chat_id` - Chat ID where to send the response
/// * `user_id` - Telegram user ID of the requester
/// * `db_pool` - Database connection pool
pub async fn handle_admin_command(bot: &Bot, chat_id: ChatId, user_id: i64, db_pool: &DbPool) -> AppResult<()> {
    let conn = get_connection(db_pool)?;
    if !db::is_admin(&conn, user_id)? {
        log::debug!("User {} tried to access /admin without permission", user_id);
        bot.send_message(chat_id, "Sizda admin huquqlari yo'q.").await?;
        return Ok(());
    }

    let groups = db::get_groups(&conn)?;
    if groups.is_empty() {
        bot.send_message(chat_id, EMPTY_LIST_TEXT).await?;
        return Ok(());
    }

    bot.send_message(chat_id, LIST_HEADER_TEXT)
        .reply_markup(group_list_keyboard(&groups))
        .await?;
    Ok(())
}

/// Handle /addgroup command - prompt for a group entry
///
/// Puts the operator into the awaiting-entry state. Re-issuing the command
/// while a wait is pending restarts it; only the most recent prompt is
/// honored by the next free-text message.
pub async fn handle_addgroup_command(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    db_pool: &DbPool,
    sessions: &SessionStore,
) -> AppResult<()> {
    let conn = get_connection(db_pool)?;
    if !db::is_admin(&conn, user_id)? {
        log::debug!("User {} tried to access /addgroup without permission", user_id);
        bot.send_message(chat_id, "Siz admin emassiz.").await?;
        return Ok(());
    }

    bot.send_message(chat_id, "Guruh ID va nomini yuboring (misol: 1234567 Guruh nomi):")
        .await?;
    sessions.set(chat_id, SessionState::AwaitingGroupEntry).await;
    Ok(())
}

/// Handle the free-text message that follows /addgroup
///
/// Only routed here while the operator's session is awaiting an entry. On a
/// parse failure the session still resets: a failed attempt does not keep
/// the slot open, the operator re-issues /addgroup instead. The session is
/// cleared after the registry write confirms, so a storage failure never
/// leaves the state machine ahead of the store.
pub async fn handle_group_entry_message(
    bot: &Bot,
    chat_id: ChatId,
    text: &str,
    db_pool: &DbPool,
    sessions: &SessionStore,
) -> AppResult<()> {
    match parse_group_entry(text) {
        Some((group_id, group_title)) => {
            let conn = get_connection(db_pool)?;
            db::upsert_group(&conn, group_id, &group_title)?;
            log::info!("Registered group {} ({})", group_id, group_title);
            bot.send_message(
                chat_id,
                format!("Guruh ro'yxatga qo'shildi: {} (ID: {})", group_title, group_id),
            )
            .await?;
        }
        None => {
            bot.send_message(chat_id, "Noto'g'ri format! Iltimos, qaytadan yuboring.")
                .await?;
        }
    }
    sessions.clear(chat_id).await;
    Ok(())
}
