//! Inline keyboard construction and callback-token encoding
//!
//! All callback data strings are produced and parsed here, through the
//! closed [`CallbackAction`] enum. Handlers never touch raw token strings.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::core::config::ui::BUTTON_LABEL_LIMIT;
use crate::storage::db::Group;

/// Decoded intent of an inline keyboard button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    /// Open the detail view for a group
    Select(i64),
    /// Delete a group from the registry
    Delete(i64),
    /// Return from the detail view to the group list
    Back,
}

impl CallbackAction {
    /// Wire representation embedded in a button's callback data.
    pub fn encode(&self) -> String {
        match self {
            CallbackAction::Select(id) => format!("select:{}", id),
            CallbackAction::Delete(id) => format!("delete:{}", id),
            CallbackAction::Back => "back".to_string(),
        }
    }

    /// Decode a callback data string.
    ///
    /// Returns `None` for unknown prefixes and non-numeric IDs. Tokens have
    /// no expiry: a stale but well-formed token always decodes, and the
    /// handler degrades gracefully when the group is gone.
    pub fn parse(data: &str) -> Option<CallbackAction> {
        if data == "back" {
            return Some(CallbackAction::Back);
        }
        if let Some(id) = data.strip_prefix("select:") {
            return id.parse().ok().map(CallbackAction::Select);
        }
        if let Some(id) = data.strip_prefix("delete:") {
            return id.parse().ok().map(CallbackAction::Delete);
        }
        None
    }
}

/// Cut a title down to the button label limit.
///
/// Character-based, so multi-byte titles never get split mid-codepoint.
/// Only the rendered label is cut; the registry keeps the full title.
pub fn truncate_label(title: &str) -> String {
    title.chars().take(BUTTON_LABEL_LIMIT).collect()
}

/// One button per group, vertical layout, order preserved.
pub fn group_list_keyboard(groups: &[Group]) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = groups
        .iter()
        .map(|group| {
            vec![InlineKeyboardButton::callback(
                truncate_label(&group.title),
                CallbackAction::Select(group.id).encode(),
            )]
        })
        .collect();

    InlineKeyboardMarkup::new(rows)
}

/// Detail view buttons: delete and back on one row.
pub fn group_detail_keyboard(group_id: i64) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("❌ Guruhni o'chirish", CallbackAction::Delete(group_id).encode()),
        InlineKeyboardButton::callback("⬅ Orqaga", CallbackAction::Back.encode()),
    ]])
}
