//! Telegram bot integration and handlers

pub mod admin;
pub mod bot;
pub mod callbacks;
pub mod keyboard;
pub mod schema;
pub mod types;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use callbacks::handle_callback_query;
pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
