//! Guruhbot - Telegram admin-console bot for managing a registry of tracked groups
//!
//! A small set of designated operators (admins) manage the registry through
//! typed commands, inline-keyboard callbacks, and a one-slot pending-input
//! mode entered after /addgroup.
//!
//! # Module Structure
//!
//! - `core`: Configuration, errors, logging, and per-operator session state
//! - `storage`: SQLite-backed registry of groups and the admin set
//! - `telegram`: Bot integration, dispatcher schema, and handlers
//! - `cli`: Command-line interface (`run`, `seed-admin`)

pub mod cli;
pub mod core;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult, SessionState, SessionStore};
pub use crate::storage::{create_pool, get_connection, DbConnection, DbPool};
pub use crate::telegram::{create_bot, schema, HandlerDeps, HandlerError};
