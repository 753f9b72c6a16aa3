//! Handler types and dependencies

use std::sync::Arc;

use crate::core::session::SessionStore;
use crate::storage::db::DbPool;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub db_pool: Arc<DbPool>,
    pub sessions: SessionStore,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(db_pool: Arc<DbPool>, sessions: SessionStore) -> Self {
        Self { db_pool, sessions }
    }
}
