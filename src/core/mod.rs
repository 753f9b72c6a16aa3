//! Core utilities, configuration, and common functionality

pub mod config;
pub mod error;
pub mod logging;
pub mod session;

// Re-exports for convenience
pub use error::{AppError, AppResult};
pub use logging::init_logger;
pub use session::{SessionState, SessionStore};
