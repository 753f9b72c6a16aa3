use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;

use guruhbot::cli::{Cli, Commands};
use guruhbot::core::{config, init_logger, SessionStore};
use guruhbot::storage::db::add_admin;
use guruhbot::storage::{create_pool, get_connection, DbPool};
use guruhbot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, database, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    // Load environment variables from .env if present
    let _ = dotenv();

    // Dispatch to appropriate command
    match cli.command {
        Some(Commands::Run) => run_bot().await,
        Some(Commands::SeedAdmin { id }) => seed_admin(id),
        None => {
            // No command specified - default to running the bot
            log::info!("No command specified, running bot in default mode");
            run_bot().await
        }
    }
}

/// Insert an operator into the admin set without starting the bot
fn seed_admin(id: i64) -> Result<()> {
    let pool =
        create_pool(&config::DATABASE_PATH).map_err(|e| anyhow::anyhow!("Failed to create database pool: {}", e))?;
    let conn = get_connection(&pool)?;
    add_admin(&conn, id)?;
    log::info!("Seeded admin {} into {}", id, config::DATABASE_PATH.as_str());
    Ok(())
}

/// Seed the configured bootstrap admins so the first update already finds
/// at least one authorized operator.
fn seed_configured_admins(db_pool: &DbPool) -> Result<()> {
    let conn = get_connection(db_pool)?;

    let mut seeded = 0;
    for admin_id in config::admin::ADMIN_IDS.iter() {
        add_admin(&conn, *admin_id)?;
        seeded += 1;
    }

    let primary = *config::admin::ADMIN_USER_ID;
    if primary != 0 && !config::admin::ADMIN_IDS.contains(&primary) {
        add_admin(&conn, primary)?;
        seeded += 1;
    }

    if seeded == 0 {
        log::warn!("No admin IDs configured; seed an operator with `guruhbot seed-admin <id>`");
    } else {
        log::info!("Seeded {} admin(s) into the admin set", seeded);
    }
    Ok(())
}

/// Run the Telegram bot
async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");

    // Create bot instance
    let bot = create_bot()?;

    // Create database connection pool
    let db_pool = Arc::new(
        create_pool(&config::DATABASE_PATH).map_err(|e| anyhow::anyhow!("Failed to create database pool: {}", e))?,
    );

    // Admins must exist in storage before the dispatcher starts
    seed_configured_admins(&db_pool)?;

    // Register the command list in the Telegram UI
    setup_bot_commands(&bot).await?;

    // Per-operator session state lives for the lifetime of the process
    let sessions = SessionStore::new();

    // Create the dispatcher handler tree using the modular schema
    let handler = schema(HandlerDeps::new(Arc::clone(&db_pool), sessions));

    log::info!("Starting bot in long polling mode");

    Dispatcher::builder(bot, handler)
        .dependencies(DependencyMap::new())
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
