use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "guruhbot")]
#[command(author, version, about = "Telegram admin-console bot for managing a registry of tracked groups", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot in long-polling mode
    Run,

    /// Insert an operator into the admin set and exit
    SeedAdmin {
        /// Telegram user ID of the operator
        id: i64,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
