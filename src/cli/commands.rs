use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::logging::init_logging;
use crate::models::{ConversationDefaults, Role};
use crate::seeder::{SeedOutcome, SeedRequest, Seeder};
use crate::utils::{default_store_path, format_path_with_tilde};

#[derive(Parser, Debug)]
#[command(name = "chat-seeder")]
#[command(version = "0.1.0")]
#[command(about = "Insert a test message into the chat assistant's database", long_about = None)]
pub struct Cli {
    /// Message content (same as --content)
    #[arg(value_name = "CONTENT")]
    pub message: Option<String>,

    /// Message content; takes precedence over the positional argument
    #[arg(short, long)]
    pub content: Option<String>,

    /// Existing conversation id to append to; a new conversation is created when omitted
    #[arg(short = 'i', long)]
    pub conversation_id: Option<String>,

    /// Role of the inserted message
    #[arg(long, value_enum, default_value_t = Role::Assistant)]
    pub role: Role,

    /// Title for a newly created conversation
    #[arg(long)]
    pub title: Option<String>,

    /// Model name for a newly created conversation
    #[arg(long)]
    pub model: Option<String>,

    /// Provider name for a newly created conversation
    #[arg(long)]
    pub provider: Option<String>,

    /// System prompt for a newly created conversation
    #[arg(long)]
    pub system_prompt: Option<String>,

    /// Token count recorded on the message
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    pub tokens_used: Option<i64>,

    /// Database file to write to [default: <data dir>/com.linuxai.assistant/database.db]
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Print the inserted identifiers as JSON
    #[arg(long)]
    pub json: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the seed request; missing content becomes an empty string and is
    /// rejected by the seeder
    pub fn to_request(&self) -> SeedRequest {
        let content = self
            .content
            .clone()
            .filter(|c| !c.is_empty())
            .or_else(|| self.message.clone())
            .unwrap_or_default();

        let mut defaults = ConversationDefaults::default();
        if let Some(title) = &self.title {
            defaults.title = title.clone();
        }
        if let Some(model) = &self.model {
            defaults.model = model.clone();
        }
        if let Some(provider) = &self.provider {
            defaults.provider = provider.clone();
        }
        defaults.system_prompt = self.system_prompt.clone();

        SeedRequest {
            content,
            conversation_id: self.conversation_id.clone(),
            role: self.role,
            tokens_used: self.tokens_used,
            defaults,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let db_path = match &cli.db {
        Some(path) => path.clone(),
        None => default_store_path()?,
    };
    debug!(db = %format_path_with_tilde(&db_path), "resolved database path");

    let request = cli.to_request();
    let mut seeder = Seeder::new(db_path);
    let outcome = seeder.seed(&request)?;

    print_outcome(&outcome, cli.json)
}

fn print_outcome(outcome: &SeedOutcome, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(outcome).context("Failed to serialize seed outcome")?;
        println!("{}", rendered);
    } else {
        println!(
            "Inserted message {} into conversation {}",
            outcome.message_id, outcome.conversation_id
        );
    }
    Ok(())
}
