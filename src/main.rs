use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::env;
use std::io;

use jurichat::app::{run_query_mode, run_repl_mode};
use jurichat::chat::{ClockIdSource, SessionStore};
use jurichat::cli::Cli;
use jurichat::config::ClientConfig;
use jurichat::logging::ConversationLogger;
use jurichat::{HttpQueryBackend, JuriChat};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Generate shell completions and exit
    if let Some(shell) = cli.generate {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let production = env::var("JURICHAT_ENV")
        .map(|v| v == "production")
        .unwrap_or(false);
    let use_cosmos_db = env::var("JURICHAT_USE_COSMOS_DB")
        .map(|v| v == "true")
        .unwrap_or(false);
    let config = ClientConfig::resolve(production, cli.api_url.clone(), use_cosmos_db);

    let work_dir = env::current_dir()?;
    let data_dir = work_dir.join(".jurichat");

    let session_path = cli
        .session_file
        .clone()
        .unwrap_or_else(|| data_dir.join("session.json"));
    let session_id = SessionStore::new(session_path).load_or_create(&ClockIdSource);

    let backend = HttpQueryBackend::new(config.chat_endpoint());
    let mut chat = JuriChat::new(config, session_id, Box::new(backend));
    chat.verbose = cli.verbose;

    if !cli.no_log {
        chat.logger = match ConversationLogger::new(&data_dir.join("logs")).await {
            Ok(l) => Some(l),
            Err(e) => {
                eprintln!("Logging disabled: {}", e);
                None
            }
        };
    }

    if let Some(query) = &cli.query {
        return run_query_mode(&mut chat, query, cli.pretty).await;
    }

    run_repl_mode(&mut chat).await
}
