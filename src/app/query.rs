use anyhow::{Context, Result};
use colored::Colorize;

use crate::JuriChat;

/// Run one-shot query mode: send a single query and print the reply to
/// stdout, as JSON when requested.
pub async fn run_query_mode(chat: &mut JuriChat, query: &str, pretty: bool) -> Result<()> {
    match chat.send_query(query).await {
        Some(reply) => {
            if pretty {
                let json =
                    serde_json::to_string_pretty(reply).context("Failed to serialize reply")?;
                println!("{}", json);
            } else {
                println!("{}", reply.content);
                for source in &reply.sources {
                    println!(
                        "{}",
                        format!("Fuente: {} ({:.2})", source.source, source.score).bright_black()
                    );
                }
            }
        }
        None => anyhow::bail!("Empty query"),
    }

    if let Some(logger) = &mut chat.logger {
        logger.shutdown().await;
    }

    Ok(())
}
