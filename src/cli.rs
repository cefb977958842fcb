use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// CLI arguments for jurichat
#[derive(Parser)]
#[command(name = "jurichat")]
#[command(about = "Asistente de Dictámenes CGR - consultas de jurisprudencia desde la terminal")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Run in one-shot mode – send a single query and print the reply.
    #[arg(long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Pretty-print the reply as JSON (only useful with --query)
    #[arg(long)]
    pub pretty: bool,

    /// Override the backend base URL (e.g., http://localhost:8000)
    #[arg(long, value_name = "URL", env = "JURICHAT_API_URL")]
    pub api_url: Option<String>,

    /// Path of the persisted session file
    #[arg(long, value_name = "PATH", env = "JURICHAT_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// Disable conversation logging to disk
    #[arg(long)]
    pub no_log: bool,

    /// Enable verbose debug output (shows endpoint, session id, log path)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}
