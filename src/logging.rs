use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::models::{Message, Source};

#[derive(Serialize)]
struct LogEntry<'a> {
    timestamp: String, // ISO-8601 UTC
    role: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sources: Option<&'a [Source]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<&'a str>,
}

/// Appends the conversation to a JSONL file, one entry per message.
/// Logging failures are reported on stderr and never fatal.
pub struct ConversationLogger {
    file_path: PathBuf,
    file: Option<tokio::fs::File>,
}

impl ConversationLogger {
    /// Create a new logger; the file name is derived from the current UTC time.
    pub async fn new(log_dir: &Path) -> Result<Self> {
        fs::create_dir_all(log_dir).await?;

        let now: DateTime<Utc> = Utc::now();
        let filename = format!("jurichat-{}.jsonl", now.format("%Y-%m-%d-%H%M%S"));
        let file_path = log_dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await?;
        Ok(Self {
            file_path,
            file: Some(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Append one conversation message.
    pub async fn log_message(&mut self, message: &Message) {
        let entry = LogEntry {
            timestamp: Utc::now().to_rfc3339(),
            role: message.role.as_str(),
            content: &message.content,
            sources: if message.sources.is_empty() {
                None
            } else {
                Some(&message.sources)
            },
            session_id: None,
        };
        self.append(&entry).await;
    }

    /// Record the diagnostic detail of a failed exchange. The raw error
    /// never reaches the message log; this is where it goes instead.
    pub async fn log_error(&mut self, session_id: &str, detail: &str) {
        let entry = LogEntry {
            timestamp: Utc::now().to_rfc3339(),
            role: "error",
            content: detail,
            sources: None,
            session_id: Some(session_id),
        };
        self.append(&entry).await;
    }

    async fn append(&mut self, entry: &LogEntry<'_>) {
        if let Some(file) = &mut self.file {
            if let Ok(json) = serde_json::to_string(entry) {
                // Write the JSON line
                if let Err(e) = file.write_all(json.as_bytes()).await {
                    eprintln!("[Logging error] {}", e);
                } else if let Err(e) = file.write_all(b"\n").await {
                    eprintln!("[Logging error] {}", e);
                }
            }
        }
    }

    /// Close the logger (explicit drop). Called on graceful shutdown.
    pub async fn shutdown(&mut self) {
        if let Some(file) = self.file.take() {
            // Ensure data is flushed
            let _ = file.sync_all().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn src(name: &str, score: f64) -> Source {
        Source {
            source: name.to_string(),
            score,
        }
    }

    #[tokio::test]
    async fn appends_one_line_per_entry() {
        let dir = TempDir::new().unwrap();
        let mut logger = ConversationLogger::new(dir.path()).await.unwrap();

        logger.log_message(&Message::user("hola")).await;
        logger
            .log_message(&Message::assistant("respuesta", vec![src("Dictamen 12345", 0.95)]))
            .await;
        logger
            .log_error("1700000000000", "backend returned HTTP 500")
            .await;

        let path = logger.path().to_path_buf();
        logger.shutdown().await;

        let contents = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["role"], "user");
        assert_eq!(first["content"], "hola");
        assert!(first.get("sources").is_none());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["role"], "assistant");
        assert_eq!(second["sources"][0]["source"], "Dictamen 12345");

        let third: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(third["role"], "error");
        assert_eq!(third["content"], "backend returned HTTP 500");
        assert_eq!(third["session_id"], "1700000000000");
    }

    #[tokio::test]
    async fn log_after_shutdown_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let mut logger = ConversationLogger::new(dir.path()).await.unwrap();
        let path = logger.path().to_path_buf();

        logger.shutdown().await;
        logger.log_message(&Message::user("tarde")).await;

        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.is_empty());
    }
}
