use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// On-disk shape of the session file. The key name is kept compatible with
/// the web client's local-storage entry.
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    #[serde(rename = "sessionID")]
    session_id: String,
}

/// Source of fresh session identifiers. The production implementation uses
/// the wall clock; tests inject a fixed value.
pub trait IdSource {
    fn next_id(&self) -> String;
}

/// Epoch-milliseconds identifiers, matching the web client
pub struct ClockIdSource;

impl IdSource for ClockIdSource {
    fn next_id(&self) -> String {
        Utc::now().timestamp_millis().to_string()
    }
}

/// Owns the session identifier file on disk. One identifier per
/// installation; never rotated or expired by this client.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Return the persisted identifier, or establish a fresh one. The value
    /// is written back on every establishment (including a successful load,
    /// like the web client's storage effect) so a restart reuses the same
    /// session. A storage failure degrades to an unpersisted identifier
    /// instead of failing the client.
    pub fn load_or_create(&self, ids: &dyn IdSource) -> String {
        let session_id = self.read().unwrap_or_else(|| ids.next_id());

        if let Err(e) = self.write(&session_id) {
            eprintln!("{} Session not persisted: {:#}", "⚠️".yellow(), e);
        }

        session_id
    }

    fn read(&self) -> Option<String> {
        let json = fs::read_to_string(&self.path).ok()?;
        let file: SessionFile = serde_json::from_str(&json).ok()?;

        if file.session_id.is_empty() {
            return None;
        }
        Some(file.session_id)
    }

    fn write(&self, session_id: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create session directory {}", parent.display())
            })?;
        }

        let file = SessionFile {
            session_id: session_id.to_string(),
        };
        let json = serde_json::to_string_pretty(&file).context("Failed to serialize session file")?;

        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write session file {}", self.path.display()))?;

        Ok(())
    }
}
