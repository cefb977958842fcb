use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum number of source citations retained on an assistant message
pub const MAX_DISPLAY_SOURCES: usize = 3;

/// Author of a message in the conversation log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A cited document with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub source: String,
    pub score: f64,
}

/// One entry in the append-only conversation log. Messages are never
/// mutated or removed after creation; insertion order is display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sources: Vec::new(),
        }
    }

    /// Build an assistant message. Sources are deduplicated and capped
    /// before they are attached, so the retained set is already canonical.
    pub fn assistant(content: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            sources: dedupe_sources(sources),
        }
    }
}

/// Deduplicate sources by document identifier (first occurrence wins, order
/// preserved), then cap the list at `MAX_DISPLAY_SOURCES` entries.
pub fn dedupe_sources(sources: Vec<Source>) -> Vec<Source> {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();

    for source in sources {
        if seen.insert(source.source.clone()) {
            kept.push(source);
            if kept.len() == MAX_DISPLAY_SOURCES {
                break;
            }
        }
    }

    kept
}
