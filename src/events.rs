//! Append-only audit log.
//!
//! Every extraction and publish is recorded as one JSON object per line in
//! `~/.pinpost/events.ndjson`, so there is a durable record of what was
//! asked of the model and what was saved to Pinboard. Logging is
//! best-effort: a failed append warns on stderr and never fails the
//! command that produced it.
//!
//! Each event carries:
//! - `ts`: RFC3339 timestamp
//! - `action`: `extract` or `publish`
//! - `actor`: `user@HOST`
//! - `url`: the bookmarked URL
//! - `details`: freeform object with action-specific fields

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Bookmark metadata was extracted from a URL.
    Extract,
    /// A bookmark was published to Pinboard.
    Publish,
}

/// One record in the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// When the event occurred.
    pub ts: DateTime<Utc>,

    /// What happened.
    pub action: EventAction,

    /// Who did it, as `user@HOST`.
    pub actor: String,

    /// The URL the action was about.
    pub url: String,

    /// Action-specific details.
    pub details: Value,
}

impl Event {
    /// Create a new event stamped with the current time and actor.
    pub fn new(action: EventAction, url: &str) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: actor_string(),
            url: url.to_string(),
            details: Value::Null,
        }
    }

    /// Attach action-specific details.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }
}

/// Path of the event log file.
pub fn events_path() -> Option<PathBuf> {
    crate::config::pinpost_dir().map(|d| d.join("events.ndjson"))
}

/// Append an event to the log, creating the directory on first use.
fn append_event(event: &Event) -> std::io::Result<()> {
    let Some(path) = events_path() else {
        return Err(std::io::Error::other("no home directory"));
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let line = serde_json::to_string(event).map_err(std::io::Error::other)?;

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// Append an event, warning on stderr instead of failing.
pub fn log_best_effort(event: Event) {
    if let Err(e) = append_event(&event) {
        eprintln!("Warning: failed to log {:?} event: {}", event.action, e);
    }
}

/// Build the `user@HOST` actor string from the environment.
fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "localhost".to_string());

    format!("{}@{}", user, host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_serialize_one_line() {
        let event = Event {
            ts: Utc::now(),
            action: EventAction::Publish,
            actor: "alice@worklaptop".to_string(),
            url: "https://example.com".to_string(),
            details: json!({"shared": true}),
        };

        let line = serde_json::to_string(&event).unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains("\"action\":\"publish\""));
        assert!(line.contains("\"actor\":\"alice@worklaptop\""));
    }

    #[test]
    fn events_round_trip() {
        let event = Event::new(EventAction::Extract, "https://example.com")
            .with_details(json!({"title": "T"}));

        let line = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&line).unwrap();
        assert_eq!(back.action, EventAction::Extract);
        assert_eq!(back.url, "https://example.com");
        assert_eq!(back.details, json!({"title": "T"}));
    }

    #[test]
    fn actor_string_has_user_and_host() {
        let actor = actor_string();
        assert!(actor.contains('@'));
    }

    #[test]
    fn action_names_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&EventAction::Extract).unwrap(),
            "\"extract\""
        );
        assert_eq!(
            serde_json::to_string(&EventAction::Publish).unwrap(),
            "\"publish\""
        );
    }
}
