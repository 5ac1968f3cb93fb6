//! Debug logging for hooks.
//!
//! Logs admitted hook runs to a JSONL file under the state directory when
//! JEEVES_HOOK_DEBUG is set.

use crate::env::{Environment, HOOK_DEBUG_VAR};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Debug log entry for hook execution
#[derive(Debug, Serialize)]
pub struct HookDebugLog {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Hook name (e.g., "bootstrap-memory")
    pub hook_name: String,
    /// Event name (`type:action`)
    pub event: String,
    /// Session key the event belongs to
    pub session_key: String,
    /// Decision made (publish/fail)
    pub decision: String,
    /// Reason for the decision
    pub reason: String,
    /// Additional context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl HookDebugLog {
    pub fn new(hook_name: &str, event: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            hook_name: hook_name.to_string(),
            event: event.to_string(),
            session_key: String::new(),
            decision: String::new(),
            reason: String::new(),
            context: None,
        }
    }

    pub fn with_session(mut self, session_key: &str) -> Self {
        self.session_key = session_key.to_string();
        self
    }

    pub fn with_decision(mut self, decision: &str, reason: &str) -> Self {
        self.decision = decision.to_string();
        self.reason = reason.to_string();
        self
    }

    pub fn with_context(mut self, context: &str) -> Self {
        // Truncate to 200 chars to avoid huge logs
        self.context = Some(if context.chars().count() > 200 {
            format!("{}...", context.chars().take(200).collect::<String>())
        } else {
            context.to_string()
        });
        self
    }

    /// Append the entry to the given log file.
    pub fn write_to(&self, log_path: &Path) -> std::io::Result<()> {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let json = serde_json::to_string(self).unwrap_or_default();
        writeln!(file, "{}", json)?;

        Ok(())
    }
}

/// Check if debug mode is enabled
pub fn is_debug_enabled(env: &Environment) -> bool {
    env.var(HOOK_DEBUG_VAR).is_some_and(|v| !v.is_empty() && v != "0")
}

/// Get debug log file path
pub fn debug_log_path(state_dir: &Path) -> PathBuf {
    state_dir.join("logs").join("hook-debug.jsonl")
}

/// Quick helper to log a hook decision
///
/// No-op unless debug mode is enabled. Write failures are dropped.
pub fn log_decision(env: &Environment, state_dir: &Path, entry: HookDebugLog) {
    if !is_debug_enabled(env) {
        return;
    }

    let path = debug_log_path(state_dir);
    if let Err(e) = entry.write_to(&path) {
        tracing::debug!("Failed to write hook debug log {}: {}", path.display(), e);
    }
}
