//! Hook event parsing from stdin.

use crate::error::HookError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::io::{self, Read};

/// Event category for agent lifecycle events.
pub const AGENT_EVENT: &str = "agent";

/// Action fired once when a new agent session begins.
pub const BOOTSTRAP_ACTION: &str = "bootstrap";

/// Event delivered by the hook dispatcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookEvent {
    /// Event category (e.g., "agent", "command")
    #[serde(rename = "type", default)]
    pub event_type: String,

    /// Sub-tag within the category (e.g., "bootstrap")
    #[serde(default)]
    pub action: String,

    /// Opaque session identifier
    #[serde(default)]
    pub session_key: String,

    /// Context shared by the dispatcher and every hook for this event
    #[serde(default)]
    pub context: Map<String, Value>,

    /// Additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl HookEvent {
    /// Create an event with an empty context.
    pub fn new(
        event_type: impl Into<String>,
        action: impl Into<String>,
        session_key: impl Into<String>,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            action: action.into(),
            session_key: session_key.into(),
            ..Self::default()
        }
    }

    /// Read and parse a hook event from stdin.
    pub fn from_stdin() -> anyhow::Result<Self> {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        Ok(Self::from_json(&input)?)
    }

    /// Parse a hook event from JSON text.
    pub fn from_json(json: &str) -> Result<Self, HookError> {
        serde_json::from_str(json).map_err(HookError::InvalidEvent)
    }

    /// Check if this is the agent bootstrap event.
    pub fn is_agent_bootstrap(&self) -> bool {
        self.event_type == AGENT_EVENT && self.action == BOOTSTRAP_ACTION
    }

    /// Event name in `type:action` form.
    pub fn event_name(&self) -> String {
        format!("{}:{}", self.event_type, self.action)
    }
}
