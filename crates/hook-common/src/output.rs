//! Hook output generation for stdout.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::{self, Write};

/// Main hook output structure.
///
/// Carries the context keys a hook set, for dispatchers that run hooks as
/// separate processes and merge the result back into the event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    /// Hook event name (`type:action`)
    pub hook_event_name: String,

    /// Context keys set by the hook
    #[serde(default)]
    pub context: Map<String, Value>,
}

impl HookOutput {
    /// Create an empty output for the given event.
    pub fn for_event(event_name: impl Into<String>) -> Self {
        Self {
            hook_event_name: event_name.into(),
            context: Map::new(),
        }
    }

    /// Merge a set of context keys.
    pub fn with_context(mut self, context: Map<String, Value>) -> Self {
        self.context.extend(context);
        self
    }

    /// Write the output to stdout.
    pub fn write_stdout(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string(self)?;
        io::stdout().write_all(json.as_bytes())?;
        io::stdout().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_serialization() {
        let mut context = Map::new();
        context.insert("memoryContext".to_string(), Value::from("## User Profile"));
        context.insert("hasMemory".to_string(), Value::Bool(true));

        let output = HookOutput::for_event("agent:bootstrap").with_context(context);
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"hookEventName\":\"agent:bootstrap\""));
        assert!(json.contains("\"hasMemory\":true"));
        assert!(json.contains("\"memoryContext\":\"## User Profile\""));
    }

    #[test]
    fn test_empty_context_serializes_as_object() {
        let output = HookOutput::for_event("agent:bootstrap");
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"context\":{}"));
    }
}
