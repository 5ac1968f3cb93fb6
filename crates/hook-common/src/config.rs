//! Agent configuration injected by the dispatcher.

use crate::error::HookError;
use crate::paths::expand_home;
use crate::session::DEFAULT_AGENT_ID;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Context key under which the dispatcher injects configuration.
pub const CONFIG_CONTEXT_KEY: &str = "cfg";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookConfig {
    #[serde(default)]
    pub agents: AgentsConfig,
}

/// Agent definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentsConfig {
    /// Defaults applied to the default agent
    #[serde(default)]
    pub defaults: AgentDefaults,

    /// Configured agents
    #[serde(default)]
    pub list: Vec<AgentConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDefaults {
    /// Workspace for the default agent
    #[serde(default)]
    pub workspace: Option<String>,
}

/// One configured agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    pub id: String,

    /// Marks this agent as the default agent
    #[serde(default)]
    pub default: bool,

    /// Explicit workspace directory
    #[serde(default)]
    pub workspace: Option<String>,
}

impl HookConfig {
    /// Read configuration from an event context.
    ///
    /// A missing or null `cfg` key means no configuration. A present but
    /// malformed value is an error.
    pub fn from_context(context: &Map<String, Value>) -> Result<Option<Self>, HookError> {
        match context.get(CONFIG_CONTEXT_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(HookError::InvalidConfig),
        }
    }

    /// Find an agent by id (case-insensitive).
    pub fn agent(&self, agent_id: &str) -> Option<&AgentConfig> {
        self.agents
            .list
            .iter()
            .find(|a| a.id.eq_ignore_ascii_case(agent_id))
    }

    /// Id of the default agent.
    ///
    /// The entry flagged `default`, else the first entry, else `main`.
    pub fn default_agent_id(&self) -> String {
        self.agents
            .list
            .iter()
            .find(|a| a.default)
            .or_else(|| self.agents.list.first())
            .map(|a| a.id.trim().to_lowercase())
            .unwrap_or_else(|| DEFAULT_AGENT_ID.to_string())
    }
}

/// Resolve the workspace directory for an agent.
///
/// Priority:
/// 1. The agent's own `workspace` entry
/// 2. For the default agent: `agents.defaults.workspace`, else `<state>/workspace`
/// 3. `<state>/workspace-<agentId>`
pub fn resolve_agent_workspace_dir(
    config: &HookConfig,
    agent_id: &str,
    state_dir: &Path,
    home: Option<PathBuf>,
) -> PathBuf {
    if let Some(workspace) = config
        .agent(agent_id)
        .and_then(|a| a.workspace.as_deref())
        .filter(|w| !w.trim().is_empty())
    {
        return expand_home(workspace.trim(), home);
    }

    if agent_id == config.default_agent_id() {
        if let Some(workspace) = config
            .agents
            .defaults
            .workspace
            .as_deref()
            .filter(|w| !w.trim().is_empty())
        {
            return expand_home(workspace.trim(), home);
        }
        return default_workspace_dir(state_dir);
    }

    state_dir.join(format!("workspace-{}", agent_id))
}

/// Workspace used when no configuration is available.
pub fn default_workspace_dir(state_dir: &Path) -> PathBuf {
    state_dir.join("workspace")
}
