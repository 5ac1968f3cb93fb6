//! agent:bootstrap hook: Attach workspace memory to a new session.
//!
//! Reads the user profile, the active context and the most recent dated
//! entries from `<workspace>/memory/`, assembles them into one bounded text
//! block and publishes it on the event context as `memoryContext`, together
//! with `hasMemory = true`.
//!
//! The hook never fails its caller: unreadable sources are skipped, and any
//! other error is logged and swallowed.

use hook_common::config::{HookConfig, default_workspace_dir, resolve_agent_workspace_dir};
use hook_common::debug::{HookDebugLog, log_decision};
use hook_common::{Environment, HookError, HookEvent, resolve_agent_id, resolve_state_dir};
use hook_memory::{ContextLimits, DEFAULT_RECENT_LIMIT, MemoryStore, format_memory_context};
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::{debug, error, info};

pub const HOOK_NAME: &str = "bootstrap-memory";

/// Context key holding the assembled memory text.
pub const MEMORY_CONTEXT_KEY: &str = "memoryContext";

/// Context key signalling that this hook ran.
pub const HAS_MEMORY_KEY: &str = "hasMemory";

/// Tunables for one hook run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookOptions {
    /// Number of dated entries to include
    pub recent_limit: usize,
    pub limits: ContextLimits,
}

impl Default for HookOptions {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            limits: ContextLimits::default(),
        }
    }
}

/// Context keys produced by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextPatch {
    pub memory_context: String,
    /// Always true: the flag means "the hook ran", not "memory was found"
    pub has_memory: bool,
}

impl ContextPatch {
    pub fn new(memory_context: impl Into<String>) -> Self {
        Self {
            memory_context: memory_context.into(),
            has_memory: true,
        }
    }

    /// Write both keys into an event context.
    pub fn apply(&self, context: &mut Map<String, Value>) {
        context.extend(self.to_map());
    }

    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            MEMORY_CONTEXT_KEY.to_string(),
            Value::String(self.memory_context.clone()),
        );
        map.insert(HAS_MEMORY_KEY.to_string(), Value::Bool(self.has_memory));
        map
    }
}

/// What a hook run did.
#[derive(Debug)]
pub enum HookOutcome {
    /// Event was not agent:bootstrap; nothing was touched
    Skipped,
    /// Patch was applied to the event context
    Published(ContextPatch),
    /// Error was logged and swallowed; context left as it was
    Failed(HookError),
}

impl HookOutcome {
    pub fn is_published(&self) -> bool {
        matches!(self, HookOutcome::Published(_))
    }
}

/// Run the hook with default options.
pub async fn handle(event: &mut HookEvent, env: &Environment) -> HookOutcome {
    handle_with(event, env, &HookOptions::default()).await
}

/// Run the hook.
///
/// Everything after the admission check runs inside one failure boundary.
pub async fn handle_with(
    event: &mut HookEvent,
    env: &Environment,
    options: &HookOptions,
) -> HookOutcome {
    if !event.is_agent_bootstrap() {
        return HookOutcome::Skipped;
    }

    let state_dir = state_dir(env);
    let debug_entry =
        || HookDebugLog::new(HOOK_NAME, &event.event_name()).with_session(&event.session_key);

    match build_patch(event, env, options).await {
        Ok((patch, sources)) => {
            let reason = format!("{} chars", patch.memory_context.chars().count());
            log_decision(
                env,
                &state_dir,
                debug_entry()
                    .with_decision("publish", &reason)
                    .with_context(&sources),
            );
            info!(session = %event.session_key, "Memory context loaded ({})", reason);

            patch.apply(&mut event.context);
            HookOutcome::Published(patch)
        }
        Err(e) => {
            error!(session = %event.session_key, "Failed to load memory context: {}", e);
            log_decision(env, &state_dir, debug_entry().with_decision("fail", &e.to_string()));
            HookOutcome::Failed(e)
        }
    }
}

/// Resolve, read and assemble without touching the event.
///
/// Also returns the aggregate source summary for logging.
async fn build_patch(
    event: &HookEvent,
    env: &Environment,
    options: &HookOptions,
) -> Result<(ContextPatch, String), HookError> {
    let config = HookConfig::from_context(&event.context)?;
    let workspace = resolve_workspace(config.as_ref(), &event.session_key, env);

    let store = MemoryStore::for_workspace(&workspace);
    let snapshot = store.load(options.recent_limit).await;
    let sources = snapshot.summary();
    debug!(workspace = %workspace.display(), "Memory sources: {}", sources);

    let patch = ContextPatch::new(format_memory_context(&snapshot, &options.limits));
    Ok((patch, sources))
}

/// Resolve the workspace root for a session.
///
/// With configuration, the agent named by the session key picks its
/// workspace. Without, `<state-dir>/workspace` is used.
pub fn resolve_workspace(
    config: Option<&HookConfig>,
    session_key: &str,
    env: &Environment,
) -> PathBuf {
    let state_dir = state_dir(env);
    match config {
        Some(cfg) => {
            let agent_id = resolve_agent_id(session_key);
            resolve_agent_workspace_dir(cfg, &agent_id, &state_dir, env.home_dir())
        }
        None => default_workspace_dir(&state_dir),
    }
}

fn state_dir(env: &Environment) -> PathBuf {
    resolve_state_dir(|key| env.var(key), || env.home_dir())
}
