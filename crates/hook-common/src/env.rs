//! Process environment snapshot.
//!
//! Hooks never read ambient globals directly: the binary captures the
//! environment once and passes it down, so tests can inject their own.

use std::collections::HashMap;
use std::path::PathBuf;

/// Overrides the state directory.
pub const STATE_DIR_VAR: &str = "JEEVES_STATE_DIR";

/// Enables the JSONL debug decision log.
pub const HOOK_DEBUG_VAR: &str = "JEEVES_HOOK_DEBUG";

/// Snapshot of environment variables plus the home directory.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
    home: Option<PathBuf>,
}

impl Environment {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
            home: dirs::home_dir(),
        }
    }

    /// Create an empty environment with no home directory.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set a variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Set the home directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Look up a variable.
    pub fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    /// Home directory, if known.
    pub fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}
