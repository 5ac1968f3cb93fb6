//! Common utilities for agent runtime hooks.
//!
//! This crate provides shared functionality for Rust-based hooks:
//! - JSON event input/output parsing
//! - Environment snapshot and state directory resolution
//! - Agent configuration and session key parsing
//! - Error handling
//! - Tracing setup and debug logging

pub mod config;
pub mod debug;
pub mod env;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod paths;
pub mod session;

pub use config::{HookConfig, default_workspace_dir, resolve_agent_workspace_dir};
pub use debug::{HookDebugLog, is_debug_enabled, log_decision};
pub use env::Environment;
pub use error::HookError;
pub use input::HookEvent;
pub use logging::init_tracing;
pub use output::HookOutput;
pub use paths::resolve_state_dir;
pub use session::resolve_agent_id;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{HookConfig, default_workspace_dir, resolve_agent_workspace_dir};
    pub use crate::debug::{HookDebugLog, is_debug_enabled, log_decision};
    pub use crate::env::Environment;
    pub use crate::error::HookError;
    pub use crate::input::HookEvent;
    pub use crate::output::HookOutput;
    pub use crate::paths::resolve_state_dir;
    pub use crate::session::resolve_agent_id;
    pub use anyhow::{Context, Result};
    pub use serde::{Deserialize, Serialize};
}
