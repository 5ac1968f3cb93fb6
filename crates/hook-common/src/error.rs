//! Hook error types.

use thiserror::Error;

/// Failures that abort a hook run before it can publish anything.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("invalid hook event: {0}")]
    InvalidEvent(#[source] serde_json::Error),

    #[error("invalid agent configuration: {0}")]
    InvalidConfig(#[source] serde_json::Error),
}
