//! Workspace memory store for agent hooks.
//!
//! Provides:
//! - Memory entry schema
//! - Read-only, failure-tolerant readers
//! - Memory context assembly

pub mod error;
pub mod format;
pub mod schema;
pub mod storage;

pub use error::MemoryError;
pub use format::{ContextLimits, format_memory_context};
pub use schema::{MemoryEntry, MemorySnapshot};
pub use storage::{DEFAULT_RECENT_LIMIT, MemoryStore};
