//! Memory context assembly.
//!
//! Sections are always emitted in the same order: profile, active context,
//! recent memories. Absent sources are skipped entirely.

use crate::schema::MemorySnapshot;

pub const PROFILE_HEADING: &str = "## User Profile";
pub const ACTIVE_CONTEXT_HEADING: &str = "## Active Context";
pub const RECENT_HEADING: &str = "## Recent Memories";

/// Per-section character budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextLimits {
    pub profile_chars: usize,
    pub active_context_chars: usize,
    /// Budget for each recent entry
    pub entry_chars: usize,
}

impl Default for ContextLimits {
    fn default() -> Self {
        Self {
            profile_chars: 1000,
            active_context_chars: 1000,
            entry_chars: 500,
        }
    }
}

/// Build the memory context block.
///
/// Returns an empty string when the snapshot holds nothing.
pub fn format_memory_context(snapshot: &MemorySnapshot, limits: &ContextLimits) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(profile) = &snapshot.profile {
        lines.push(PROFILE_HEADING.to_string());
        lines.push(truncate_chars(profile, limits.profile_chars).to_string());
        lines.push(String::new());
    }

    if let Some(active) = &snapshot.active_context {
        lines.push(ACTIVE_CONTEXT_HEADING.to_string());
        lines.push(truncate_chars(active, limits.active_context_chars).to_string());
        lines.push(String::new());
    }

    if !snapshot.recent.is_empty() {
        lines.push(RECENT_HEADING.to_string());
        for entry in &snapshot.recent {
            lines.push(format!("### {}", entry.filename));
            lines.push(truncate_chars(&entry.content, limits.entry_chars).to_string());
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// First `max` characters of `text`, never splitting a UTF-8 sequence.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
