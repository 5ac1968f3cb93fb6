//! Memory schema - what the workspace memory store yields.

/// One dated memory file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEntry {
    /// Filename text before the first dash
    pub date: String,

    /// Original filename
    pub filename: String,

    /// Raw file content
    pub content: String,
}

impl MemoryEntry {
    /// Build an entry from a dated filename and its content.
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        let filename = filename.into();
        let date = filename.split('-').next().unwrap_or(&filename).to_string();
        Self {
            date,
            filename,
            content: content.into(),
        }
    }
}

/// Everything loaded from a memory store in one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySnapshot {
    /// User profile, if readable
    pub profile: Option<String>,

    /// Active context, if readable
    pub active_context: Option<String>,

    /// Recent dated entries, most recent first
    pub recent: Vec<MemoryEntry>,
}

impl MemorySnapshot {
    /// One-line aggregate summary for logs.
    pub fn summary(&self) -> String {
        format!(
            "profile={} active={} recent={}",
            yes_no(self.profile.is_some()),
            yes_no(self.active_context.is_some()),
            self.recent.len()
        )
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
