//! Read-only access to a workspace memory store.
//!
//! Layout under `<workspace>/memory/`:
//! - `jeeves-profile.md` - user profile
//! - `active-context.md` - what the agent is currently working on
//! - `YYYY-MM-DD*.md` - dated entries written by the session-memory writer

use crate::error::{MemoryError, Result};
use crate::schema::{MemoryEntry, MemorySnapshot};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tokio::fs;

/// Memory directory inside a workspace.
pub const MEMORY_DIR: &str = "memory";

/// User profile filename.
pub const PROFILE_FILE: &str = "jeeves-profile.md";

/// Active context filename.
pub const ACTIVE_CONTEXT_FILE: &str = "active-context.md";

/// Number of dated entries loaded by default.
pub const DEFAULT_RECENT_LIMIT: usize = 3;

static DATED_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}.*\.md$").expect("dated file pattern is valid")
});

/// Memory store rooted at a workspace's `memory/` directory.
///
/// Every read tolerates failure: a missing or unreadable source is reported
/// as absent and never propagated. Callers log the aggregate via
/// [`MemorySnapshot::summary`].
#[derive(Debug, Clone)]
pub struct MemoryStore {
    dir: PathBuf,
}

impl MemoryStore {
    /// Create a store over an explicit memory directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store for a workspace root.
    pub fn for_workspace(workspace: &Path) -> Self {
        Self::new(workspace.join(MEMORY_DIR))
    }

    /// Load all three sources concurrently.
    pub async fn load(&self, recent_limit: usize) -> MemorySnapshot {
        let (profile, active_context, recent) = tokio::join!(
            self.profile(),
            self.active_context(),
            self.recent_entries(recent_limit),
        );

        MemorySnapshot {
            profile,
            active_context,
            recent,
        }
    }

    /// Most recent dated entries, newest first.
    ///
    /// Any listing or read error yields an empty list.
    pub async fn recent_entries(&self, limit: usize) -> Vec<MemoryEntry> {
        self.try_recent_entries(limit).await.unwrap_or_default()
    }

    /// Fallible form of [`MemoryStore::recent_entries`].
    pub async fn try_recent_entries(&self, limit: usize) -> Result<Vec<MemoryEntry>> {
        let list_err = |source: std::io::Error| MemoryError::ListDir {
            path: self.dir.clone(),
            source,
        };

        let mut dir = fs::read_dir(&self.dir).await.map_err(list_err)?;
        let mut names = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(list_err)? {
            // Non UTF-8 names can never match the dated pattern
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }

        let mut entries = Vec::new();
        for name in select_recent(names, limit) {
            let content = read_file(&self.dir.join(&name)).await?;
            entries.push(MemoryEntry::new(name, content));
        }

        Ok(entries)
    }

    /// User profile content.
    pub async fn profile(&self) -> Option<String> {
        self.read_optional(PROFILE_FILE).await
    }

    /// Active context content.
    pub async fn active_context(&self) -> Option<String> {
        self.read_optional(ACTIVE_CONTEXT_FILE).await
    }

    async fn read_optional(&self, name: &str) -> Option<String> {
        read_file(&self.dir.join(name)).await.ok()
    }
}

/// Check if a filename follows the dated entry convention.
pub fn is_dated_memory_file(name: &str) -> bool {
    DATED_FILE.is_match(name)
}

/// Pick the newest dated filenames.
///
/// Names sort lexicographically descending, which is reverse chronological
/// because of the ISO date prefix.
pub fn select_recent<I>(names: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut dated: Vec<String> = names
        .into_iter()
        .filter(|name| is_dated_memory_file(name))
        .collect();
    dated.sort_unstable_by(|a, b| b.cmp(a));
    dated.truncate(limit);
    dated
}

async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|source| MemoryError::ReadFile {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dated_pattern() {
        assert!(is_dated_memory_file("2024-01-01.md"));
        assert!(is_dated_memory_file("2024-01-01-standup.md"));
        assert!(is_dated_memory_file("2024-01-01T0930 notes.md"));
        assert!(!is_dated_memory_file("notes.txt"));
        assert!(!is_dated_memory_file("2024-01-01.txt"));
        assert!(!is_dated_memory_file("2024-1-01.md"));
        assert!(!is_dated_memory_file("x2024-01-01.md"));
        assert!(!is_dated_memory_file("jeeves-profile.md"));
        assert!(!is_dated_memory_file("2024-01-01.md.bak"));
    }

    #[test]
    fn test_select_recent_orders_newest_first() {
        let selected = select_recent(
            names(&["2024-01-01-a.md", "2024-03-15-b.md", "2024-02-10-c.md", "notes.txt"]),
            3,
        );
        assert_eq!(
            selected,
            names(&["2024-03-15-b.md", "2024-02-10-c.md", "2024-01-01-a.md"])
        );
    }

    #[test]
    fn test_select_recent_applies_limit() {
        let selected = select_recent(
            names(&["2024-01-01.md", "2024-01-03.md", "2024-01-02.md", "2024-01-04.md"]),
            2,
        );
        assert_eq!(selected, names(&["2024-01-04.md", "2024-01-03.md"]));
        assert!(select_recent(names(&["2024-01-01.md"]), 0).is_empty());
    }

    #[tokio::test]
    async fn test_recent_entries_reads_content() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("2024-01-01-a.md"), "first").unwrap();
        std::fs::write(dir.path().join("2024-03-15-b.md"), "third").unwrap();
        std::fs::write(dir.path().join("2024-02-10-c.md"), "second").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let store = MemoryStore::new(dir.path());
        let entries = store.recent_entries(DEFAULT_RECENT_LIMIT).await;

        let filenames: Vec<&str> = entries.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(
            filenames,
            vec!["2024-03-15-b.md", "2024-02-10-c.md", "2024-01-01-a.md"]
        );
        assert_eq!(entries[0].content, "third");
        assert_eq!(entries[0].date, "2024");
    }

    #[tokio::test]
    async fn test_missing_directory_is_empty() {
        let dir = tempdir().unwrap();
        let store = MemoryStore::for_workspace(&dir.path().join("nowhere"));

        assert!(store.recent_entries(3).await.is_empty());
        assert!(matches!(
            store.try_recent_entries(3).await,
            Err(MemoryError::ListDir { .. })
        ));
        assert_eq!(store.profile().await, None);
        assert_eq!(store.active_context().await, None);
    }

    #[tokio::test]
    async fn test_unreadable_entry_empties_recent_only() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(PROFILE_FILE), "likes tea").unwrap();
        std::fs::write(dir.path().join("2024-01-01.md"), "fine").unwrap();
        std::fs::write(dir.path().join("2024-02-01.md"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let store = MemoryStore::new(dir.path());
        assert!(matches!(
            store.try_recent_entries(3).await,
            Err(MemoryError::ReadFile { .. })
        ));

        let snapshot = store.load(3).await;
        assert_eq!(snapshot.profile.as_deref(), Some("likes tea"));
        assert!(snapshot.recent.is_empty());
    }

    #[tokio::test]
    async fn test_load_collects_all_sources() {
        let dir = tempdir().unwrap();
        let memory = dir.path().join(MEMORY_DIR);
        std::fs::create_dir_all(&memory).unwrap();
        std::fs::write(memory.join(PROFILE_FILE), "profile").unwrap();
        std::fs::write(memory.join(ACTIVE_CONTEXT_FILE), "active").unwrap();
        std::fs::write(memory.join("2024-05-05.md"), "entry").unwrap();

        let store = MemoryStore::for_workspace(dir.path());

        let snapshot = store.load(DEFAULT_RECENT_LIMIT).await;
        assert_eq!(snapshot.profile.as_deref(), Some("profile"));
        assert_eq!(snapshot.active_context.as_deref(), Some("active"));
        assert_eq!(snapshot.recent.len(), 1);
    }

    #[tokio::test]
    async fn test_load_leaves_store_untouched() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("2024-05-05.md"), "entry").unwrap();
        std::fs::write(dir.path().join(ACTIVE_CONTEXT_FILE), "active").unwrap();

        let list = || {
            let mut names: Vec<String> = std::fs::read_dir(dir.path())
                .unwrap()
                .map(|e| e.unwrap().file_name().into_string().unwrap())
                .collect();
            names.sort();
            names
        };
        let before = list();

        MemoryStore::new(dir.path()).load(3).await;

        assert_eq!(list(), before);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("2024-05-05.md")).unwrap(),
            "entry"
        );
    }
}
