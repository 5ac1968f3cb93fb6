//! State directory resolution.

use crate::env::STATE_DIR_VAR;
use std::path::{Path, PathBuf};

/// Directory name under the home directory.
const STATE_DIR_NAME: &str = ".jeeves";

/// Resolve the state directory.
///
/// Priority:
/// 1. JEEVES_STATE_DIR environment variable (if set and non-blank)
/// 2. ~/.jeeves
/// 3. .jeeves (relative, when no home directory is known)
pub fn resolve_state_dir<E, H>(env: E, home: H) -> PathBuf
where
    E: Fn(&str) -> Option<String>,
    H: Fn() -> Option<PathBuf>,
{
    if let Some(custom) = env(STATE_DIR_VAR) {
        let custom = custom.trim();
        if !custom.is_empty() {
            return expand_home(custom, home());
        }
    }

    match home() {
        Some(home) => home.join(STATE_DIR_NAME),
        None => PathBuf::from(STATE_DIR_NAME),
    }
}

/// Expand a leading `~` against the given home directory.
///
/// Paths without a leading `~`, or with no known home, are returned as-is.
pub fn expand_home(path: &str, home: Option<PathBuf>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    if path == "~" {
        return home;
    }

    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => Path::new(path).to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_under_home() {
        let dir = resolve_state_dir(no_env, || Some(PathBuf::from("/home/alice")));
        assert_eq!(dir, PathBuf::from("/home/alice/.jeeves"));
    }

    #[test]
    fn test_override_from_env() {
        let env = |key: &str| (key == STATE_DIR_VAR).then(|| "/srv/jeeves".to_string());
        let dir = resolve_state_dir(env, || Some(PathBuf::from("/home/alice")));
        assert_eq!(dir, PathBuf::from("/srv/jeeves"));
    }

    #[test]
    fn test_override_expands_tilde() {
        let env = |_: &str| Some("~/state".to_string());
        let dir = resolve_state_dir(env, || Some(PathBuf::from("/home/alice")));
        assert_eq!(dir, PathBuf::from("/home/alice/state"));
    }

    #[test]
    fn test_blank_override_ignored() {
        let env = |_: &str| Some("   ".to_string());
        let dir = resolve_state_dir(env, || Some(PathBuf::from("/home/alice")));
        assert_eq!(dir, PathBuf::from("/home/alice/.jeeves"));
    }

    #[test]
    fn test_no_home_falls_back_to_relative() {
        let dir = resolve_state_dir(no_env, || None);
        assert_eq!(dir, PathBuf::from(".jeeves"));
    }

    #[test]
    fn test_expand_home() {
        let home = Some(PathBuf::from("/home/bob"));
        assert_eq!(expand_home("~", home.clone()), PathBuf::from("/home/bob"));
        assert_eq!(expand_home("~/ws", home.clone()), PathBuf::from("/home/bob/ws"));
        assert_eq!(expand_home("/abs/ws", home.clone()), PathBuf::from("/abs/ws"));
        assert_eq!(expand_home("~other/ws", home), PathBuf::from("~other/ws"));
        assert_eq!(expand_home("~/ws", None), PathBuf::from("~/ws"));
    }
}
