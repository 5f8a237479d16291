use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "data/notes.txt";
pub const DEFAULT_OUTPUT: &str = "data/actions.csv";
pub const DEFAULT_CONFIG: &str = "config/action_rules.yaml";

// ---------------------------------------------------------------------------
// Path resolution
// ---------------------------------------------------------------------------

/// Resolve `path` against `root` unless it is already absolute.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

pub fn input_path(root: &Path, explicit: Option<&Path>) -> PathBuf {
    resolve(root, explicit.unwrap_or(Path::new(DEFAULT_INPUT)))
}

pub fn output_path(root: &Path, explicit: Option<&Path>) -> PathBuf {
    resolve(root, explicit.unwrap_or(Path::new(DEFAULT_OUTPUT)))
}

pub fn config_path(root: &Path, explicit: Option<&Path>) -> PathBuf {
    resolve(root, explicit.unwrap_or(Path::new(DEFAULT_CONFIG)))
}
