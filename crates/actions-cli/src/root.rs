use actions_core::paths::DEFAULT_CONFIG;
use std::path::{Path, PathBuf};

/// Resolve the directory that relative input, output and config paths are
/// taken from.
///
/// Priority:
/// 1. `--root` flag / `ACTIONS_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `config/action_rules.yaml`
/// 3. Walk upward from `cwd` looking for `.git/`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_upward(&cwd, |dir| dir.join(DEFAULT_CONFIG).is_file())
        .or_else(|| find_upward(&cwd, |dir| dir.join(".git").is_dir()))
        .unwrap_or(cwd)
}

fn find_upward(start: &Path, found: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| found(*dir))
        .map(Path::to_path_buf)
}
