use crate::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const MAX_SYMLINK_HOPS: usize = 40;

/// Follow `path` through any symlinks so the link itself survives a
/// replace. Dangling links resolve to the file they point at.
fn write_target(path: &Path) -> PathBuf {
    let mut target = path.to_path_buf();
    for _ in 0..MAX_SYMLINK_HOPS {
        let is_link = std::fs::symlink_metadata(&target)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false);
        if !is_link {
            break;
        }
        let Ok(link) = std::fs::read_link(&target) else {
            break;
        };
        target = match target.parent() {
            Some(parent) if link.is_relative() => parent.join(link),
            _ => link,
        };
    }
    target
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// Tempfile that ends up with ordinary file permissions (0644 less the
/// umask) rather than tempfile's private 0600.
#[cfg(unix)]
fn new_temp(dir: &Path) -> Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    Ok(tempfile::Builder::new()
        .permissions(std::fs::Permissions::from_mode(0o644))
        .tempfile_in(dir)?)
}

#[cfg(not(unix))]
fn new_temp(dir: &Path) -> Result<NamedTempFile> {
    Ok(NamedTempFile::new_in(dir)?)
}

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Parent directories are created as needed. An existing file at `path` is
/// replaced only once the new content is fully written, and keeps its
/// permissions; a symlink at `path` keeps pointing at the rewritten file.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let target = write_target(path);
    let dir = parent_dir(&target);
    std::fs::create_dir_all(dir)?;

    let existing = std::fs::metadata(&target).ok().map(|m| m.permissions());
    let mut tmp = new_temp(dir)?;
    tmp.write_all(data)?;
    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms)?;
    }
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

/// Write a file only if it does not already exist. Returns true if written.
/// A file created concurrently at `path` is never replaced.
pub fn write_if_missing(path: &Path, data: &[u8]) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    let dir = parent_dir(path);
    std::fs::create_dir_all(dir)?;
    let mut tmp = new_temp(dir)?;
    tmp.write_all(data)?;
    match tmp.persist_noclobber(path) {
        Ok(_) => Ok(true),
        Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e.error.into()),
    }
}
