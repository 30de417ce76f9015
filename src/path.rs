//! Path manipulation utilities for dotplan
//!
//! All helpers here are lexical: they never touch the filesystem and never
//! follow symlinks.

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `working_dir`
///
/// Absolute paths are returned unchanged.
pub fn resolve(working_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        working_dir.join(path)
    }
}

/// The directory part of a destination path
///
/// Returns `None` when `dest` has no directory component (`"file"`), so the
/// destination lives directly in whatever directory it is resolved against.
pub fn dest_parent(dest: &Path) -> Option<&Path> {
    dest.parent().filter(|parent| !parent.as_os_str().is_empty())
}

/// Lexically normalize a path
///
/// Drops `.` components and folds `..` into the preceding normal component.
/// Leading `..` components of a relative path are kept; `..` directly under
/// the root is dropped.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    parts.iter().collect()
}

/// Express `target` relative to the directory `base`
///
/// Both paths should be absolute (or both relative to the same directory).
/// The result walks up out of `base` with `..` as far as needed and then down
/// into `target`. Returns `.` when both name the same directory.
pub fn relative_to(target: &Path, base: &Path) -> PathBuf {
    let target = normalize(target);
    let base = normalize(base);

    let target_parts: Vec<Component<'_>> = target.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    let common = target_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &target_parts[common..] {
        relative.push(part);
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    relative
}
