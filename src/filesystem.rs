//! Executors for the built-in operation kinds
//!
//! Every function takes already-resolved paths and performs exactly one
//! filesystem change. None of them log; the batch reports progress.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Create a directory and any missing parents; existing directories are fine
pub fn make_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

/// Copy a file, symlink, or directory tree from `source` to `dest`
///
/// Symlinks are recreated with their original target text rather than
/// followed. Directory trees are merged into `dest` when it already exists.
pub fn copy(source: &Path, dest: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(source)?;

    if metadata.file_type().is_symlink() {
        copy_symlink(source, dest)
    } else if metadata.is_dir() {
        copy_tree(source, dest)
    } else {
        fs::copy(source, dest).map(|_| ())
    }
}

fn copy_tree(source: &Path, dest: &Path) -> io::Result<()> {
    for entry in WalkDir::new(source).follow_links(false) {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let target = dest.join(relative);
        let file_type = entry.file_type();

        if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else if file_type.is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

fn copy_symlink(source: &Path, dest: &Path) -> io::Result<()> {
    let target = fs::read_link(source)?;
    symlink(&target, dest, source)
}

/// Move `source` to `dest`, falling back to copy-and-remove across devices
pub fn move_entry(source: &Path, dest: &Path) -> io::Result<()> {
    match fs::rename(source, dest) {
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            copy(source, dest)?;
            remove(source)
        }
        other => other,
    }
}

/// Create a symlink at `link` whose target text is exactly `target`
///
/// `resolved_target` is only consulted on Windows, where file and directory
/// links are different calls.
#[cfg(unix)]
pub fn symlink(target: &Path, link: &Path, _resolved_target: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
pub fn symlink(target: &Path, link: &Path, resolved_target: &Path) -> io::Result<()> {
    if resolved_target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}

/// Remove a file, symlink, or directory tree
///
/// Symlinks are removed themselves, never the entry they point at.
pub fn remove(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;

    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
