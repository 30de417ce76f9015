//! Deferred operation batches
//!
//! An [`OperationBatch`] records filesystem operations against one working
//! directory without touching the disk, then executes them in order with
//! [`OperationBatch::apply`].
//!
//! ## Destination directories
//!
//! `copy`, `move_to`, `link`, and `custom` check whether the parent of their
//! destination exists at the moment they are called. If it does not, a
//! `MKDIR` for that parent is queued right before the requested operation,
//! in the same relative or absolute form as the destination. The check looks
//! at the real filesystem only, so two destinations sharing a missing parent
//! each queue their own `MKDIR`. Creating an existing directory is a no-op at
//! apply time, so the duplicates are harmless.
//!
//! ## Failure
//!
//! `apply` stops at the first failing operation and returns
//! [`Error::Operation`]. Earlier operations stay applied; there is no
//! rollback.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::filesystem;
use crate::operation::{CustomAction, Operation};
use crate::path::{dest_parent, relative_to, resolve};

/// An ordered, not-yet-applied sequence of filesystem operations
#[derive(Debug, Clone)]
pub struct OperationBatch {
    working_dir: PathBuf,
    operations: Vec<Operation>,
}

impl OperationBatch {
    /// Create an empty batch bound to `working_dir`
    ///
    /// A relative `working_dir` is made absolute against the current
    /// directory.
    pub fn new<P: AsRef<Path>>(working_dir: P) -> Self {
        let working_dir = working_dir.as_ref();
        let working_dir =
            std::path::absolute(working_dir).unwrap_or_else(|_| working_dir.to_path_buf());

        Self {
            working_dir,
            operations: Vec::new(),
        }
    }

    /// The directory relative arguments are resolved against
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Queued operations in execution order
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Drop all queued operations
    pub fn clear(&mut self) {
        self.operations.clear();
    }

    fn push(&mut self, operation: Operation) {
        debug!("Queued {}", operation);
        self.operations.push(operation);
    }

    /// Queue a `MKDIR` for the parent of `dest` if that parent is missing on disk
    fn check_dest_dir(&mut self, dest: &Path) {
        if let Some(parent) = dest_parent(dest) {
            if !resolve(&self.working_dir, parent).is_dir() {
                self.push(Operation::Mkdir(parent.to_path_buf()));
            }
        }
    }

    /// Queue creation of a directory (and its missing parents)
    pub fn mkdir<P: AsRef<Path>>(&mut self, path: P) -> &mut Self {
        self.push(Operation::Mkdir(path.as_ref().to_path_buf()));
        self
    }

    /// Queue a copy of `source` to `dest`
    pub fn copy<P: AsRef<Path>, Q: AsRef<Path>>(&mut self, source: P, dest: Q) -> &mut Self {
        let dest = dest.as_ref();
        self.check_dest_dir(dest);
        self.push(Operation::Copy {
            source: source.as_ref().to_path_buf(),
            dest: dest.to_path_buf(),
        });
        self
    }

    /// Queue a move of `source` to `dest`
    ///
    /// Named `move_to` since `move` is a keyword.
    pub fn move_to<P: AsRef<Path>, Q: AsRef<Path>>(&mut self, source: P, dest: Q) -> &mut Self {
        let dest = dest.as_ref();
        self.check_dest_dir(dest);
        self.push(Operation::Move {
            source: source.as_ref().to_path_buf(),
            dest: dest.to_path_buf(),
        });
        self
    }

    /// Queue a symlink at `dest` pointing at `source`
    ///
    /// The link is written relative to its own directory, so a link created
    /// as `link_dir/link` to `dir/file` points at `../dir/file`.
    pub fn link<P: AsRef<Path>, Q: AsRef<Path>>(&mut self, source: P, dest: Q) -> &mut Self {
        let dest = dest.as_ref();
        self.check_dest_dir(dest);
        self.push(Operation::Link {
            source: source.as_ref().to_path_buf(),
            dest: dest.to_path_buf(),
        });
        self
    }

    /// Queue removal of a file or directory tree
    pub fn remove<P: AsRef<Path>>(&mut self, path: P) -> &mut Self {
        self.push(Operation::Remove(path.as_ref().to_path_buf()));
        self
    }

    /// Queue a caller-defined action
    ///
    /// The action is not invoked until [`apply`](Self::apply).
    pub fn custom<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        action: Arc<dyn CustomAction>,
        source: P,
        dest: Q,
    ) -> &mut Self {
        let dest = dest.as_ref();
        self.check_dest_dir(dest);
        self.push(Operation::Custom {
            action,
            source: source.as_ref().to_path_buf(),
            dest: dest.to_path_buf(),
        });
        self
    }

    /// Append the operations of `other` after this batch's own
    ///
    /// `other` is left untouched. Its operations will be resolved against
    /// this batch's working directory when applied.
    pub fn append(&mut self, other: &OperationBatch) -> &mut Self {
        if other.working_dir != self.working_dir {
            warn!(
                "Merging batch for '{}' into batch for '{}'; its relative paths will resolve against the latter",
                other.working_dir.display(),
                self.working_dir.display()
            );
        }
        self.operations.extend(other.operations.iter().cloned());
        self
    }

    /// Execute every queued operation in order
    ///
    /// Stops at the first failure, which is returned as
    /// [`Error::Operation`] carrying the failed operation's index.
    pub fn apply(&self) -> Result<()> {
        for (index, operation) in self.operations.iter().enumerate() {
            debug!("Applying {}", operation);
            self.execute(operation).map_err(|source| Error::Operation {
                index,
                operation: operation.describe(),
                source: Box::new(source),
            })?;
        }

        if !self.operations.is_empty() {
            info!(
                "Applied {} operation(s) in '{}'",
                self.operations.len(),
                self.working_dir.display()
            );
        }
        Ok(())
    }

    fn execute(&self, operation: &Operation) -> Result<()> {
        let wd: &Path = &self.working_dir;

        match operation {
            Operation::Mkdir(path) => filesystem::make_dir(&resolve(wd, path))?,
            Operation::Copy { source, dest } => {
                filesystem::copy(&resolve(wd, source), &resolve(wd, dest))?
            }
            Operation::Move { source, dest } => {
                filesystem::move_entry(&resolve(wd, source), &resolve(wd, dest))?
            }
            Operation::Link { source, dest } => {
                let source = resolve(wd, source);
                let dest = resolve(wd, dest);
                let link_dir = dest.parent().unwrap_or(wd);
                let target = relative_to(&source, link_dir);
                filesystem::symlink(&target, &dest, &source)?
            }
            Operation::Remove(path) => filesystem::remove(&resolve(wd, path))?,
            Operation::Custom {
                action,
                source,
                dest,
            } => {
                if action.resolve_paths() {
                    action.apply(&resolve(wd, source), &resolve(wd, dest))?
                } else {
                    action.apply(source, dest)?
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a OperationBatch {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}

/// One line per operation, no trailing newline
impl fmt::Display for OperationBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, operation) in self.operations.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", operation)?;
        }
        Ok(())
    }
}
