//! Planned filesystem operations
//!
//! An [`Operation`] is one queued step of an
//! [`OperationBatch`](crate::batch::OperationBatch). Built-in kinds carry
//! their path arguments exactly as the caller supplied them. The
//! [`Operation::Custom`] variant wraps a [`CustomAction`], which lets callers
//! plug in steps whose behaviour and rendering the batch knows nothing about.

use crate::error::Result;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The kind of a queued operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Mkdir,
    Copy,
    Move,
    Link,
    Remove,
    Custom,
}

impl OperationKind {
    /// Uppercase name used when rendering operations
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Mkdir => "MKDIR",
            OperationKind::Copy => "COPY",
            OperationKind::Move => "MOVE",
            OperationKind::Link => "LINK",
            OperationKind::Remove => "REMOVE",
            OperationKind::Custom => "CUSTOM",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller-defined step that can be queued in a batch
///
/// Implementors decide what applying the step means and how it prints.
/// The batch only guarantees that [`apply`](CustomAction::apply) is called
/// once per queued operation, at apply time, in queue order.
pub trait CustomAction: Send + Sync {
    /// Short label for the action, used by the default rendering
    fn name(&self) -> &str;

    /// Perform the action
    ///
    /// Receives the working-directory-resolved `source` and `dest`, or the
    /// raw arguments when [`resolve_paths`](CustomAction::resolve_paths)
    /// returns `false`.
    fn apply(&self, source: &Path, dest: &Path) -> Result<()>;

    /// One-line rendering of a queued invocation
    fn describe(&self, source: &Path, dest: &Path) -> String {
        format!(
            "{} \"{}\" -> \"{}\"",
            self.name(),
            source.display(),
            dest.display()
        )
    }

    /// Whether the batch resolves relative arguments before calling `apply`
    fn resolve_paths(&self) -> bool {
        true
    }
}

/// A [`CustomAction`] built from a name and a closure
pub struct FnAction<F> {
    name: String,
    func: F,
    resolve_paths: bool,
}

impl<F> FnAction<F>
where
    F: Fn(&Path, &Path) -> Result<()> + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
            resolve_paths: true,
        }
    }

    /// Pass arguments to the closure exactly as they were queued
    pub fn raw_paths(mut self) -> Self {
        self.resolve_paths = false;
        self
    }

    /// Wrap into the shared form a batch stores
    pub fn into_action(self) -> Arc<dyn CustomAction>
    where
        F: 'static,
    {
        Arc::new(self)
    }
}

impl<F> CustomAction for FnAction<F>
where
    F: Fn(&Path, &Path) -> Result<()> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, source: &Path, dest: &Path) -> Result<()> {
        (self.func)(source, dest)
    }

    fn resolve_paths(&self) -> bool {
        self.resolve_paths
    }
}

/// One planned filesystem action
#[derive(Clone)]
pub enum Operation {
    /// Create a directory and any missing parents
    Mkdir(PathBuf),
    /// Duplicate a file or directory tree
    Copy { source: PathBuf, dest: PathBuf },
    /// Relocate a file or directory
    Move { source: PathBuf, dest: PathBuf },
    /// Create a symlink at `dest` pointing at `source`
    Link { source: PathBuf, dest: PathBuf },
    /// Delete a file, symlink, or directory tree
    Remove(PathBuf),
    /// Run a caller-supplied action
    Custom {
        action: Arc<dyn CustomAction>,
        source: PathBuf,
        dest: PathBuf,
    },
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Mkdir(_) => OperationKind::Mkdir,
            Operation::Copy { .. } => OperationKind::Copy,
            Operation::Move { .. } => OperationKind::Move,
            Operation::Link { .. } => OperationKind::Link,
            Operation::Remove(_) => OperationKind::Remove,
            Operation::Custom { .. } => OperationKind::Custom,
        }
    }

    /// One-line human readable form
    ///
    /// Built-ins render as `KIND "arg"` or `KIND "source" -> "dest"`.
    /// Custom operations render however their action chooses.
    pub fn describe(&self) -> String {
        match self {
            Operation::Mkdir(path) | Operation::Remove(path) => {
                format!("{} \"{}\"", self.kind(), path.display())
            }
            Operation::Copy { source, dest }
            | Operation::Move { source, dest }
            | Operation::Link { source, dest } => format!(
                "{} \"{}\" -> \"{}\"",
                self.kind(),
                source.display(),
                dest.display()
            ),
            Operation::Custom {
                action,
                source,
                dest,
            } => action.describe(source, dest),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Custom {
                action,
                source,
                dest,
            } => f
                .debug_struct("Custom")
                .field("action", &action.name())
                .field("source", source)
                .field("dest", dest)
                .finish(),
            Operation::Mkdir(path) => f.debug_tuple("Mkdir").field(path).finish(),
            Operation::Remove(path) => f.debug_tuple("Remove").field(path).finish(),
            Operation::Copy { source, dest } => f
                .debug_struct("Copy")
                .field("source", source)
                .field("dest", dest)
                .finish(),
            Operation::Move { source, dest } => f
                .debug_struct("Move")
                .field("source", source)
                .field("dest", dest)
                .finish(),
            Operation::Link { source, dest } => f
                .debug_struct("Link")
                .field("source", source)
                .field("dest", dest)
                .finish(),
        }
    }
}

// Custom operations are equal when they share the same action instance.
impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Operation::Mkdir(a), Operation::Mkdir(b)) => a == b,
            (Operation::Remove(a), Operation::Remove(b)) => a == b,
            (
                Operation::Copy { source: s1, dest: d1 },
                Operation::Copy { source: s2, dest: d2 },
            )
            | (
                Operation::Move { source: s1, dest: d1 },
                Operation::Move { source: s2, dest: d2 },
            )
            | (
                Operation::Link { source: s1, dest: d1 },
                Operation::Link { source: s2, dest: d2 },
            ) => s1 == s2 && d1 == d2,
            (
                Operation::Custom {
                    action: a1,
                    source: s1,
                    dest: d1,
                },
                Operation::Custom {
                    action: a2,
                    source: s2,
                    dest: d2,
                },
            ) => Arc::ptr_eq(a1, a2) && s1 == s2 && d1 == d2,
            _ => false,
        }
    }
}
