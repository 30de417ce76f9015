//! # dotplan
//!
//! A deferred filesystem-mutation batch for dotfile management. A caller
//! records an ordered list of intended operations against one working
//! directory, inspects or merges the plan, and applies it in a single pass.
//!
//! ## Quick Example
//!
//! ```
//! use dotplan::batch::OperationBatch;
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("vimrc"), "set number").unwrap();
//!
//! let mut batch = OperationBatch::new(dir.path());
//! batch.copy("vimrc", "backup/vimrc").link("vimrc", ".vimrc");
//!
//! // Nothing has touched the disk yet; the missing `backup` directory is
//! // queued ahead of the copy.
//! assert_eq!(
//!     batch.to_string(),
//!     "MKDIR \"backup\"\nCOPY \"vimrc\" -> \"backup/vimrc\"\nLINK \"vimrc\" -> \".vimrc\""
//! );
//!
//! batch.apply().unwrap();
//! assert!(dir.path().join("backup/vimrc").is_file());
//! ```
//!
//! ## Core Concepts
//!
//! - **Operations (`operation`)**: one planned action each: create a
//!   directory, copy, move, symlink, remove, or a caller-supplied
//!   [`CustomAction`](operation::CustomAction).
//! - **Batches (`batch`)**: the ordered container. Builder calls never touch
//!   the filesystem beyond checking whether a destination's parent exists.
//!   `apply` executes everything in order and stops at the first failure.
//! - **Plan files (`config`)**: a YAML description of a batch, used by the
//!   `dotplan` binary.
//! - **Output (`output`)**: terminal rendering of plans.

pub mod batch;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod operation;
pub mod output;
pub mod path;

#[cfg(test)]
mod path_proptest;
