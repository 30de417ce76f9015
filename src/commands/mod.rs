//! # CLI Command Implementations
//!
//! Each subcommand of the `dotplan` command-line tool lives in its own file
//! and consists of:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `dotplan` library.

pub mod apply;
pub mod show;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use dotplan::batch::OperationBatch;
use dotplan::config;

/// Load a plan file and build its batch
///
/// The default working directory is the `--working-dir` flag, or the
/// directory containing the plan file. A `working_dir` named in the plan is
/// resolved against that default.
pub fn load_batch(plan_path: &Path, working_dir: Option<&Path>) -> Result<OperationBatch> {
    if !plan_path.exists() {
        anyhow::bail!("Plan file not found: {}", plan_path.display());
    }

    let plan = config::from_file(plan_path)
        .with_context(|| format!("Failed to load plan {}", plan_path.display()))?;

    let default_working_dir = match working_dir {
        Some(dir) => dir.to_path_buf(),
        None => plan_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    log::debug!(
        "Building {} step(s) from {} (default working directory {})",
        plan.operations.len(),
        plan_path.display(),
        default_working_dir.display()
    );
    let batch = plan.into_batch(&default_working_dir);

    if !batch.working_dir().is_dir() {
        anyhow::bail!(
            "Working directory not found: {}",
            batch.working_dir().display()
        );
    }

    Ok(batch)
}
