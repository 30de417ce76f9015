//! # Plan Files
//!
//! This module defines the YAML format used to describe a batch on disk and
//! turns a parsed plan into an [`OperationBatch`].
//!
//! ```yaml
//! working_dir: dotfiles          # optional
//! operations:
//!   - mkdir: new_dir
//!   - copy: { source: dir1/file1, dest: copy_dir/file }
//!   - move: { source: rename, dest: renamed }
//!   - link: { source: dir1/file1, dest: link_dir/link1 }
//!   - remove: delete_file
//! ```
//!
//! Building goes through the batch's builder methods, so destination
//! directories are checked against the filesystem at build time exactly as
//! they are for library callers. Custom operations only exist in the library
//! API and have no plan file form.

use crate::batch::OperationBatch;
use crate::error::{Error, Result};
use crate::path::resolve;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

const STEP_HINT: &str =
    "each operation is one of `mkdir: PATH`, `remove: PATH`, or `copy|move|link: { source: PATH, dest: PATH }`";

/// Source and destination of a two-argument step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Transfer {
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// One step of a plan file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanStep {
    Mkdir { mkdir: PathBuf },
    Copy { copy: Transfer },
    Move {
        #[serde(rename = "move")]
        move_: Transfer,
    },
    Link { link: Transfer },
    Remove { remove: PathBuf },
}

/// A parsed plan file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanFile {
    /// Directory the plan runs in; relative values are resolved against the
    /// default working directory given to [`PlanFile::into_batch`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
    /// Steps in execution order
    #[serde(default, deserialize_with = "deserialize_steps")]
    pub operations: Vec<PlanStep>,
}

/// Each step must be a single-key mapping; extra keys are an error rather
/// than being dropped by the untagged match.
fn deserialize_steps<'de, D>(deserializer: D) -> std::result::Result<Vec<PlanStep>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_yaml::Mapping>::deserialize(deserializer)?;

    raw.into_iter()
        .enumerate()
        .map(|(index, step)| {
            if step.len() != 1 {
                let keys: Vec<&str> = step.keys().map(|k| k.as_str().unwrap_or("?")).collect();
                return Err(D::Error::custom(format!(
                    "operation #{} must have exactly one key, found {}: {}",
                    index,
                    step.len(),
                    keys.join(", ")
                )));
            }
            serde_yaml::from_value(serde_yaml::Value::Mapping(step))
                .map_err(|e| D::Error::custom(format!("operation #{}: {}", index, e)))
        })
        .collect()
}

impl PlanFile {
    /// Queue every step into a new batch
    ///
    /// The batch runs in the plan's own `working_dir` resolved against
    /// `default_working_dir`, or in `default_working_dir` when the plan
    /// names none.
    pub fn into_batch(self, default_working_dir: &Path) -> OperationBatch {
        let working_dir = match &self.working_dir {
            Some(wd) => resolve(default_working_dir, wd),
            None => default_working_dir.to_path_buf(),
        };
        let mut batch = OperationBatch::new(working_dir);

        for step in &self.operations {
            match step {
                PlanStep::Mkdir { mkdir } => batch.mkdir(mkdir),
                PlanStep::Copy { copy } => batch.copy(&copy.source, &copy.dest),
                PlanStep::Move { move_ } => batch.move_to(&move_.source, &move_.dest),
                PlanStep::Link { link } => batch.link(&link.source, &link.dest),
                PlanStep::Remove { remove } => batch.remove(remove),
            };
        }

        batch
    }
}

/// Parse a plan from YAML text
///
/// Empty or comment-only input is an empty plan. Malformed YAML is reported
/// as [`Error::Yaml`]; well-formed YAML that is not a valid plan as
/// [`Error::PlanParse`].
pub fn parse(yaml_content: &str) -> Result<PlanFile> {
    let blank = yaml_content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    });
    if blank {
        return Ok(PlanFile::default());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(yaml_content)?;
    serde_yaml::from_value(value).map_err(|e| Error::PlanParse {
        message: e.to_string(),
        hint: Some(STEP_HINT.to_string()),
    })
}

/// Read and parse a plan file
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<PlanFile> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}
