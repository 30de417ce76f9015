//! Show command implementation
//!
//! Builds the batch described by a plan file and prints its trace without
//! touching the filesystem.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use dotplan::output::{render_plan, OutputConfig};

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Path to the plan file
    #[arg(value_name = "PLAN", env = "DOTPLAN_PLAN")]
    pub plan: PathBuf,

    /// Directory relative paths are resolved against
    #[arg(short = 'C', long, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,
}

/// Execute the show command
pub fn execute(args: ShowArgs, output: &OutputConfig) -> Result<()> {
    let batch = super::load_batch(&args.plan, args.working_dir.as_deref())?;

    if !batch.is_empty() {
        println!("{}", render_plan(&batch, output));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_execute_missing_plan() {
        let args = ShowArgs {
            plan: PathBuf::from("/nonexistent/plan.yaml"),
            working_dir: None,
        };

        let result = execute(args, &OutputConfig::from_env_and_flag("never"));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Plan file not found"));
    }

    #[test]
    fn test_execute_does_not_touch_disk() {
        let temp_dir = TempDir::new().unwrap();
        let plan_path = temp_dir.path().join("plan.yaml");
        fs::write(&plan_path, "operations:\n  - mkdir: new_dir\n").unwrap();

        let args = ShowArgs {
            plan: plan_path,
            working_dir: Some(temp_dir.path().to_path_buf()),
        };

        execute(args, &OutputConfig::from_env_and_flag("never")).unwrap();
        assert!(!temp_dir.path().join("new_dir").exists());
    }
}
