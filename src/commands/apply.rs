//! Apply command implementation
//!
//! Builds the batch described by a plan file, prints it, and applies it.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use dotplan::output::{emoji, render_plan, OutputConfig};

/// Arguments for the apply command
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Path to the plan file
    #[arg(value_name = "PLAN", env = "DOTPLAN_PLAN")]
    pub plan: PathBuf,

    /// Directory relative paths are resolved against
    #[arg(short = 'C', long, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    /// Show what would be done without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the apply command
pub fn execute(args: ApplyArgs, output: &OutputConfig) -> Result<()> {
    let start_time = Instant::now();
    let batch = super::load_batch(&args.plan, args.working_dir.as_deref())?;

    if !args.quiet {
        if args.dry_run {
            println!("{} DRY RUN MODE - No changes will be made", emoji(output, "🔎", "[DRY RUN]"));
            println!();
        }
        if !batch.is_empty() {
            println!("{}", render_plan(&batch, output));
            println!();
        }
    }

    if args.dry_run {
        return Ok(());
    }

    match batch.apply() {
        Ok(()) => {
            if !args.quiet {
                println!(
                    "{} Applied {} operation(s) in {:.2}s",
                    emoji(output, "✅", "[OK]"),
                    batch.len(),
                    start_time.elapsed().as_secs_f64()
                );
            }
            Ok(())
        }
        Err(e) => {
            if !args.quiet {
                println!("{} Apply failed", emoji(output, "❌", "[FAILED]"));
                println!();
            }
            Err(e.into())
        }
    }
}
