//! chainmake binary entry point.
//!
//! Loads a makefile, then converts and concatenates every task in order.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chainmake_core::config::{Makefile, MakefileLoader};
use chainmake_core::logging::{init_tracing, ProgressSink, Verbosity};
use chainmake_core::orchestrator::{RunContext, TaskRunner};
use clap::Parser;

/// Convert files through tool chains and concatenate the results
#[derive(Parser, Debug)]
#[command(name = "chainmake", version)]
struct Args {
    /// Path to a makefile relative to the current working directory.
    #[arg(short = 'm', long, default_value = "makefile.json")]
    makefile: PathBuf,

    /// Don't execute any commands or remove any files.
    #[arg(long)]
    dryrun: bool,

    /// Log detail on stderr: critical, error, warning, info or debug.
    #[arg(long, default_value_t = Verbosity::Warning)]
    verbosity: Verbosity,

    /// Print the conversion plan of every task and exit.
    #[arg(long)]
    plan: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbosity);

    tracing::debug!("Passed arguments {:?}", args);

    let makefile_path = std::env::current_dir()
        .context("Cannot determine the current directory")?
        .join(&args.makefile);
    let makefile = MakefileLoader::new(&makefile_path)
        .load()
        .with_context(|| format!("Cannot load {}", makefile_path.display()))?;

    if args.plan {
        print_plans(&makefile);
        return Ok(());
    }

    let ctx = RunContext::new(makefile, args.dryrun, ProgressSink::stdout());
    if let Err(e) = TaskRunner::new().run_all(&ctx) {
        tracing::error!("{}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Print each task's conversion steps without running anything.
fn print_plans(makefile: &Makefile) {
    for (index, task) in makefile.tasks().iter().enumerate() {
        println!("task {} -> {}", index + 1, task.output);
        for input in &task.input {
            let plan = makefile.chains().build_plan(input);
            if plan.is_empty() {
                println!("  {} (unchanged)", input);
            }
            for step in plan.steps() {
                println!("  {} -> {}: {}", step.path_in, step.path_out, step.tool);
            }
        }
    }
}
