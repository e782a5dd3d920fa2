//! Command implementations for the benchmark site CLI.
//!
//! Provides subcommands for turning a runner `results.json` into the per-task
//! datasets the task pages chart, and for summarizing what was run.

use clap::Subcommand;

pub mod export;
pub mod tasks;

pub use export::Format;

#[derive(Subcommand)]
pub enum Command {
    /// Write one chart dataset per task from a runner results file
    Export {
        /// Path to the runner's results.json
        #[arg(short = 'r', long)]
        results: String,

        /// Directory the per-task dataset files are written to
        #[arg(short = 'o', long)]
        out_dir: String,

        /// Output format of the dataset files
        #[arg(short = 'f', long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// List themes, tasks and the run status of every library
    Tasks {
        /// Path to the runner's results.json
        #[arg(short = 'r', long)]
        results: String,

        /// Also print per-argument runtimes and evaluations
        #[arg(short = 'v', long)]
        verbose: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Export {
            results,
            out_dir,
            format,
        } => export::run_export(&results, &out_dir, format),
        Command::Tasks { results, verbose } => tasks::run_tasks(&results, verbose),
    }
}

/// Read and parse a results file.
pub(crate) fn load_results(path: &str) -> anyhow::Result<bench_results::BenchmarkResults> {
    use anyhow::Context;

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read results file {}", path))?;
    bench_results::BenchmarkResults::from_json(&json)
        .with_context(|| format!("failed to parse results file {}", path))
}
