//! Summarize a runner results file by theme and task.

use bench_results::BenchmarkResults;
use std::fmt::Write;

/// Render the theme / task / library status tree.
///
/// With `verbose`, each library line is followed by its per-argument mean
/// runtime and standard deviation (milliseconds), the number of recorded
/// runs, and its mean evaluations.
pub fn render_listing(results: &BenchmarkResults, verbose: bool) -> String {
    let mut out = String::new();
    for theme in results.theme_names() {
        let _ = writeln!(out, "{}", theme);
        for task in results.tasks_in_theme(&theme) {
            let _ = writeln!(out, "  {}", task);
            for library in results.libraries() {
                let Some(result) = library.task(&task) else {
                    continue;
                };
                let _ = writeln!(out, "    {}: {}", library.name, result.status());
                if !verbose {
                    continue;
                }
                for argument in &result.arguments {
                    let mean = argument.runtime.mean_runtime();
                    if mean.is_finite() {
                        let _ = write!(
                            out,
                            "      {}: {:.3} ms ± {:.3} over {} runs",
                            argument.label,
                            mean * 1000.0,
                            argument.runtime.standard_deviation() * 1000.0,
                            argument.runtime.runs()
                        );
                    } else {
                        let _ = write!(out, "      {}: not measured", argument.label);
                    }
                    for evaluation in &argument.evaluations {
                        let _ = write!(out, ", {} = {}", evaluation.function, evaluation.mean());
                    }
                    out.push('\n');
                }
            }
        }
    }
    out
}

pub fn run_tasks(results_path: &str, verbose: bool) -> anyhow::Result<()> {
    let results = crate::load_results(results_path)?;
    print!("{}", render_listing(&results, verbose));
    Ok(())
}
