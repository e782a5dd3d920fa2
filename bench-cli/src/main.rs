//! bench-cli - Command line tool for turning benchmark results into task page datasets.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bench-cli",
    version,
    about = "Benchmark site data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: bench_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    bench_cmd::run(cli.command)
}
