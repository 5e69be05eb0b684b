//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - runs the load -> build -> resolve pipeline
//! - writes the CSV result to stdout

use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::domain::{CoverageTier, RunConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `slcsp` binary.
pub fn run() -> Result<(), AppError> {
    // A missing .env is fine; flags and defaults still apply.
    dotenvy::dotenv().ok();
    crate::logging::init();

    let cli = Cli::parse();
    let config = run_config_from_args(&cli);

    let run = pipeline::run(&config)?;
    info!("{}", crate::report::format_run_summary(&run.summary));

    // Nothing reaches stdout until every input has loaded and resolved.
    let stdout = std::io::stdout();
    crate::io::export::write_results_csv(stdout.lock(), &run.results)
}

/// The CLI always resolves the Silver tier.
pub fn run_config_from_args(cli: &Cli) -> RunConfig {
    RunConfig {
        plan_file: cli.plan_file.clone(),
        zip_file: cli.zip_file.clone(),
        target_file: cli.slcsp_file.clone(),
        tier: CoverageTier::Silver,
    }
}
