use tracing::Level;

mod batch;
mod config;
mod convert;

use batch::driver::{self, BatchSummary, Outcome};
use batch::{mapping::LOGO_MAPPINGS, report};
use config::Config;

fn main() {
    // Progress goes to stdout; stderr only carries warnings and worse
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_current_dir() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Cannot determine the working directory: {}", e);
            return;
        }
    };

    report::banner(config.asset_dir());

    let summary = driver::run_batch(LOGO_MAPPINGS, &config);

    log_outcomes(&summary);

    // Per-entry failures never change the exit status
    report::summary(&summary, config.asset_dir());
}

fn log_outcomes(summary: &BatchSummary) {
    for (entry, outcome) in &summary.results {
        if let Outcome::Failed { reason } = outcome {
            tracing::warn!("{} was not converted: {}", entry.source, reason);
        }
    }

    if summary.failed_count() > 0 {
        tracing::warn!("{} logo(s) could not be converted", summary.failed_count());
    }
}
