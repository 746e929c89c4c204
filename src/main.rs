//! countme-growth - renders growth_*.svg charts from totals.csv in the working directory.

use anyhow::{Context, Result};
use countme_growth::{run, Palette, PipelineConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("countme_growth=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().context("Cannot determine working directory")?;
    let config = PipelineConfig::in_dir(&cwd).context("Invalid configuration")?;
    let today = chrono::Local::now().date_naive();

    let outputs = run(&config, &Palette::default(), today)?;
    tracing::info!("Wrote {} charts", outputs.len());
    Ok(())
}
