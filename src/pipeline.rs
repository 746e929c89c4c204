//! End-to-end run: load, filter, rank, then chart every grouping.

use crate::charts::{ChartData, ChartWindow, Palette, StaticChartRenderer, GROUPINGS};
use crate::config::PipelineConfig;
use crate::data::{DataLoader, DataProcessor};
use crate::stats::{Ranking, VariantRanker};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use polars::prelude::DataFrame;
use std::path::PathBuf;
use tracing::info;

/// Everything computed before any file is written.
pub struct Analysis {
    pub records: DataFrame,
    pub ranking: Ranking,
    pub charts: Vec<ChartData>,
}

/// Load, filter and rank, then aggregate the series of every grouping.
///
/// Fails without side effects, so a bad input never leaves partial charts behind.
pub fn analyze(config: &PipelineConfig) -> Result<Analysis> {
    info!("Loading data from {:?}", config.input);
    let mut loader = DataLoader::new();
    loader
        .load_csv(&config.input)
        .context("Failed to load countme totals")?;
    let raw_rows = loader.get_row_count();
    let raw = loader.into_dataframe()?;

    let records = DataProcessor::prepare(&raw, &config.filter).context("Failed to filter records")?;
    info!("Kept {} of {} rows", records.height(), raw_rows);

    let ranking = VariantRanker::rank(&records).context("Failed to rank variants")?;
    info!(
        "Ranking at {}: {}",
        ranking
            .latest_week()
            .map(|w| w.to_string())
            .unwrap_or_else(|| "no data".to_string()),
        ranking
            .entries()
            .iter()
            .map(|e| format!("{}={}", e.variant, e.hits))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let charts = GROUPINGS
        .iter()
        .map(|&grouping| ChartData::build(&records, grouping, &ranking))
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to aggregate weekly series")?;

    Ok(Analysis {
        records,
        ranking,
        charts,
    })
}

/// Run the whole pipeline and return the written chart paths.
///
/// The visible window ends at `today`.
pub fn run(config: &PipelineConfig, palette: &Palette, today: NaiveDate) -> Result<Vec<PathBuf>> {
    let analysis = analyze(config)?;
    let window = ChartWindow::ending(today, config.window_months)?;

    info!("Plotting {} charts from {} to {}", analysis.charts.len(), window.start, window.end);
    let mut outputs = Vec::with_capacity(analysis.charts.len());
    for chart in &analysis.charts {
        let path = config.output_dir.join(chart.grouping.file_name());
        StaticChartRenderer::render_to_file(chart, window, &config.style, palette, &path)
            .with_context(|| format!("Failed to render {:?}", path))?;
        outputs.push(path);
    }

    Ok(outputs)
}
