//! countme-growth - weekly active-user charts from the Fedora countme dataset.
//!
//! Loads the countme totals CSV, keeps Fedora 30-44 repositories, ranks the
//! tracked variants by their latest weekly hits and renders one SVG line chart
//! per variant grouping.

pub mod charts;
pub mod config;
pub mod data;
pub mod pipeline;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_utils;

pub use charts::{ChartData, ChartWindow, Grouping, Palette, GROUPINGS};
pub use config::{ChartStyle, FilterConfig, PipelineConfig};
pub use data::Variant;
pub use pipeline::{analyze, run, Analysis};
pub use stats::{Ranking, WeeklySeries};
