//! Data Processor Module
//! Row selection (release allow-list, excluded weeks) and variant classification.

use crate::config::FilterConfig;
use crate::data::loader::{OS_VARIANT, REPO_TAG, WEEK_END};
use crate::data::Variant;
use polars::prelude::*;
use thiserror::Error;

/// Derived column holding the classified variant name (null when unclassified).
pub const VARIANT: &str = "variant";

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Handles data cleaning and transformation operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Keep rows from allowed repositories, outside the excluded weeks.
    pub fn filter_records(
        df: &DataFrame,
        filter: &FilterConfig,
    ) -> Result<DataFrame, ProcessorError> {
        let in_release = filter
            .repo_tags
            .iter()
            .fold(lit(false), |acc, tag| {
                acc.or(col(REPO_TAG).eq(lit(tag.as_str())))
            });

        let not_excluded = filter
            .excluded_weeks
            .iter()
            .fold(lit(true), |acc, &week| acc.and(col(WEEK_END).neq(lit(week))));

        let filtered = df
            .clone()
            .lazy()
            .filter(in_release.and(not_excluded))
            .collect()?;

        tracing::debug!(
            "Filter kept {} of {} rows",
            filtered.height(),
            df.height()
        );
        Ok(filtered)
    }

    /// Append the `variant` column, classifying each raw `os_variant` once.
    pub fn attach_variants(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let raw = df.column(OS_VARIANT)?.str()?;
        let names: Vec<Option<&str>> = raw
            .into_iter()
            .map(|v| v.and_then(Variant::classify).map(Variant::name))
            .collect();

        let unclassified = names.iter().filter(|n| n.is_none()).count();
        if unclassified > 0 {
            tracing::debug!("{} rows match no tracked variant", unclassified);
        }

        let mut out = df.clone();
        out.with_column(Column::new(VARIANT.into(), names))?;
        Ok(out)
    }

    /// Filter then classify: the frame every later stage reads.
    pub fn prepare(df: &DataFrame, filter: &FilterConfig) -> Result<DataFrame, ProcessorError> {
        let filtered = Self::filter_records(df, filter)?;
        Self::attach_variants(&filtered)
    }
}
