//! Stats module - latest-week ranking and weekly aggregation

mod ranker;
mod weekly;

pub use ranker::{RankEntry, Ranking, VariantRanker};
pub use weekly::{WeeklyAggregator, WeeklySeries};

use chrono::{Duration, NaiveDate};
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Date out of range: {0} days since epoch")]
    DateOutOfRange(i32),
}

/// Read a Date column as calendar dates.
pub fn dates_from_column(column: &Column) -> Result<Vec<Option<NaiveDate>>, StatsError> {
    let days = column.cast(&DataType::Int32)?;
    let dates = days
        .i32()?
        .into_iter()
        .map(|d| d.map(days_to_date).transpose())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(dates)
}

fn days_to_date(days: i32) -> Result<NaiveDate, StatsError> {
    NaiveDate::default()
        .checked_add_signed(Duration::days(i64::from(days)))
        .ok_or(StatsError::DateOutOfRange(days))
}
