//! Shared fixtures for unit tests.

use crate::data::loader::{HITS, OS_VARIANT, REPO_TAG, WEEK_END};
use chrono::NaiveDate;
use polars::prelude::*;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Build a frame shaped like the loader's output from `(week_end, repo_tag, os_variant, hits)` rows.
pub fn frame(rows: &[(&str, &str, &str, i64)]) -> DataFrame {
    let weeks: Vec<NaiveDate> = rows.iter().map(|r| date(r.0)).collect();
    let tags: Vec<&str> = rows.iter().map(|r| r.1).collect();
    let variants: Vec<&str> = rows.iter().map(|r| r.2).collect();
    let hits: Vec<i64> = rows.iter().map(|r| r.3).collect();

    DataFrame::new(vec![
        Column::new(WEEK_END.into(), weeks),
        Column::new(REPO_TAG.into(), tags),
        Column::new(OS_VARIANT.into(), variants),
        Column::new(HITS.into(), hits),
    ])
    .unwrap()
}

/// Same as [`frame`], already filtered and classified.
pub fn prepared(rows: &[(&str, &str, &str, i64)]) -> DataFrame {
    let filter = crate::config::FilterConfig::from_constants().unwrap();
    crate::data::DataProcessor::prepare(&frame(rows), &filter).unwrap()
}

pub fn string_values(df: &DataFrame, name: &str) -> Vec<String> {
    df.column(name)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect()
}

pub fn date_values(df: &DataFrame, name: &str) -> Vec<NaiveDate> {
    crate::stats::dates_from_column(df.column(name).unwrap())
        .unwrap()
        .into_iter()
        .flatten()
        .collect()
}
