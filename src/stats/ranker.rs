//! Variant Ranker Module
//! Orders the tracked variants by their hit total in the most recent week.

use super::{dates_from_column, StatsError};
use crate::data::loader::{HITS, WEEK_END};
use crate::data::processor::VARIANT;
use crate::data::Variant;
use chrono::NaiveDate;
use polars::prelude::*;
use std::collections::HashMap;

/// One variant's position in the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankEntry {
    pub variant: Variant,
    pub hits: i64,
}

/// All tracked variants, most popular first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    latest_week: Option<NaiveDate>,
    entries: Vec<RankEntry>,
}

impl Ranking {
    /// Sort totals descending. Ties keep canonical variant order.
    pub fn from_totals(latest_week: Option<NaiveDate>, totals: &HashMap<Variant, i64>) -> Self {
        let mut entries: Vec<RankEntry> = Variant::ALL
            .into_iter()
            .map(|variant| RankEntry {
                variant,
                hits: totals.get(&variant).copied().unwrap_or(0),
            })
            .collect();
        entries.sort_by(|a, b| b.hits.cmp(&a.hits));

        Self {
            latest_week,
            entries,
        }
    }

    /// The week the ranking was taken at; `None` when there was no data.
    pub fn latest_week(&self) -> Option<NaiveDate> {
        self.latest_week
    }

    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    /// Variants in ranked order.
    pub fn order(&self) -> Vec<Variant> {
        self.entries.iter().map(|e| e.variant).collect()
    }

    pub fn hits(&self, variant: Variant) -> i64 {
        self.entries
            .iter()
            .find(|e| e.variant == variant)
            .map(|e| e.hits)
            .unwrap_or(0)
    }
}

pub struct VariantRanker;

impl VariantRanker {
    /// Rank variants by summed hits at the newest `week_end` in `df`.
    ///
    /// `df` must carry the `variant` column. Variants without rows that week score 0.
    pub fn rank(df: &DataFrame) -> Result<Ranking, StatsError> {
        let latest_week = dates_from_column(df.column(WEEK_END)?)?
            .into_iter()
            .flatten()
            .max();

        let totals = match latest_week {
            Some(week) => Self::totals_at(df, week)?,
            None => HashMap::new(),
        };

        let ranking = Ranking::from_totals(latest_week, &totals);
        tracing::debug!("Ranking at {:?}: {:?}", latest_week, ranking.entries());
        Ok(ranking)
    }

    /// Hits per variant for a single week.
    pub fn totals_at(df: &DataFrame, week: NaiveDate) -> Result<HashMap<Variant, i64>, StatsError> {
        let grouped = df
            .clone()
            .lazy()
            .filter(col(WEEK_END).eq(lit(week)).and(col(VARIANT).is_not_null()))
            .group_by([col(VARIANT)])
            .agg([col(HITS).sum()])
            .collect()?;

        let names = grouped.column(VARIANT)?.str()?;
        let hits = grouped.column(HITS)?.i64()?;

        Ok(names
            .into_iter()
            .zip(hits.into_iter())
            .filter_map(|(name, hits)| Some((Variant::from_name(name?)?, hits.unwrap_or(0))))
            .collect())
    }
}
