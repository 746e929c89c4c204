//! Weekly Aggregation Module
//! Per-variant hit totals for every week in the filtered data.

use super::{dates_from_column, StatsError};
use crate::data::loader::{HITS, WEEK_END};
use crate::data::processor::VARIANT;
use crate::data::Variant;
use chrono::NaiveDate;
use polars::prelude::*;

/// Chronological `(week_end, total_hits)` points for one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySeries {
    pub variant: Variant,
    pub points: Vec<(NaiveDate, i64)>,
}

impl WeeklySeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The newest point of the series.
    pub fn latest(&self) -> Option<(NaiveDate, i64)> {
        self.points.last().copied()
    }

    pub fn value_at(&self, week: NaiveDate) -> Option<i64> {
        self.points
            .binary_search_by_key(&week, |p| p.0)
            .ok()
            .map(|i| self.points[i].1)
    }

    /// Points with `start <= week_end <= end`.
    pub fn within(&self, start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = (NaiveDate, i64)> + '_ {
        self.points
            .iter()
            .copied()
            .filter(move |(week, _)| *week >= start && *week <= end)
    }
}

pub struct WeeklyAggregator;

impl WeeklyAggregator {
    /// Sum hits by `week_end` over every row classified as `variant`.
    pub fn series(df: &DataFrame, variant: Variant) -> Result<WeeklySeries, StatsError> {
        let grouped = df
            .clone()
            .lazy()
            .filter(col(VARIANT).eq(lit(variant.name())))
            .group_by([col(WEEK_END)])
            .agg([col(HITS).sum()])
            .collect()?;

        let weeks = dates_from_column(grouped.column(WEEK_END)?)?;
        let hits = grouped.column(HITS)?.i64()?;

        let mut points: Vec<(NaiveDate, i64)> = weeks
            .into_iter()
            .zip(hits.into_iter())
            .filter_map(|(week, hits)| Some((week?, hits.unwrap_or(0))))
            .collect();
        points.sort_by_key(|p| p.0);

        Ok(WeeklySeries { variant, points })
    }

    /// Series for each variant, in the order given.
    pub fn series_for(
        df: &DataFrame,
        variants: &[Variant],
    ) -> Result<Vec<WeeklySeries>, StatsError> {
        variants.iter().map(|&v| Self::series(df, v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, prepared};

    #[test]
    fn sums_matching_rows_per_week() {
        let df = prepared(&[
            ("2024-01-14", "fedora-40", "bluefin", 10),
            ("2024-01-07", "fedora-39", "bluefin", 4),
            ("2024-01-07", "fedora-40", "bluefin-dx", 6),
            ("2024-01-07", "fedora-40", "bazzite", 100),
            ("2024-01-07", "fedora-28", "bluefin", 1000),
        ]);

        let series = WeeklyAggregator::series(&df, Variant::Bluefin).unwrap();
        assert_eq!(
            series.points,
            vec![(date("2024-01-07"), 10), (date("2024-01-14"), 10)]
        );
        assert_eq!(series.latest(), Some((date("2024-01-14"), 10)));
        assert_eq!(series.value_at(date("2024-01-07")), Some(10));
        assert_eq!(series.value_at(date("2024-01-21")), None);
    }

    #[test]
    fn excluded_week_never_contributes() {
        let df = prepared(&[
            ("2024-12-22", "fedora-41", "bazzite", 1),
            ("2024-12-29", "fedora-41", "bazzite", 50),
            ("2025-01-05", "fedora-41", "bazzite", 2),
        ]);

        let series = WeeklyAggregator::series(&df, Variant::Bazzite).unwrap();
        assert_eq!(series.value_at(date("2024-12-29")), None);
        assert_eq!(series.points.iter().map(|p| p.1).sum::<i64>(), 3);
    }

    #[test]
    fn gaps_are_kept_as_is() {
        let df = prepared(&[
            ("2024-01-07", "fedora-40", "kinoite", 1),
            ("2024-02-04", "fedora-40", "kinoite", 2),
        ]);

        let series = WeeklyAggregator::series(&df, Variant::Kinoite).unwrap();
        assert_eq!(series.points.len(), 2);
    }

    #[test]
    fn missing_variant_gives_empty_series() {
        let df = prepared(&[("2024-01-07", "fedora-40", "kinoite", 1)]);
        let series = WeeklyAggregator::series(&df, Variant::Aurora).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.latest(), None);
    }

    #[test]
    fn within_clips_to_window() {
        let series = WeeklySeries {
            variant: Variant::Aurora,
            points: vec![
                (date("2024-01-07"), 1),
                (date("2024-01-14"), 2),
                (date("2024-01-21"), 3),
            ],
        };

        let visible: Vec<_> = series
            .within(date("2024-01-10"), date("2024-01-21"))
            .collect();
        assert_eq!(visible, vec![(date("2024-01-14"), 2), (date("2024-01-21"), 3)]);
    }
}
