//! Chart groupings
//! The four named variant sets charted together, resolved against the ranking.

use crate::data::Variant;
use crate::stats::{Ranking, StatsError, WeeklyAggregator, WeeklySeries};
use polars::prelude::DataFrame;

/// A named set of variants drawn on one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grouping {
    pub name: &'static str,
    pub members: &'static [Variant],
    /// When false, `members` is drawn as listed instead of in ranked order.
    pub ranked: bool,
}

pub const UBLUE: Grouping = Grouping {
    name: "ublue",
    members: &[Variant::Bluefin, Variant::Bazzite, Variant::Aurora],
    ranked: true,
};

pub const NON_BAZZITE: Grouping = Grouping {
    name: "nonbazzite",
    members: &[Variant::Bluefin, Variant::Aurora],
    ranked: true,
};

pub const BAZZITE: Grouping = Grouping {
    name: "bazzite",
    members: &[Variant::Bazzite],
    ranked: false,
};

pub const GLOBAL: Grouping = Grouping {
    name: "global",
    members: &Variant::ALL,
    ranked: true,
};

/// Every chart produced by a run, in output order.
pub const GROUPINGS: [Grouping; 4] = [UBLUE, NON_BAZZITE, BAZZITE, GLOBAL];

impl Grouping {
    /// Members to draw, in legend order.
    ///
    /// Ranked groupings keep only variants present in `ranking`, in its order.
    pub fn resolve(&self, ranking: &Ranking) -> Vec<Variant> {
        if !self.ranked {
            return self.members.to_vec();
        }
        ranking
            .order()
            .into_iter()
            .filter(|v| self.members.contains(v))
            .collect()
    }

    pub fn file_name(&self) -> String {
        format!("growth_{}.svg", self.name)
    }
}

/// Everything needed to draw one grouping.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub grouping: Grouping,
    pub series: Vec<WeeklySeries>,
}

impl ChartData {
    /// Aggregate the weekly series of each resolved member over the whole frame.
    pub fn build(
        df: &DataFrame,
        grouping: Grouping,
        ranking: &Ranking,
    ) -> Result<Self, StatsError> {
        let members = grouping.resolve(ranking);
        let series = WeeklyAggregator::series_for(df, &members)?;
        Ok(Self { grouping, series })
    }

    /// Series that will actually get a line and a legend entry.
    pub fn drawable(&self) -> impl Iterator<Item = &WeeklySeries> {
        self.series.iter().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::VariantRanker;
    use crate::test_utils::prepared;
    use std::collections::HashMap;

    fn ranking(totals: &[(Variant, i64)]) -> Ranking {
        let totals: HashMap<Variant, i64> = totals.iter().copied().collect();
        Ranking::from_totals(None, &totals)
    }

    #[test]
    fn ranked_groupings_follow_ranking() {
        let r = ranking(&[
            (Variant::Aurora, 50),
            (Variant::Bazzite, 40),
            (Variant::Silverblue, 30),
            (Variant::Bluefin, 20),
            (Variant::Kinoite, 10),
        ]);

        assert_eq!(
            UBLUE.resolve(&r),
            vec![Variant::Aurora, Variant::Bazzite, Variant::Bluefin]
        );
        assert_eq!(NON_BAZZITE.resolve(&r), vec![Variant::Aurora, Variant::Bluefin]);
        assert_eq!(BAZZITE.resolve(&r), vec![Variant::Bazzite]);
        assert_eq!(GLOBAL.resolve(&r), r.order());
    }

    #[test]
    fn membership_is_respected() {
        let r = ranking(&[(Variant::Silverblue, 99), (Variant::Kinoite, 98)]);
        for v in UBLUE.resolve(&r) {
            assert!(matches!(v, Variant::Bluefin | Variant::Bazzite | Variant::Aurora));
        }
        assert_eq!(BAZZITE.resolve(&r).len(), 1);
    }

    #[test]
    fn file_names() {
        let names: Vec<String> = GROUPINGS.iter().map(Grouping::file_name).collect();
        assert_eq!(
            names,
            vec![
                "growth_ublue.svg",
                "growth_nonbazzite.svg",
                "growth_bazzite.svg",
                "growth_global.svg"
            ]
        );
    }

    #[test]
    fn ublue_legend_lists_latest_leader_first() {
        let df = prepared(&[
            ("2024-01-07", "fedora-40", "bazzite", 300),
            ("2024-01-07", "fedora-40", "bluefin", 100),
            ("2024-01-14", "fedora-40", "bazzite", 250),
            ("2024-01-14", "fedora-40", "bluefin", 200),
            ("2024-01-21", "fedora-40", "bazzite", 150),
            ("2024-01-21", "fedora-40", "bluefin", 400),
        ]);
        let r = VariantRanker::rank(&df).unwrap();

        let chart = ChartData::build(&df, UBLUE, &r).unwrap();
        let drawn: Vec<Variant> = chart.drawable().map(|s| s.variant).collect();
        assert_eq!(drawn, vec![Variant::Bluefin, Variant::Bazzite]);
        assert_eq!(chart.series.len(), 3);
    }
}
