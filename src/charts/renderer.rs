//! Static Chart Renderer
//! Draws one weekly active-users line chart per grouping as SVG.
//!
//! Layout:
//! 1. Title centered on top
//! 2. Date x-axis clipped to the visible window, thousands-abbreviated y-axis
//! 3. One colored line per variant, legend in the upper left with latest values

use crate::charts::{ChartData, Palette};
use crate::config::ChartStyle;
use crate::data::Variant;
use chrono::{Months, NaiveDate};
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

// Y-axis never shrinks below this, so an empty chart still has ticks.
const MIN_Y_UPPER: i64 = 1000;
// Headroom above the largest value, as a fraction of it.
const Y_HEADROOM_DIVISOR: i64 = 10;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Drawing(String),
    #[error("Cannot go back {months} months from {end}")]
    InvalidWindow { end: NaiveDate, months: u32 },
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Drawing(err.to_string())
    }
}

/// Visible x-axis range. Aggregation is never restricted to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ChartWindow {
    /// `[end - months, end]`.
    pub fn ending(end: NaiveDate, months: u32) -> Result<Self, RenderError> {
        let start = end
            .checked_sub_months(Months::new(months))
            .ok_or(RenderError::InvalidWindow { end, months })?;
        Ok(Self { start, end })
    }
}

/// Legend entry: name plus the latest value in thousands, one decimal.
pub fn legend_label(variant: Variant, latest_hits: i64) -> String {
    format!("{} ({:.1}k)", variant.name(), latest_hits as f64 / 1000.0)
}

/// Y tick: integer thousands, truncated.
pub fn thousands_tick(value: i64) -> String {
    format!("{}k", value / 1000)
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render `data` to an SVG file at `path`, replacing any existing file.
    ///
    /// Variants with an empty series get neither a line nor a legend entry.
    pub fn render_to_file(
        data: &ChartData,
        window: ChartWindow,
        style: &ChartStyle,
        palette: &Palette,
        path: &Path,
    ) -> Result<(), RenderError> {
        let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let family = style.font_family.as_str();
        let y_upper = Self::y_upper_bound(data, window);
        let date_format = style.date_format.as_str();

        let mut chart = ChartBuilder::on(&root)
            .caption(
                &style.title,
                (family, style.title_font_size, FontStyle::Bold),
            )
            .margin(style.margin)
            .x_label_area_size(style.tick_font_size * 4)
            .y_label_area_size(style.tick_font_size * 5)
            .build_cartesian_2d(window.start..window.end, 0i64..y_upper)?;

        chart
            .configure_mesh()
            .light_line_style(RGBColor(0xE0, 0xE0, 0xE0).stroke_width(1))
            .x_labels(10)
            .y_labels(8)
            .x_label_formatter(&|d: &NaiveDate| d.format(date_format).to_string())
            .y_label_formatter(&|v: &i64| thousands_tick(*v))
            .label_style((family, style.tick_font_size, FontStyle::Bold))
            .y_desc(style.y_label.as_str())
            .axis_desc_style((family, style.axis_desc_font_size, FontStyle::Bold))
            .draw()?;

        let mut drawn = 0usize;
        for series in data.series.iter() {
            let Some((_, latest)) = series.latest() else {
                tracing::debug!(
                    "No data for {} in {}, skipping line",
                    series.variant,
                    data.grouping.name
                );
                continue;
            };

            let color = palette.color(series.variant);
            chart
                .draw_series(LineSeries::new(
                    series.within(window.start, window.end),
                    color.stroke_width(style.line_width),
                ))?
                .label(legend_label(series.variant, latest))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
                });
            drawn += 1;
        }

        if drawn > 0 {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .label_font((family, style.legend_font_size))
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()?;
        }

        root.present()?;
        tracing::info!(
            "Rendered {} chart with {} series to {:?}",
            data.grouping.name,
            drawn,
            path
        );
        Ok(())
    }

    /// Largest visible value plus headroom.
    fn y_upper_bound(data: &ChartData, window: ChartWindow) -> i64 {
        let max = data
            .series
            .iter()
            .flat_map(|s| s.within(window.start, window.end))
            .map(|(_, hits)| hits)
            .max()
            .unwrap_or(0);
        (max + max / Y_HEADROOM_DIVISOR).max(MIN_Y_UPPER)
    }
}
