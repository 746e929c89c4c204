//! Charts module - groupings, colors and SVG rendering

mod groupings;
mod palette;
mod renderer;

pub use groupings::{ChartData, Grouping, BAZZITE, GLOBAL, GROUPINGS, NON_BAZZITE, UBLUE};
pub use palette::Palette;
pub use renderer::{legend_label, thousands_tick, ChartWindow, RenderError, StaticChartRenderer};
