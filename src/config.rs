//! Pipeline configuration
//! Named constants for the data corrections plus the optional chart style sheet.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Source table, relative to the working directory.
/// Published at https://data-analysis.fedoraproject.org/csv-reports/countme/totals.csv
pub const INPUT_FILE: &str = "totals.csv";

/// Optional style sheet, relative to the working directory.
pub const STYLE_FILE: &str = "ublue-style.json";

/// First and last Fedora release whose repositories are counted (inclusive).
pub const FIRST_RELEASE: u32 = 30;
pub const LAST_RELEASE: u32 = 44;

/// Weeks with known partial or corrupt counts, as `(year, month, day)`.
pub const EXCLUDED_WEEKS: &[(i32, u32, u32)] = &[
    // End of year partial week
    (2024, 12, 29),
];

/// How far back the visible x-axis reaches.
pub const WINDOW_MONTHS: u32 = 9;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read style sheet {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid style sheet {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid excluded week {0:04}-{1:02}-{2:02}")]
    InvalidDate(i32, u32, u32),
}

/// Row selection rules applied before any aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub repo_tags: Vec<String>,
    pub excluded_weeks: Vec<NaiveDate>,
}

impl FilterConfig {
    /// Build the filter from the named constants.
    pub fn from_constants() -> Result<Self, ConfigError> {
        let repo_tags = (FIRST_RELEASE..=LAST_RELEASE)
            .map(|v| format!("fedora-{v}"))
            .collect();

        let excluded_weeks = EXCLUDED_WEEKS
            .iter()
            .map(|&(y, m, d)| {
                NaiveDate::from_ymd_opt(y, m, d).ok_or(ConfigError::InvalidDate(y, m, d))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            repo_tags,
            excluded_weeks,
        })
    }
}

/// Chart aesthetics. Never affects which data is drawn.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub y_label: String,
    pub font_family: String,
    pub title_font_size: u32,
    pub axis_desc_font_size: u32,
    pub tick_font_size: u32,
    pub legend_font_size: u32,
    pub line_width: u32,
    pub date_format: String,
    pub margin: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        // 16x9 inches at 80 dpi
        Self {
            width: 1280,
            height: 720,
            title: "Active Users (Weekly)".to_string(),
            y_label: "Devices".to_string(),
            font_family: "sans-serif".to_string(),
            title_font_size: 20,
            axis_desc_font_size: 16,
            tick_font_size: 14,
            legend_font_size: 16,
            line_width: 2,
            date_format: "%m/%Y".to_string(),
            margin: 20,
        }
    }
}

impl ChartStyle {
    /// Load the style sheet at `path`, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No style sheet at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let style = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded style sheet from {:?}", path);
        Ok(style)
    }
}

/// Everything one run of the pipeline needs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub filter: FilterConfig,
    pub style: ChartStyle,
    pub window_months: u32,
}

impl PipelineConfig {
    /// Configuration for a run rooted at `dir`: input, style sheet and outputs all live there.
    pub fn in_dir(dir: &Path) -> Result<Self, ConfigError> {
        Ok(Self {
            input: dir.join(INPUT_FILE),
            output_dir: dir.to_path_buf(),
            filter: FilterConfig::from_constants()?,
            style: ChartStyle::load_or_default(&dir.join(STYLE_FILE))?,
            window_months: WINDOW_MONTHS,
        })
    }
}
