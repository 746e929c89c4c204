//! CSV Data Loader Module
//! Loads the countme totals table using Polars, keeping only the columns the charts need.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Columns read from the source table.
pub const WEEK_END: &str = "week_end";
pub const REPO_TAG: &str = "repo_tag";
pub const OS_VARIANT: &str = "os_variant";
pub const HITS: &str = "hits";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Input file not found: {0:?}")]
    MissingFile(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("No data loaded")]
    NoData,
}

/// Handles CSV file loading with Polars.
pub struct DataLoader {
    df: Option<DataFrame>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            file_path: None,
        }
    }

    /// Load a countme CSV.
    ///
    /// Output columns: [week_end: Date, repo_tag: String, os_variant: String, hits: Int64].
    /// A missing column or an unparseable date fails the whole load.
    pub fn load_csv(&mut self, file_path: &Path) -> Result<&DataFrame, LoaderError> {
        if !file_path.is_file() {
            return Err(LoaderError::MissingFile(file_path.to_path_buf()));
        }
        self.file_path = Some(file_path.to_path_buf());

        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .select([
                col(WEEK_END).strict_cast(DataType::Date),
                col(REPO_TAG).strict_cast(DataType::String),
                col(OS_VARIANT).strict_cast(DataType::String),
                col(HITS).strict_cast(DataType::Int64),
            ])
            .collect()?;

        tracing::debug!("Loaded {} rows from {:?}", df.height(), file_path);
        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Get a reference to the loaded DataFrame.
    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    /// Get file path.
    pub fn get_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Hand the loaded DataFrame over to the next stage.
    pub fn into_dataframe(self) -> Result<DataFrame, LoaderError> {
        self.df.ok_or(LoaderError::NoData)
    }
}
