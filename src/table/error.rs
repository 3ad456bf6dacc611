use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to open lake table '{0}'")]
    CsvReadIo(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse lake table '{0}'")]
    CsvReadPolars(PathBuf, #[source] PolarsError),

    #[error("Required column '{0}' not found in lake table")]
    MissingColumn(String),

    #[error("Failed processing DataFrame: {0}")]
    Polars(#[from] PolarsError),
}
