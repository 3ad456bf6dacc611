use crate::table::error::TableError;
use crate::types::lake::LakeId;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LakewatchError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Polars(#[from] PolarsError),

    /// The requested identifier matches no row. Distinct from a lake whose
    /// month values are all missing, which is a valid (all-gap) series.
    #[error("No lake found with id '{lake_id}'")]
    LakeNotFound { lake_id: LakeId },

    #[error("No lake within {radius} km of ({lat}, {lon})")]
    NoLakeWithinRadius { radius: f64, lat: f64, lon: f64 },

    #[error("Failed to write CSV export '{0}'")]
    CsvExportIo(PathBuf, #[source] std::io::Error),

    #[error("Failed to serialize lake markers")]
    MarkerSerialization(#[from] serde_json::Error),
}
