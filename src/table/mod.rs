//! The in-memory lake table: loaded once per session, read-only afterwards.
//!
//! Loading normalizes everything the queries rely on: column names are
//! trimmed, month and season columns are recognized and typed, measurement
//! cells are coerced to numeric (stray text becomes a missing value) and the
//! lake id -> row index is built with first-row-wins semantics.

pub mod error;
pub(crate) mod loader;
pub(crate) mod schema;

use crate::table::error::TableError;
use crate::table::schema::{
    SeasonColumn, DISTRICT_COL, LAKE_ID_COL, LAT_COL, LON_COL, STATE_COL,
};
use crate::types::lake::{Lake, LakeId};
use crate::types::month_key::MonthColumn;
use log::{info, warn};
use polars::chunked_array::cast::CastOptions;
use polars::prelude::{AnyValue, DataFrame, DataType, StringChunked};
use std::collections::HashMap;

/// A loaded lake monitoring table.
///
/// Holds the (normalized) polars `DataFrame` together with the structures
/// derived from it at load time: the recognized month columns in table order,
/// the present season columns, the lake records usable as map markers, and the
/// identifier index.
#[derive(Debug)]
pub struct LakeTable {
    df: DataFrame,
    months: Vec<MonthColumn>,
    seasons: Vec<SeasonColumn>,
    lakes: Vec<Lake>,
    index: HashMap<LakeId, usize>,
}

impl LakeTable {
    /// Normalizes an already-parsed `DataFrame` into a `LakeTable`.
    ///
    /// The frame must carry the identifying columns `Lake_id`, `Lat` and `Lon`
    /// (names are trimmed before matching); otherwise [`TableError::MissingColumn`]
    /// is returned. Rows whose coordinates are missing or non-numeric stay
    /// queryable by id but produce no map marker.
    pub fn from_dataframe(mut df: DataFrame) -> Result<Self, TableError> {
        let trimmed: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.as_str().trim().to_string())
            .collect();
        df.set_column_names(trimmed.iter().map(|name| name.as_str()))?;

        for required in [LAKE_ID_COL, LAT_COL, LON_COL] {
            if !trimmed.iter().any(|name| name == required) {
                return Err(TableError::MissingColumn(required.to_string()));
            }
        }

        let months = schema::scan_month_columns(&trimmed);
        let seasons = schema::scan_season_columns(&trimmed);
        info!(
            "Recognized {} month columns and {} season columns among {} table columns",
            months.len(),
            seasons.len(),
            trimmed.len()
        );

        // One-time numeric coercion; queries never re-coerce per cell.
        let numeric_columns: Vec<String> = months
            .iter()
            .map(|m| m.name.clone())
            .chain(seasons.iter().map(|s| s.name.clone()))
            .chain([LAT_COL.to_string(), LON_COL.to_string()])
            .collect();
        for name in &numeric_columns {
            let cast = df
                .column(name)?
                .as_materialized_series()
                .cast_with_options(&DataType::Float64, CastOptions::NonStrict)?;
            df.with_column(cast)?;
        }
        for name in [STATE_COL, DISTRICT_COL] {
            if trimmed.iter().any(|n| n == name) {
                let cast = df
                    .column(name)?
                    .as_materialized_series()
                    .cast_with_options(&DataType::String, CastOptions::NonStrict)?;
                df.with_column(cast)?;
            }
        }

        let (lakes, index) = Self::index_rows(&df, &trimmed)?;
        info!("Indexed {} lakes ({} rows)", index.len(), df.height());

        Ok(LakeTable {
            df,
            months,
            seasons,
            lakes,
            index,
        })
    }

    fn index_rows(
        df: &DataFrame,
        names: &[String],
    ) -> Result<(Vec<Lake>, HashMap<LakeId, usize>), TableError> {
        let ids = df.column(LAKE_ID_COL)?;
        let lats = df.column(LAT_COL)?.f64()?;
        let lons = df.column(LON_COL)?.f64()?;
        let states = Self::string_column(df, names, STATE_COL)?;
        let districts = Self::string_column(df, names, DISTRICT_COL)?;

        let mut lakes = Vec::with_capacity(df.height());
        let mut index: HashMap<LakeId, usize> = HashMap::with_capacity(df.height());
        let mut unidentified = 0usize;
        let mut unlocated = 0usize;

        for row in 0..df.height() {
            let Some(id) = lake_id_from_any(&ids.get(row)?) else {
                unidentified += 1;
                continue;
            };
            // First row wins for duplicate identifiers.
            index.entry(id.clone()).or_insert(row);

            let (Some(lat), Some(lon)) = (lats.get(row), lons.get(row)) else {
                unlocated += 1;
                continue;
            };
            lakes.push(Lake {
                id,
                lat,
                lon,
                state: states
                    .as_ref()
                    .and_then(|s| s.get(row).map(|v| v.to_string())),
                district: districts
                    .as_ref()
                    .and_then(|s| s.get(row).map(|v| v.to_string())),
                row,
            });
        }

        if unidentified > 0 {
            warn!("Skipped {} rows with an empty or unreadable lake id", unidentified);
        }
        if unlocated > 0 {
            warn!("{} lakes have no usable coordinates and get no map marker", unlocated);
        }
        Ok((lakes, index))
    }

    fn string_column(
        df: &DataFrame,
        names: &[String],
        name: &str,
    ) -> Result<Option<StringChunked>, TableError> {
        if !names.iter().any(|n| n == name) {
            return Ok(None);
        }
        Ok(Some(df.column(name)?.str()?.clone()))
    }

    /// Number of rows in the table.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// The recognized month columns, in table order.
    pub fn months(&self) -> &[MonthColumn] {
        &self.months
    }

    pub(crate) fn seasons(&self) -> &[SeasonColumn] {
        &self.seasons
    }

    /// All lakes with usable coordinates, in table order.
    pub fn lakes(&self) -> &[Lake] {
        &self.lakes
    }

    /// The row holding `lake_id`, if any. Duplicates resolve to the first row.
    pub fn row_of(&self, lake_id: &LakeId) -> Option<usize> {
        self.index.get(lake_id).copied()
    }

    pub(crate) fn df(&self) -> &DataFrame {
        &self.df
    }

    /// Reads one numeric cell; `None` means the value is missing (including
    /// cells that failed numeric coercion at load).
    pub(crate) fn cell_f64(&self, column: &str, row: usize) -> Result<Option<f64>, TableError> {
        Ok(self.df.column(column)?.f64()?.get(row))
    }
}

fn lake_id_from_any(value: &AnyValue) -> Option<LakeId> {
    match value {
        AnyValue::Int64(v) => Some(LakeId::Int(*v)),
        AnyValue::Int32(v) => Some(LakeId::Int(*v as i64)),
        AnyValue::Int16(v) => Some(LakeId::Int(*v as i64)),
        AnyValue::UInt32(v) => Some(LakeId::Int(*v as i64)),
        AnyValue::UInt64(v) => i64::try_from(*v).ok().map(LakeId::Int),
        AnyValue::Float64(v) if v.fract() == 0.0 => Some(LakeId::Int(*v as i64)),
        AnyValue::String(s) if !s.trim().is_empty() => Some(LakeId::Name(s.trim().to_string())),
        AnyValue::StringOwned(s) if !s.trim().is_empty() => {
            Some(LakeId::Name(s.trim().to_string()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn sample_frame() -> DataFrame {
        df!(
            " Lake_id " => vec![1i64, 2, 2, 3],
            "Lat" => vec![Some(9.5), Some(10.1), Some(10.2), None],
            "Lon " => vec![Some(76.3), Some(77.0), Some(77.1), Some(78.0)],
            "STATE" => vec!["Kerala", "Karnataka", "Karnataka", "Kerala"],
            "District" => vec!["Idukki", "Mysuru", "Mysuru", "Kollam"],
            "1990_01" => vec![Some(1.0), Some(4.0), Some(9.0), None],
            "1990_02" => vec![None, Some(5.0), Some(10.0), Some(2.5)],
            "Jul-Oct_Pe" => vec![Some(100.0), None, Some(3.0), Some(40.0)],
        )
        .unwrap()
    }

    #[test]
    fn trims_column_names_before_matching() {
        let table = LakeTable::from_dataframe(sample_frame()).unwrap();
        assert_eq!(table.months().len(), 2);
        assert!(table.row_of(&LakeId::Int(1)).is_some());
    }

    #[test]
    fn missing_required_column_is_reported() {
        let df = df!("Lat" => vec![1.0], "Lon" => vec![2.0]).unwrap();
        let err = LakeTable::from_dataframe(df).unwrap_err();
        assert!(matches!(err, TableError::MissingColumn(name) if name == "Lake_id"));
    }

    #[test]
    fn duplicate_lake_id_first_row_wins() {
        let table = LakeTable::from_dataframe(sample_frame()).unwrap();
        let row = table.row_of(&LakeId::Int(2)).unwrap();
        assert_eq!(row, 1);
        assert_eq!(table.cell_f64("1990_01", row).unwrap(), Some(4.0));
    }

    #[test]
    fn rows_without_coordinates_get_no_marker_but_stay_queryable() {
        let table = LakeTable::from_dataframe(sample_frame()).unwrap();
        assert_eq!(table.lakes().len(), 3);
        assert!(table.lakes().iter().all(|l| l.id != LakeId::Int(3)));
        assert_eq!(table.row_of(&LakeId::Int(3)), Some(3));
    }

    #[test]
    fn non_numeric_month_cell_coerces_to_missing() {
        let df = df!(
            "Lake_id" => vec![1i64],
            "Lat" => vec![9.5],
            "Lon" => vec![76.3],
            "1991_07" => vec!["n/a"],
        )
        .unwrap();
        let table = LakeTable::from_dataframe(df).unwrap();
        assert_eq!(table.cell_f64("1991_07", 0).unwrap(), None);
    }

    #[test]
    fn string_lake_ids_are_supported() {
        let df = df!(
            "Lake_id" => vec!["L-01", "L-02"],
            "Lat" => vec![9.5, 10.0],
            "Lon" => vec![76.3, 77.0],
        )
        .unwrap();
        let table = LakeTable::from_dataframe(df).unwrap();
        assert_eq!(table.row_of(&LakeId::from("L-02")), Some(1));
        assert_eq!(table.row_of(&LakeId::from("L-03")), None);
    }
}
