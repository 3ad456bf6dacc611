//! This module provides the main entry point for querying a lake monitoring
//! table. A [`LakeAtlas`] loads the table once, keeps it read-only for the
//! session, and answers series, season, record-set and proximity queries.

use crate::clients::season_client::SeasonClient;
use crate::clients::series_client::SeriesClient;
use crate::error::LakewatchError;
use crate::lakes::locate_lake::{LakeFilter, LakeLocator};
use crate::table::{loader, LakeTable};
use crate::types::lake::Lake;
use crate::types::record_frame::LakeRecordFrame;
use bon::bon;
use polars::prelude::{DataFrame, IntoLazy};
use std::path::Path;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second
/// (index 1). Both values are represented as `f64`.
///
/// # Examples
///
/// ```
/// use lakewatch::LatLon;
///
/// let vembanad = LatLon(9.5916, 76.3935);
/// assert_eq!(vembanad.0, 9.5916); // Latitude
/// assert_eq!(vembanad.1, 76.3935); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// Default search radius for proximity queries, in kilometers.
pub(crate) const DEFAULT_RADIUS_KM: f64 = 50.0;

/// The main client for browsing a lake monitoring table.
///
/// Loads the table from a delimited file (or an in-memory `DataFrame`),
/// normalizes it, and builds the spatial index used for map-click selection.
/// All queries read the same table; nothing mutates it.
///
/// # Examples
///
/// ```no_run
/// # use lakewatch::{FillPolicy, LakeAtlas, LakewatchError};
/// # fn run() -> Result<(), LakewatchError> {
/// let atlas = LakeAtlas::from_csv("Area_f_2.csv")?;
/// let series = atlas
///     .series()
///     .lake(4408)
///     .fill(FillPolicy::Interpolate)
///     .call()?;
/// println!("{} monthly points", series.len());
/// # Ok(())
/// # }
/// ```
pub struct LakeAtlas {
    table: LakeTable,
    locator: LakeLocator,
}

#[bon]
impl LakeAtlas {
    /// Loads a lake table from a delimited file with a header row.
    ///
    /// # Errors
    ///
    /// Returns [`LakewatchError::Table`] when the file cannot be opened or
    /// parsed, or when a required identifying column (`Lake_id`, `Lat`, `Lon`)
    /// is absent.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, LakewatchError> {
        let table = loader::load_csv(path.as_ref())?;
        Ok(Self::from_table(table))
    }

    /// Builds an atlas from an already-parsed `DataFrame`, applying the same
    /// normalization as [`LakeAtlas::from_csv`].
    pub fn from_dataframe(df: DataFrame) -> Result<Self, LakewatchError> {
        let table = LakeTable::from_dataframe(df)?;
        Ok(Self::from_table(table))
    }

    fn from_table(table: LakeTable) -> Self {
        let locator = LakeLocator::new(table.lakes().to_vec());
        LakeAtlas { table, locator }
    }

    /// A client builder for monthly water-area series queries.
    ///
    /// Start from a lake id (`.lake(..)`) or a coordinate (`.location(..)`),
    /// optionally narrow with `.year_range(..)`, pick a `.fill(..)` policy and
    /// finish with `.call()`. See [`SeriesClient`].
    pub fn series(&self) -> SeriesClient<'_> {
        SeriesClient::new(self)
    }

    /// A client builder for seasonal summary queries. See [`SeasonClient`].
    pub fn seasons(&self) -> SeasonClient<'_> {
        SeasonClient::new(self)
    }

    /// Finds lakes near a given geographical location, closest first.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The coordinates around which to search.
    /// * `.max_distance_km(f64)`: Optional. Search radius in kilometers. Defaults to `50.0`.
    /// * `.lake_limit(usize)`: Optional. Maximum number of lakes returned. Defaults to `5`.
    /// * `.state(String)` / `.district(String)`: Optional. Keep only lakes with a
    ///   matching classification (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use lakewatch::{LakeAtlas, LakewatchError, LatLon};
    /// # fn run() -> Result<(), LakewatchError> {
    /// let atlas = LakeAtlas::from_csv("Area_f_2.csv")?;
    /// let nearby = atlas
    ///     .find_lakes()
    ///     .location(LatLon(12.97, 77.59))
    ///     .max_distance_km(100.0)
    ///     .lake_limit(10)
    ///     .call();
    /// println!("{} lakes near Bengaluru", nearby.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn find_lakes(
        &self,
        location: LatLon,
        max_distance_km: Option<f64>,
        lake_limit: Option<usize>,
        state: Option<String>,
        district: Option<String>,
    ) -> Vec<Lake> {
        let max_distance_km = max_distance_km.unwrap_or(DEFAULT_RADIUS_KM);
        let lake_limit = lake_limit.unwrap_or(5);
        let filter = LakeFilter { state, district };

        self.locator
            .query(
                location.0,
                location.1,
                lake_limit,
                max_distance_km,
                Some(&filter),
            )
            .into_iter()
            .map(|(lake, _distance)| lake)
            .collect()
    }

    /// The full record set as a lazily filterable frame, for tabular display
    /// and CSV export.
    pub fn records(&self) -> LakeRecordFrame {
        LakeRecordFrame::new(self.table.df().clone().lazy())
    }

    /// All lakes with usable coordinates, in table order. The map layer
    /// renders these as markers.
    pub fn markers(&self) -> &[Lake] {
        self.table.lakes()
    }

    /// The markers as a JSON array, ready to hand to a web map layer.
    pub fn markers_json(&self) -> Result<String, LakewatchError> {
        Ok(serde_json::to_string(self.table.lakes())?)
    }

    pub(crate) fn table(&self) -> &LakeTable {
        &self.table
    }

    /// Resolves a map click to the nearest lake within `max_distance_km`.
    pub(crate) fn nearest_lake(
        &self,
        location: LatLon,
        max_distance_km: f64,
    ) -> Result<Lake, LakewatchError> {
        self.locator
            .query(location.0, location.1, 1, max_distance_km, None)
            .into_iter()
            .next()
            .map(|(lake, _distance)| lake)
            .ok_or(LakewatchError::NoLakeWithinRadius {
                radius: max_distance_km,
                lat: location.0,
                lon: location.1,
            })
    }
}
