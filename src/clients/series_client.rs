//! Provides the `SeriesClient` for monthly water-area series queries.
//!
//! This client acts as an intermediate builder, obtained via
//! [`LakeAtlas::series()`], letting the user pick the lake (by identifier or
//! by coordinate), optionally narrow the year range, and choose the fill
//! policy before executing the query.

use crate::atlas::{LakeAtlas, LatLon, DEFAULT_RADIUS_KM};
use crate::error::LakewatchError;
use crate::series::extract;
use crate::series::extract::MonthlySeries;
use crate::series::fill::FillPolicy;
use crate::types::lake::LakeId;
use crate::types::month_key::YearRange;
use bon::bon;

/// A client builder specifically for monthly series queries.
///
/// Instances are created by calling [`LakeAtlas::series()`]. The dropdown path
/// starts with `.lake(..)`, the map-click path with `.location(..)`; both
/// feed the same underlying extraction. The fill policy is a required
/// parameter: the transform never picks one silently.
pub struct SeriesClient<'a> {
    atlas: &'a LakeAtlas,
}

#[bon]
impl<'a> SeriesClient<'a> {
    pub(crate) fn new(atlas: &'a LakeAtlas) -> Self {
        Self { atlas }
    }

    /// Extracts the monthly series for a specific lake identifier.
    ///
    /// # Arguments (Initial Builder Method)
    ///
    /// * `lake` - The lake identifier (anything convertible to [`LakeId`],
    ///   e.g. `4408` or `"L-4408"`), passed to the initial `.lake()` call.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.year_range(YearRange)`: Inclusive year bounds narrowing which month
    ///   columns participate. An empty intersection yields an empty series.
    ///
    /// # Required Builder Methods
    ///
    /// * `.fill(FillPolicy)`: How missing month values are resolved.
    ///
    /// # Errors
    ///
    /// * [`LakewatchError::LakeNotFound`] when no row carries the identifier.
    /// * [`LakewatchError::Table`] when a recognized column cannot be read.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use lakewatch::{FillPolicy, LakeAtlas, LakewatchError, YearRange};
    /// # fn main() -> Result<(), LakewatchError> {
    /// let atlas = LakeAtlas::from_csv("Area_f_2.csv")?;
    /// let series = atlas
    ///     .series()
    ///     .lake(4408)
    ///     .year_range(YearRange::new(2000, 2005))
    ///     .fill(FillPolicy::ForwardFill)
    ///     .call()?;
    /// for point in &series {
    ///     println!("{}: {:?}", point.date, point.value);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = lake)]
    #[doc(hidden)]
    pub fn build_lake(
        &self,
        #[builder(start_fn, into)] lake: LakeId,
        year_range: Option<YearRange>,
        fill: FillPolicy,
    ) -> Result<MonthlySeries, LakewatchError> {
        let row = self
            .atlas
            .table()
            .row_of(&lake)
            .ok_or(LakewatchError::LakeNotFound { lake_id: lake })?;
        Ok(extract::monthly_series(
            self.atlas.table(),
            row,
            year_range,
            fill,
        )?)
    }

    /// Extracts the monthly series for the lake nearest to a coordinate,
    /// the map-click modality.
    ///
    /// # Arguments (Initial Builder Method)
    ///
    /// * `coordinate` - The [`LatLon`] of the click.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.max_distance_km(f64)`: Search radius (default: 50.0 km).
    /// * `.year_range(YearRange)`: As for the id-based query.
    ///
    /// # Required Builder Methods
    ///
    /// * `.fill(FillPolicy)`: How missing month values are resolved.
    ///
    /// # Errors
    ///
    /// * [`LakewatchError::NoLakeWithinRadius`] when nothing is close enough.
    /// * Any error the id-based query can return.
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub fn build_location(
        &self,
        #[builder(start_fn)] coordinate: LatLon,
        max_distance_km: Option<f64>,
        year_range: Option<YearRange>,
        fill: FillPolicy,
    ) -> Result<MonthlySeries, LakewatchError> {
        let lake = self
            .atlas
            .nearest_lake(coordinate, max_distance_km.unwrap_or(DEFAULT_RADIUS_KM))?;
        Ok(extract::monthly_series(
            self.atlas.table(),
            lake.row,
            year_range,
            fill,
        )?)
    }
}
