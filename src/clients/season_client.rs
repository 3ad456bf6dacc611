//! Provides the `SeasonClient` for seasonal summary queries, obtained via
//! [`LakeAtlas::seasons()`].

use crate::atlas::{LakeAtlas, LatLon, DEFAULT_RADIUS_KM};
use crate::error::LakewatchError;
use crate::series::extract;
use crate::types::lake::LakeId;
use crate::types::season::SeasonValue;
use bon::bon;

/// A client builder for the nine fixed seasonal summary values of a lake.
///
/// Mirrors [`SeriesClient`](crate::SeriesClient): start from `.lake(..)` or
/// `.location(..)` and finish with `.call()`. The result holds one entry per
/// season column present in the table; an entry's `value` is `None` when that
/// cell is missing.
pub struct SeasonClient<'a> {
    atlas: &'a LakeAtlas,
}

#[bon]
impl<'a> SeasonClient<'a> {
    pub(crate) fn new(atlas: &'a LakeAtlas) -> Self {
        Self { atlas }
    }

    /// Seasonal summaries for a specific lake identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LakewatchError::LakeNotFound`] when no row carries the
    /// identifier.
    #[builder(start_fn = lake)]
    #[doc(hidden)]
    pub fn build_lake(
        &self,
        #[builder(start_fn, into)] lake: LakeId,
    ) -> Result<Vec<SeasonValue>, LakewatchError> {
        let row = self
            .atlas
            .table()
            .row_of(&lake)
            .ok_or(LakewatchError::LakeNotFound { lake_id: lake })?;
        Ok(extract::season_values(self.atlas.table(), row)?)
    }

    /// Seasonal summaries for the lake nearest to a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`LakewatchError::NoLakeWithinRadius`] when nothing is within
    /// `.max_distance_km(..)` (default: 50.0 km).
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub fn build_location(
        &self,
        #[builder(start_fn)] coordinate: LatLon,
        max_distance_km: Option<f64>,
    ) -> Result<Vec<SeasonValue>, LakewatchError> {
        let lake = self
            .atlas
            .nearest_lake(coordinate, max_distance_km.unwrap_or(DEFAULT_RADIUS_KM))?;
        Ok(extract::season_values(self.atlas.table(), lake.row)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::season::{SeasonLabel, SeasonMetric};
    use polars::df;

    fn atlas() -> LakeAtlas {
        let frame = df!(
            "Lake_id" => vec![7i64],
            "Lat" => vec![9.5],
            "Lon" => vec![76.3],
            "Jul-Oct_Pe" => vec![Some(110.0)],
            "Jul-Oct_Tr" => vec![Option::<f64>::None],
            "Mar-Jun_Ta" => vec![Some(31.0)],
        )
        .unwrap();
        LakeAtlas::from_dataframe(frame).unwrap()
    }

    #[test]
    fn one_entry_per_present_column_missing_cell_marked() {
        let values = atlas().seasons().lake(7).call().unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0].value, Some(110.0));
        assert_eq!(values[1].label, SeasonLabel::JulOct);
        assert_eq!(values[1].metric, SeasonMetric::Trend);
        assert_eq!(values[1].value, None);
        assert_eq!(values[2].value, Some(31.0));
    }

    #[test]
    fn unknown_lake_is_reported() {
        let err = atlas().seasons().lake(8).call().unwrap_err();
        assert!(matches!(err, LakewatchError::LakeNotFound { .. }));
    }
}
