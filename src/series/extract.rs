//! The monthly series extractor: turns the wide per-month columns of one lake
//! row into an ordered (date, value) sequence, plus the seasonal summaries.
//!
//! This is a pure function of (table, row, year range, fill policy); it holds
//! no state and the table is never mutated.

use crate::series::fill::{self, FillPolicy};
use crate::table::error::TableError;
use crate::table::LakeTable;
use crate::types::month_key::YearRange;
use crate::types::season::SeasonValue;
use chrono::NaiveDate;
use serde::Serialize;

/// One point of a monthly series: the first day of the month and the water
/// area measured for it. `value` is `None` only under the policies that keep
/// missing markers ([`FillPolicy::Raw`], leading runs of
/// [`FillPolicy::ForwardFill`]).
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// An ordered monthly water-area series for one lake, ready for charting.
///
/// Points follow the table's column order, one per recognized (and not
/// range-narrowed) month column, except under [`FillPolicy::DropMissing`]
/// where gap points are omitted entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySeries {
    points: Vec<SeriesPoint>,
}

impl MonthlySeries {
    pub(crate) fn new(points: Vec<SeriesPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesPoint> {
        self.points.iter()
    }

    /// The x-axis of the chart.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// The y-axis of the chart, missing markers included.
    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// True when the lake exists but every month value is missing. Callers can
    /// distinguish this from a lookup failure, which is reported as an error
    /// instead of an empty-looking series.
    pub fn is_all_missing(&self) -> bool {
        self.points.iter().all(|p| p.value.is_none())
    }
}

impl<'a> IntoIterator for &'a MonthlySeries {
    type Item = &'a SeriesPoint;
    type IntoIter = std::slice::Iter<'a, SeriesPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Extracts the monthly series for the given table row.
///
/// Month columns are taken in table order; `year_range` (inclusive) narrows
/// which columns participate, and an empty intersection yields an empty
/// series. The chosen `policy` is applied before returning.
pub(crate) fn monthly_series(
    table: &LakeTable,
    row: usize,
    year_range: Option<YearRange>,
    policy: FillPolicy,
) -> Result<MonthlySeries, TableError> {
    let mut points = Vec::with_capacity(table.months().len());
    for column in table.months() {
        if let Some(range) = year_range {
            if !range.contains(column.key.year) {
                continue;
            }
        }
        points.push(SeriesPoint {
            date: column.date,
            value: table.cell_f64(&column.name, row)?,
        });
    }
    Ok(MonthlySeries::new(fill::apply(policy, points)))
}

/// Extracts the seasonal summary values for the given table row, one entry per
/// season column present in the table (absent columns yield no entry; a
/// missing cell yields an entry with `value: None`).
pub(crate) fn season_values(table: &LakeTable, row: usize) -> Result<Vec<SeasonValue>, TableError> {
    let mut values = Vec::with_capacity(table.seasons().len());
    for column in table.seasons() {
        values.push(SeasonValue {
            label: column.label,
            metric: column.metric,
            value: table.cell_f64(&column.name, row)?,
        });
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::season::{SeasonLabel, SeasonMetric};
    use polars::df;
    use polars::prelude::DataFrame;

    fn fixture() -> LakeTable {
        // Month columns deliberately out of chronological order; extraction
        // must preserve table order, not re-sort.
        let df: DataFrame = df!(
            "Lake_id" => vec![10i64, 11],
            "Lat" => vec![9.5, 10.1],
            "Lon" => vec![76.3, 77.0],
            "2000_02" => vec![Some(2.0), None],
            "2000_01" => vec![Some(1.0), None],
            "2001_01" => vec![None::<f64>, None],
            "2003_07" => vec![Some(7.5), None],
            "Jul-Oct_Pe" => vec![Some(120.0), None],
            "Nov-Feb_Ta" => vec![None, Some(21.5)],
        )
        .unwrap();
        LakeTable::from_dataframe(df).unwrap()
    }

    #[test]
    fn one_point_per_month_column_in_table_order() {
        let table = fixture();
        let series = monthly_series(&table, 0, None, FillPolicy::Raw).unwrap();
        assert_eq!(series.len(), 4);
        assert_eq!(
            series.dates(),
            [
                NaiveDate::from_ymd_opt(2000, 2, 1).unwrap(),
                NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2001, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2003, 7, 1).unwrap(),
            ]
        );
        assert_eq!(
            series.values(),
            [Some(2.0), Some(1.0), None, Some(7.5)]
        );
    }

    #[test]
    fn year_range_narrows_inclusively() {
        let table = fixture();
        let series = monthly_series(
            &table,
            0,
            Some(YearRange::new(2000, 2001)),
            FillPolicy::Raw,
        )
        .unwrap();
        assert_eq!(series.len(), 3);
        assert!(series.dates().iter().all(|d| {
            use chrono::Datelike;
            (2000..=2001).contains(&d.year())
        }));
    }

    #[test]
    fn empty_year_intersection_is_empty_not_an_error() {
        let table = fixture();
        let series = monthly_series(
            &table,
            0,
            Some(YearRange::new(2010, 2015)),
            FillPolicy::Raw,
        )
        .unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn all_missing_is_detectable() {
        let table = fixture();
        let series = monthly_series(&table, 1, None, FillPolicy::Raw).unwrap();
        assert_eq!(series.len(), 4);
        assert!(series.is_all_missing());
    }

    #[test]
    fn seasons_cover_present_columns_only() {
        let table = fixture();
        let values = season_values(&table, 0).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(
            values[0],
            SeasonValue {
                label: SeasonLabel::JulOct,
                metric: SeasonMetric::Precipitation,
                value: Some(120.0),
            }
        );
        // Present column, missing cell: explicit no-data marker.
        assert_eq!(
            values[1],
            SeasonValue {
                label: SeasonLabel::NovFeb,
                metric: SeasonMetric::Temperature,
                value: None,
            }
        );
    }
}
