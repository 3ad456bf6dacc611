//! Column-name conventions of the lake monitoring tables and the one-time
//! scan that turns them into typed structures.

use crate::types::month_key::MonthColumn;
use crate::types::season::{season_column_name, SeasonLabel, SeasonMetric, SEASON_COLUMNS};

pub(crate) const LAKE_ID_COL: &str = "Lake_id";
pub(crate) const LAT_COL: &str = "Lat";
pub(crate) const LON_COL: &str = "Lon";
pub(crate) const STATE_COL: &str = "STATE";
pub(crate) const DISTRICT_COL: &str = "District";

/// A seasonal summary column present in the loaded table.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SeasonColumn {
    pub label: SeasonLabel,
    pub metric: SeasonMetric,
    pub name: String,
}

/// Recognizes month-value columns among the (already trimmed) table column
/// names. Names that do not encode a valid `<year><sep><month>` pair are
/// skipped silently; the output preserves table-column order.
pub(crate) fn scan_month_columns(names: &[String]) -> Vec<MonthColumn> {
    names
        .iter()
        .filter_map(|name| MonthColumn::from_name(name))
        .collect()
}

/// Finds which of the nine fixed seasonal columns the table carries. Absent
/// columns are skipped, not an error.
pub(crate) fn scan_season_columns(names: &[String]) -> Vec<SeasonColumn> {
    SEASON_COLUMNS
        .iter()
        .filter_map(|(label, metric)| {
            let name = season_column_name(*label, *metric);
            names.contains(&name).then_some(SeasonColumn {
                label: *label,
                metric: *metric,
                name,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn month_scan_keeps_table_order_and_skips_malformed() {
        let columns = names(&[
            "Lake_id", "Lat", "Lon", "1990_02", "1990_01", "199x_03", "1990_13", "Jul-Oct_Pe",
        ]);
        let months = scan_month_columns(&columns);
        let found: Vec<&str> = months.iter().map(|m| m.name.as_str()).collect();
        // Not re-sorted chronologically; the table's order wins.
        assert_eq!(found, ["1990_02", "1990_01"]);
    }

    #[test]
    fn season_scan_skips_absent_columns() {
        let columns = names(&["Lake_id", "Jul-Oct_Pe", "Nov-Feb_Ta"]);
        let seasons = scan_season_columns(&columns);
        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[0].name, "Jul-Oct_Pe");
        assert_eq!(seasons[1].name, "Nov-Feb_Ta");
    }
}
