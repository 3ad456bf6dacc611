//! The nine fixed seasonal summary columns of a lake table: three named
//! seasons crossed with three metrics, e.g. `"Jul-Oct_Pe"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// One of the three fixed season windows used by the monitoring tables.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonLabel {
    /// July through October (monsoon / post-monsoon).
    JulOct,
    /// March through June (pre-monsoon).
    MarJun,
    /// November through February (winter).
    NovFeb,
}

impl SeasonLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonLabel::JulOct => "Jul-Oct",
            SeasonLabel::MarJun => "Mar-Jun",
            SeasonLabel::NovFeb => "Nov-Feb",
        }
    }
}

impl Display for SeasonLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The per-season summary metric encoded in the column-name suffix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonMetric {
    /// Precipitation summary (`_Pe`).
    Precipitation,
    /// Trend summary (`_Tr`).
    Trend,
    /// Temperature summary (`_Ta`).
    Temperature,
}

impl SeasonMetric {
    pub(crate) fn suffix(&self) -> &'static str {
        match self {
            SeasonMetric::Precipitation => "Pe",
            SeasonMetric::Trend => "Tr",
            SeasonMetric::Temperature => "Ta",
        }
    }
}

/// All nine (season, metric) combinations in the order the original tables
/// list their columns.
pub const SEASON_COLUMNS: [(SeasonLabel, SeasonMetric); 9] = [
    (SeasonLabel::JulOct, SeasonMetric::Precipitation),
    (SeasonLabel::JulOct, SeasonMetric::Trend),
    (SeasonLabel::JulOct, SeasonMetric::Temperature),
    (SeasonLabel::MarJun, SeasonMetric::Precipitation),
    (SeasonLabel::MarJun, SeasonMetric::Trend),
    (SeasonLabel::MarJun, SeasonMetric::Temperature),
    (SeasonLabel::NovFeb, SeasonMetric::Precipitation),
    (SeasonLabel::NovFeb, SeasonMetric::Trend),
    (SeasonLabel::NovFeb, SeasonMetric::Temperature),
];

/// The table column name for a (season, metric) pair, e.g. `"Nov-Feb_Ta"`.
pub fn season_column_name(label: SeasonLabel, metric: SeasonMetric) -> String {
    format!("{}_{}", label.as_str(), metric.suffix())
}

/// One seasonal summary value for a lake. `value` is `None` when the cell is
/// missing or non-numeric; a table lacking the column entirely produces no
/// `SeasonValue` at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonValue {
    pub label: SeasonLabel,
    pub metric: SeasonMetric,
    pub value: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_match_source_schema() {
        let names: Vec<String> = SEASON_COLUMNS
            .iter()
            .map(|(l, m)| season_column_name(*l, *m))
            .collect();
        assert_eq!(
            names,
            [
                "Jul-Oct_Pe",
                "Jul-Oct_Tr",
                "Jul-Oct_Ta",
                "Mar-Jun_Pe",
                "Mar-Jun_Tr",
                "Mar-Jun_Ta",
                "Nov-Feb_Pe",
                "Nov-Feb_Tr",
                "Nov-Feb_Ta",
            ]
        );
    }
}
