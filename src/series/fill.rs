//! Gap-filling policies for monthly series.
//!
//! The historical dashboards never settled on one treatment of missing months,
//! so the policy is an explicit, required parameter of every series query and
//! each policy is reproducible in isolation here.

use crate::series::extract::SeriesPoint;
use serde::{Deserialize, Serialize};

/// How missing month values are resolved before a series is returned.
///
/// Callers must pick exactly one policy per query; the numeric outcomes differ
/// materially between policies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillPolicy {
    /// Missing interior values are linearly interpolated between the nearest
    /// earlier and later known values, in sequence order. Leading or trailing
    /// runs with no bound on one side become `0.0`. The output contains no
    /// missing values.
    Interpolate,
    /// Each missing value takes the most recent preceding known value. A
    /// leading run with no preceding value stays missing.
    ForwardFill,
    /// Points with missing values are removed from the series entirely. A
    /// chart rendering this variant must not draw segments across the gap.
    DropMissing,
    /// Missing values are kept as explicit `None`; the caller decides how to
    /// render them.
    Raw,
}

/// Applies `policy` to the points of a series, in order.
pub(crate) fn apply(policy: FillPolicy, points: Vec<SeriesPoint>) -> Vec<SeriesPoint> {
    match policy {
        FillPolicy::Interpolate => interpolate(points),
        FillPolicy::ForwardFill => forward_fill(points),
        FillPolicy::DropMissing => points.into_iter().filter(|p| p.value.is_some()).collect(),
        FillPolicy::Raw => points,
    }
}

/// Interpolation is linear in sequence position, not calendar time: the
/// columns of a table are treated as equally spaced, which matches how the
/// original dashboards filled their charts.
fn interpolate(mut points: Vec<SeriesPoint>) -> Vec<SeriesPoint> {
    let known: Vec<(usize, f64)> = points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.value.map(|v| (i, v)))
        .collect();

    for pair in known.windows(2) {
        let (left, left_value) = pair[0];
        let (right, right_value) = pair[1];
        let span = (right - left) as f64;
        for i in left + 1..right {
            let t = (i - left) as f64 / span;
            points[i].value = Some(left_value + (right_value - left_value) * t);
        }
    }

    // Runs with no bound on one side cannot be interpolated; they resolve to 0.
    for point in &mut points {
        if point.value.is_none() {
            point.value = Some(0.0);
        }
    }
    points
}

fn forward_fill(mut points: Vec<SeriesPoint>) -> Vec<SeriesPoint> {
    let mut last_known: Option<f64> = None;
    for point in &mut points {
        match point.value {
            Some(v) => last_known = Some(v),
            None => point.value = last_known,
        }
    }
    points
}
