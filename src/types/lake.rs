//! Defines the data structures representing lakes and their metadata, including
//! the identifier type and the implementations required for spatial indexing
//! with the `rstar` crate.

use rstar::{PointDistance, RTreeObject, AABB};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A lake identifier as it appears in the `Lake_id` column.
///
/// The source tables have used both numeric and textual identifiers, so both
/// are representable. `From` conversions let callers pass plain integers or
/// strings wherever a `LakeId` is expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LakeId {
    Int(i64),
    Name(String),
}

impl From<i64> for LakeId {
    fn from(value: i64) -> Self {
        LakeId::Int(value)
    }
}

impl From<i32> for LakeId {
    fn from(value: i32) -> Self {
        LakeId::Int(value as i64)
    }
}

impl From<&str> for LakeId {
    fn from(value: &str) -> Self {
        LakeId::Name(value.to_string())
    }
}

impl From<String> for LakeId {
    fn from(value: String) -> Self {
        LakeId::Name(value)
    }
}

impl Display for LakeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LakeId::Int(v) => write!(f, "{}", v),
            LakeId::Name(s) => write!(f, "{}", s),
        }
    }
}

/// One lake from the source table: identifier, coordinates and administrative
/// classification. This is the payload a map layer renders as a marker.
///
/// The row index ties the lake back to its row in the loaded table and is not
/// part of the serialized form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lake {
    /// The identifier from the `Lake_id` column.
    pub id: LakeId,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Administrative state, if the table carries a `STATE` column.
    pub state: Option<String>,
    /// Administrative district, if the table carries a `District` column.
    pub district: Option<String>,
    #[serde(skip)]
    pub(crate) row: usize,
}

impl RTreeObject for Lake {
    type Envelope = AABB<[f64; 2]>;

    /// A lake is indexed as a point, so its envelope is the degenerate AABB
    /// containing only (lat, lon).
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.lat, self.lon])
    }
}

impl PointDistance for Lake {
    /// Squared Euclidean distance in degree space. An approximation, but the
    /// standard choice for R-tree nearest-neighbour ordering; the exact
    /// haversine distance is computed afterwards for the returned candidates.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.lat - point[0];
        let dy = self.lon - point[1];
        dx * dx + dy * dy
    }
}
