//! Nearest-lake lookup backing map-click selection and proximity queries.
//!
//! Lakes are indexed in an R-tree at load time; queries return haversine
//! distances in kilometers, sorted ascending.

use crate::types::lake::Lake;
use haversine::{distance, Location as HaversineLocation, Units};
use ordered_float::OrderedFloat;
use rstar::RTree;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Optional classification constraints for a proximity query. Matching is
/// case-insensitive on the table's `STATE` / `District` values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LakeFilter {
    pub state: Option<String>,
    pub district: Option<String>,
}

impl LakeFilter {
    pub fn is_empty(&self) -> bool {
        self.state.is_none() && self.district.is_none()
    }

    fn matches(&self, lake: &Lake) -> bool {
        let state_ok = match &self.state {
            Some(want) => lake
                .state
                .as_deref()
                .is_some_and(|have| have.eq_ignore_ascii_case(want)),
            None => true,
        };
        let district_ok = match &self.district {
            Some(want) => lake
                .district
                .as_deref()
                .is_some_and(|have| have.eq_ignore_ascii_case(want)),
            None => true,
        };
        state_ok && district_ok
    }
}

#[derive(Debug, Clone)]
pub struct LakeLocator {
    rtree: RTree<Lake>,
}

// Helper struct for BinaryHeap ordering (compares distance only).
struct LakeCandidate<'a> {
    distance_km: OrderedFloat<f64>,
    lake: &'a Lake,
}

impl PartialEq for LakeCandidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.distance_km == other.distance_km
    }
}
impl Eq for LakeCandidate<'_> {}
impl PartialOrd for LakeCandidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for LakeCandidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance_km.cmp(&other.distance_km)
    }
}

impl LakeLocator {
    pub(crate) fn new(lakes: Vec<Lake>) -> Self {
        LakeLocator {
            rtree: RTree::bulk_load(lakes),
        }
    }

    /// Finds up to `n_results` lakes nearest to (`latitude`, `longitude`)
    /// within `max_distance_km`, closest first. Uses a fast path for plain
    /// proximity queries and a bounded heap walk when a state/district filter
    /// is applied.
    pub fn query(
        &self,
        latitude: f64,
        longitude: f64,
        n_results: usize,
        max_distance_km: f64,
        filter: Option<&LakeFilter>,
    ) -> Vec<(Lake, f64)> {
        if n_results == 0 {
            return vec![];
        }
        match filter {
            Some(f) if !f.is_empty() => self.filtered_heap_query(
                latitude,
                longitude,
                n_results,
                max_distance_km,
                f,
            ),
            _ => self.fast_proximity_query(latitude, longitude, n_results, max_distance_km),
        }
    }

    fn fast_proximity_query(
        &self,
        latitude: f64,
        longitude: f64,
        n_results: usize,
        max_distance_km: f64,
    ) -> Vec<(Lake, f64)> {
        let query_point = [latitude, longitude];

        // Take more candidates than needed: R-tree ordering is in degree space
        // while the distance cut is haversine.
        let candidate_limit = (n_results * 2).max(20);

        let mut lakes_with_dist: Vec<(Lake, f64)> = self
            .rtree
            .nearest_neighbor_iter(&query_point)
            .take(candidate_limit)
            .filter_map(|lake| {
                let dist_km = distance(
                    HaversineLocation {
                        latitude,
                        longitude,
                    },
                    HaversineLocation {
                        latitude: lake.lat,
                        longitude: lake.lon,
                    },
                    Units::Kilometers,
                );
                (dist_km <= max_distance_km).then(|| (lake.to_owned(), dist_km))
            })
            .collect();

        lakes_with_dist.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        lakes_with_dist.truncate(n_results);
        lakes_with_dist
    }

    fn filtered_heap_query(
        &self,
        latitude: f64,
        longitude: f64,
        n_results: usize,
        max_distance_km: f64,
        filter: &LakeFilter,
    ) -> Vec<(Lake, f64)> {
        let query_point = [latitude, longitude];
        let mut heap: BinaryHeap<LakeCandidate<'_>> = BinaryHeap::with_capacity(n_results);

        for lake in self.rtree.nearest_neighbor_iter(&query_point) {
            if !filter.matches(lake) {
                continue;
            }

            let dist_km = distance(
                HaversineLocation {
                    latitude,
                    longitude,
                },
                HaversineLocation {
                    latitude: lake.lat,
                    longitude: lake.lon,
                },
                Units::Kilometers,
            );

            // Candidates arrive roughly by distance; once we are far past the
            // radius nothing closer can follow.
            if dist_km > max_distance_km * 2.0 {
                break;
            }
            if dist_km > max_distance_km {
                continue;
            }

            let candidate = LakeCandidate {
                distance_km: OrderedFloat(dist_km),
                lake,
            };
            if heap.len() < n_results {
                heap.push(candidate);
            } else {
                let worst = heap.peek().map(|c| c.distance_km);
                if worst.is_some_and(|w| candidate.distance_km < w) {
                    heap.pop();
                    heap.push(candidate);
                }
            }
        }

        heap.into_sorted_vec()
            .into_iter()
            .map(|c| (c.lake.to_owned(), c.distance_km.into_inner()))
            .collect()
    }
}
