//! Adjacent-pair reordering within a single route.
//!
//! # Algorithm
//!
//! Picks one route at random and scans consecutive interior triples
//! `(pos, pos+1, pos+2)`. If the customer two steps ahead is closer to the
//! customer at `pos` than its immediate successor is, the two successors are
//! swapped. The first improving swap that also satisfies the feasibility
//! policy is applied (first-improvement); if none qualifies the input is
//! returned unchanged.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::evaluation::FeasibilityPolicy;
use crate::models::{Route, Solution};

/// Produces one adjacent-reorder candidate.
///
/// All distance comparisons index the route sequence consistently: both
/// legs are measured from the customer at `pos` via the distance matrix.
pub fn adjacent_reorder<P, R>(
    solution: &Solution,
    matrix: &DistanceMatrix,
    policy: &P,
    rng: &mut R,
) -> Solution
where
    P: FeasibilityPolicy,
    R: Rng,
{
    if solution.num_routes() == 0 {
        return solution.clone();
    }

    let route_idx = rng.random_range(0..solution.num_routes());
    let ids = solution.routes()[route_idx].ids();
    let n = ids.len();

    // The triple must stay clear of both depot sentinels: pos >= 1 and
    // pos + 2 <= n - 2.
    for pos in 1..n.saturating_sub(3) {
        let here = ids[pos];
        let next = ids[pos + 1];
        let after = ids[pos + 2];

        if matrix.get(here, after) < matrix.get(here, next) {
            let mut swapped = ids.to_vec();
            swapped.swap(pos + 1, pos + 2);
            let swapped = Route::new(swapped);

            if policy.route_ok(&swapped) {
                let mut candidate = solution.clone();
                candidate.routes_mut()[route_idx] = swapped;
                return candidate;
            }
        }
    }

    solution.clone()
}
