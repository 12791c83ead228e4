//! Pairwise customer exchange between two routes.
//!
//! # Algorithm
//!
//! Picks two distinct routes at random and swaps one random interior
//! customer of each across the routes. Both mutated routes must satisfy the
//! active feasibility policy for the swap to be kept.

use rand::seq::index;
use rand::Rng;

use crate::evaluation::FeasibilityPolicy;
use crate::models::{Route, Solution};

/// Produces one exchange candidate.
///
/// Returns the input unchanged when there are fewer than two routes, when
/// either picked route has one interior customer or fewer, or when the
/// policy rejects either mutated route.
pub fn exchange<P, R>(solution: &Solution, policy: &P, rng: &mut R) -> Solution
where
    P: FeasibilityPolicy,
    R: Rng,
{
    if solution.num_routes() < 2 {
        return solution.clone();
    }

    let picked = index::sample(rng, solution.num_routes(), 2);
    let (first_idx, second_idx) = (picked.index(0), picked.index(1));
    let first = &solution.routes()[first_idx];
    let second = &solution.routes()[second_idx];

    if first.num_customers() <= 1 || second.num_customers() <= 1 {
        return solution.clone();
    }

    let first_ids = first.ids();
    let second_ids = second.ids();
    let pos1 = rng.random_range(1..first_ids.len() - 1);
    let pos2 = rng.random_range(1..second_ids.len() - 1);

    let mut new_first = first_ids.to_vec();
    let mut new_second = second_ids.to_vec();
    new_first[pos1] = second_ids[pos2];
    new_second[pos2] = first_ids[pos1];

    let new_first = Route::new(new_first);
    let new_second = Route::new(new_second);

    if policy.route_ok(&new_first) && policy.route_ok(&new_second) {
        let mut candidate = solution.clone();
        candidate.routes_mut()[first_idx] = new_first;
        candidate.routes_mut()[second_idx] = new_second;
        candidate
    } else {
        solution.clone()
    }
}
