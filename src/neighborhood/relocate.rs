//! Single-customer relocation between two routes.
//!
//! # Algorithm
//!
//! Picks two distinct routes at random, removes a random interior customer
//! from the first, and inserts it at a random interior position of the
//! second. The mutation is kept only if the touched routes satisfy the
//! active feasibility policy; otherwise the input is returned unchanged.

use rand::seq::index;
use rand::Rng;

use crate::evaluation::FeasibilityPolicy;
use crate::models::{Route, Solution};

/// Produces one relocate candidate.
///
/// Returns the input unchanged when there are fewer than two routes, when
/// either picked route has no interior customer, or when the policy rejects
/// the mutated routes. Under the soft policy only the destination route is
/// validated.
pub fn relocate<P, R>(solution: &Solution, policy: &P, rng: &mut R) -> Solution
where
    P: FeasibilityPolicy,
    R: Rng,
{
    if solution.num_routes() < 2 {
        return solution.clone();
    }

    let picked = index::sample(rng, solution.num_routes(), 2);
    let (source_idx, dest_idx) = (picked.index(0), picked.index(1));
    let source = &solution.routes()[source_idx];
    let dest = &solution.routes()[dest_idx];

    if source.is_empty() || dest.is_empty() {
        return solution.clone();
    }

    let source_ids = source.ids();
    let customer_pos = rng.random_range(1..source_ids.len() - 1);
    let customer = source_ids[customer_pos];

    let mut new_source = source_ids.to_vec();
    new_source.remove(customer_pos);

    let mut new_dest = dest.ids().to_vec();
    let insert_pos = rng.random_range(1..new_dest.len());
    new_dest.insert(insert_pos, customer);

    let new_source = Route::new(new_source);
    let new_dest = Route::new(new_dest);

    if policy.relocate_ok(&new_source, &new_dest) {
        let mut candidate = solution.clone();
        candidate.routes_mut()[source_idx] = new_source;
        candidate.routes_mut()[dest_idx] = new_dest;
        candidate
    } else {
        solution.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::evaluation::HardWindows;
    use crate::models::{Customer, Instance, TimeWindow};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup(capacity: i32) -> (Instance, DistanceMatrix) {
        let tw = TimeWindow::new(0.0, 10_000.0).expect("valid");
        let customers = vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 1.0, 0.0, 10, 1.0, tw),
            Customer::new(2, 2.0, 0.0, 10, 1.0, tw),
            Customer::new(3, 0.0, 1.0, 10, 1.0, tw),
            Customer::new(4, 0.0, 2.0, 10, 1.0, tw),
        ];
        let instance = Instance::new(2, capacity, customers).expect("valid");
        let matrix = DistanceMatrix::from_customers(instance.customers());
        (instance, matrix)
    }

    fn two_route_solution() -> Solution {
        Solution::from_routes(vec![
            Route::from_interior(&[1, 2]),
            Route::from_interior(&[3, 4]),
        ])
    }

    #[test]
    fn test_relocate_preserves_customer_multiset() {
        let (instance, matrix) = setup(100);
        let policy = HardWindows::new(&instance, &matrix);
        let solution = two_route_solution();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let candidate = relocate(&solution, &policy, &mut rng);
            let mut served = candidate.served_customers();
            served.sort_unstable();
            assert_eq!(served, vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_relocate_single_route_unchanged() {
        let (instance, matrix) = setup(100);
        let policy = HardWindows::new(&instance, &matrix);
        let solution = Solution::from_routes(vec![Route::from_interior(&[1, 2, 3, 4])]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(relocate(&solution, &policy, &mut rng), solution);
    }

    #[test]
    fn test_relocate_empty_route_unchanged() {
        let (instance, matrix) = setup(100);
        let policy = HardWindows::new(&instance, &matrix);
        let solution = Solution::from_routes(vec![
            Route::from_interior(&[1, 2, 3, 4]),
            Route::from_interior(&[]),
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(relocate(&solution, &policy, &mut rng), solution);
        }
    }

    #[test]
    fn test_relocate_rejects_capacity_violation() {
        // Capacity 20 holds exactly two customers per route; any relocate
        // would push a route to 30 and must be rejected.
        let (instance, matrix) = setup(20);
        let policy = HardWindows::new(&instance, &matrix);
        let solution = two_route_solution();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            assert_eq!(relocate(&solution, &policy, &mut rng), solution);
        }
    }

    #[test]
    fn test_relocate_eventually_moves_a_customer() {
        let (instance, matrix) = setup(100);
        let policy = HardWindows::new(&instance, &matrix);
        let solution = two_route_solution();
        let mut rng = StdRng::seed_from_u64(3);
        let mut moved = false;
        for _ in 0..50 {
            if relocate(&solution, &policy, &mut rng) != solution {
                moved = true;
                break;
            }
        }
        assert!(moved);
    }
}
