//! Clarke-Wright savings construction.
//!
//! # Algorithm
//!
//! Starts with one trivial route per customer (depot → customer → depot),
//! computes the merge saving for every unordered customer pair:
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! then processes pairs in decreasing order of saving. The route containing
//! `i` and the route containing `j` are concatenated (dropping the trailing
//! and leading depot respectively) whenever the merged route passes the full
//! hard-feasibility check. Greedy and single-pass: an accepted merge is
//! never undone.
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use std::cmp::Ordering;

use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::evaluation::is_feasible;
use crate::models::{Instance, Route, Solution};

/// A savings value for merging the routes serving two customers.
#[derive(Debug)]
struct Saving {
    i: usize,
    j: usize,
    value: f64,
}

/// Constructs a route set with the Clarke-Wright savings heuristic.
///
/// Routes that end up hard-infeasible after all merges are dropped and
/// their customers reported via [`Solution::unassigned`]; they are not
/// repaired or retried.
///
/// Deterministic: equal savings are broken by ascending `(i, j)`.
///
/// # Examples
///
/// ```
/// use vrptw_anneal::models::{Customer, Instance, TimeWindow};
/// use vrptw_anneal::distance::DistanceMatrix;
/// use vrptw_anneal::constructive::clarke_wright_savings;
///
/// let tw = TimeWindow::new(0.0, 1000.0).unwrap();
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, 10, 0.0, tw),
///     Customer::new(2, 2.0, 0.0, 10, 0.0, tw),
/// ];
/// let instance = Instance::new(2, 30, customers).unwrap();
/// let dm = DistanceMatrix::from_customers(instance.customers());
/// let solution = clarke_wright_savings(&instance, &dm);
/// assert_eq!(solution.num_served(), 2);
/// assert_eq!(solution.num_routes(), 1);
/// ```
pub fn clarke_wright_savings(instance: &Instance, matrix: &DistanceMatrix) -> Solution {
    let n = instance.customers().len();
    if n <= 1 {
        return Solution::new();
    }

    // One trivial route per customer.
    let mut routes: Vec<Route> = (1..n).map(|i| Route::from_interior(&[i])).collect();

    // Pairwise merge savings, descending, ties by ascending (i, j).
    let mut savings = Vec::with_capacity((n - 1) * (n - 2) / 2);
    for i in 1..n {
        for j in (i + 1)..n {
            let value = matrix.get(0, i) + matrix.get(0, j) - matrix.get(i, j);
            savings.push(Saving { i, j, value });
        }
    }
    savings.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(Ordering::Equal)
            .then_with(|| (a.i, a.j).cmp(&(b.i, b.j)))
    });

    let mut merges = 0usize;
    for saving in &savings {
        let Some(idx_i) = routes.iter().position(|r| r.contains(saving.i)) else {
            continue;
        };
        let Some(idx_j) = routes.iter().position(|r| r.contains(saving.j)) else {
            continue;
        };
        if idx_i == idx_j {
            continue;
        }

        // Concatenate: first route without its trailing depot, second
        // without its leading depot.
        let first = routes[idx_i].ids();
        let second = routes[idx_j].ids();
        let mut merged = Vec::with_capacity(first.len() + second.len() - 2);
        merged.extend_from_slice(&first[..first.len() - 1]);
        merged.extend_from_slice(&second[1..]);
        let merged = Route::new(merged);

        if is_feasible(&merged, instance, matrix) {
            // Remove the higher index first so the lower stays valid.
            let (hi, lo) = if idx_i > idx_j {
                (idx_i, idx_j)
            } else {
                (idx_j, idx_i)
            };
            routes.remove(hi);
            routes.remove(lo);
            routes.push(merged);
            merges += 1;
        }
    }

    // Re-validate every surviving route; infeasible ones are dropped and
    // reported, not repaired.
    let mut solution = Solution::new();
    for route in routes {
        if is_feasible(&route, instance, matrix) {
            solution.add_route(route);
        } else {
            debug!(route = ?route.ids(), "dropping infeasible route after savings merges");
            for &customer in route.interior() {
                solution.add_unassigned(customer);
            }
        }
    }

    debug!(
        merges,
        routes = solution.num_routes(),
        unassigned = solution.unassigned().len(),
        "savings construction finished"
    );
    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::total_length;
    use crate::models::{Customer, TimeWindow};

    fn open_window() -> TimeWindow {
        TimeWindow::new(0.0, 10_000.0).expect("valid")
    }

    fn line_instance(demands: &[i32], capacity: i32) -> (Instance, DistanceMatrix) {
        let mut customers = vec![Customer::depot(0.0, 0.0)];
        for (k, &demand) in demands.iter().enumerate() {
            customers.push(Customer::new(
                k + 1,
                (k + 1) as f64,
                0.0,
                demand,
                0.0,
                open_window(),
            ));
        }
        let instance = Instance::new(3, capacity, customers).expect("valid");
        let matrix = DistanceMatrix::from_customers(instance.customers());
        (instance, matrix)
    }

    #[test]
    fn test_collinear_customers_merge_in_order() {
        // Five customers on a line with generous windows and capacity:
        // savings strictly favor merging collinear points into one route.
        let (instance, dm) = line_instance(&[1, 1, 1, 1, 1], 100);
        let sol = clarke_wright_savings(&instance, &dm);
        assert_eq!(sol.num_routes(), 1);
        assert_eq!(sol.routes()[0].ids(), &[0, 1, 2, 3, 4, 5, 0]);
        assert!(sol.unassigned().is_empty());
    }

    #[test]
    fn test_capacity_blocks_maximal_saving() {
        // Two far-out customers with the maximal pairwise saving, but their
        // combined demand exceeds capacity: they must stay separate.
        let (instance, dm) = line_instance(&[30, 30], 50);
        let sol = clarke_wright_savings(&instance, &dm);
        assert_eq!(sol.num_routes(), 2);
        assert_eq!(sol.num_served(), 2);
        for route in sol.routes() {
            let demand: i32 = route
                .interior()
                .iter()
                .map(|&c| instance.customer(c).demand())
                .sum();
            assert!(demand <= instance.capacity());
        }
    }

    #[test]
    fn test_capacity_invariant_holds() {
        let (instance, dm) = line_instance(&[15, 15, 15, 15], 35);
        let sol = clarke_wright_savings(&instance, &dm);
        assert_eq!(sol.num_served(), 4);
        for route in sol.routes() {
            let demand: i32 = route
                .interior()
                .iter()
                .map(|&c| instance.customer(c).demand())
                .sum();
            assert!(demand <= 35);
        }
    }

    #[test]
    fn test_deterministic() {
        let (instance, dm) = line_instance(&[10, 20, 10, 20, 10], 40);
        let a = clarke_wright_savings(&instance, &dm);
        let b = clarke_wright_savings(&instance, &dm);
        assert_eq!(a, b);
    }

    #[test]
    fn test_routes_closed_at_depot() {
        let (instance, dm) = line_instance(&[10, 20, 30], 40);
        let sol = clarke_wright_savings(&instance, &dm);
        for route in sol.routes() {
            assert!(route.is_closed());
        }
    }

    #[test]
    fn test_merge_beats_trivial_routes() {
        let (instance, dm) = line_instance(&[1, 1, 1], 100);
        let sol = clarke_wright_savings(&instance, &dm);
        // Trivial: 2+4+6 = 12. Merged line: 0→1→2→3→0 = 6.
        assert!((total_length(&sol, &dm) - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_time_window_blocks_merge() {
        // Customer 2's window closes before any route arriving via
        // customer 1 can reach it, and vice versa is fine.
        let tight = TimeWindow::new(0.0, 2.5).expect("valid");
        let customers = vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 1.0, 0.0, 1, 10.0, open_window()),
            Customer::new(2, 2.0, 0.0, 1, 0.0, tight),
        ];
        let instance = Instance::new(2, 100, customers).expect("valid");
        let dm = DistanceMatrix::from_customers(instance.customers());
        let sol = clarke_wright_savings(&instance, &dm);
        // Merge [0,1,2,0] arrives at 2 at t = 1+10+1 = 12 > 2.5, so the
        // only surviving shape keeps them apart or orders 2 before 1.
        for route in sol.routes() {
            assert!(is_feasible(route, &instance, &dm));
        }
        assert_eq!(sol.num_served() + sol.unassigned().len(), 2);
    }

    #[test]
    fn test_empty_instance() {
        let customers = vec![Customer::depot(0.0, 0.0)];
        let instance = Instance::new(1, 10, customers).expect("valid");
        let dm = DistanceMatrix::from_customers(instance.customers());
        let sol = clarke_wright_savings(&instance, &dm);
        assert_eq!(sol.num_routes(), 0);
    }
}
