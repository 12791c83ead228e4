//! Route and solution length evaluation.

use super::DistanceMatrix;
use crate::models::{Route, Solution};

/// Sum of consecutive-pair distances along a route, both depot legs included.
///
/// # Examples
///
/// ```
/// use vrptw_anneal::models::{Customer, Route};
/// use vrptw_anneal::distance::{route_length, DistanceMatrix};
///
/// let customers = vec![Customer::depot(0.0, 0.0), Customer::depot(3.0, 4.0)];
/// let dm = DistanceMatrix::from_customers(&customers);
/// let route = Route::from_interior(&[1]);
/// assert!((route_length(&route, &dm) - 10.0).abs() < 1e-10);
/// ```
pub fn route_length(route: &Route, matrix: &DistanceMatrix) -> f64 {
    route
        .ids()
        .windows(2)
        .map(|pair| matrix.get(pair[0], pair[1]))
        .sum()
}

/// Sum of [`route_length`] over all routes of a solution.
pub fn total_length(solution: &Solution, matrix: &DistanceMatrix) -> f64 {
    solution
        .routes()
        .iter()
        .map(|route| route_length(route, matrix))
        .sum()
}
