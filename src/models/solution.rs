//! Route set (solution candidate).

use super::Route;

/// A collection of routes, together covering the non-depot customers.
///
/// During search a candidate may transiently violate the partition property
/// while an operator is still being validated; only validated candidates are
/// committed as "current". Customers dropped by construction are recorded in
/// `unassigned` rather than silently discarded.
///
/// # Examples
///
/// ```
/// use vrptw_anneal::models::{Route, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_route(Route::from_interior(&[1, 2]));
/// sol.add_route(Route::from_interior(&[3]));
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_served(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
    routes: Vec<Route>,
    unassigned: Vec<usize>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solution from a list of routes.
    pub fn from_routes(routes: Vec<Route>) -> Self {
        Self {
            routes,
            unassigned: Vec::new(),
        }
    }

    /// Adds a route.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Records a customer that could not be placed on any feasible route.
    pub fn add_unassigned(&mut self, customer_id: usize) {
        self.unassigned.push(customer_id);
    }

    /// The routes of this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Mutable access to the routes.
    pub fn routes_mut(&mut self) -> &mut Vec<Route> {
        &mut self.routes
    }

    /// Number of routes.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Customers dropped during construction.
    pub fn unassigned(&self) -> &[usize] {
        &self.unassigned
    }

    /// Total number of customers served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.num_customers()).sum()
    }

    /// All served customer ids, in route order.
    pub fn served_customers(&self) -> Vec<usize> {
        self.routes
            .iter()
            .flat_map(|r| r.interior().iter().copied())
            .collect()
    }
}
