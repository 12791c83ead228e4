//! Hard-window feasibility and soft-window penalty evaluation.

use crate::distance::DistanceMatrix;
use crate::models::{Instance, Route, Solution};

/// Hard time-window feasibility check for a single route.
///
/// Simulates one vehicle traversing the route from the depot: travel time
/// accrues along each leg, a vehicle arriving before a customer's ready time
/// waits until it opens, and arrival after the due time makes the route
/// infeasible immediately. After all interior stops the route is feasible
/// iff the accumulated demand fits the vehicle capacity. The depot legs
/// themselves are not time-window checked.
///
/// A route with no interior customers is feasible (zero demand, zero length).
///
/// # Examples
///
/// ```
/// use vrptw_anneal::models::{Customer, Instance, Route, TimeWindow};
/// use vrptw_anneal::distance::DistanceMatrix;
/// use vrptw_anneal::evaluation::is_feasible;
///
/// let tw = TimeWindow::new(0.0, 100.0).unwrap();
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 3.0, 4.0, 10, 5.0, tw),
/// ];
/// let instance = Instance::new(1, 50, customers).unwrap();
/// let dm = DistanceMatrix::from_customers(instance.customers());
/// assert!(is_feasible(&Route::from_interior(&[1]), &instance, &dm));
/// ```
pub fn is_feasible(route: &Route, instance: &Instance, matrix: &DistanceMatrix) -> bool {
    let ids = route.ids();
    let mut current_time = 0.0;
    let mut total_demand: i32 = 0;

    for i in 1..ids.len().saturating_sub(1) {
        let customer = instance.customer(ids[i]);
        total_demand += customer.demand();
        current_time += matrix.get(ids[i - 1], ids[i]);
        if current_time < customer.time_window().ready() {
            current_time = customer.time_window().ready();
        }
        if customer.time_window().is_violated(current_time) {
            return false;
        }
        current_time += customer.service_duration();
    }

    total_demand <= instance.capacity()
}

/// Soft-window penalty over all routes of a solution.
///
/// Replays the same time simulation as [`is_feasible`] but never fails and
/// never waits: an early arrival accrues `(ready - t) * early_weight`, a
/// late arrival accrues `(t - due) * late_weight`, and service time is added
/// regardless. Capacity is not penalized here; the soft construction
/// predicate checks it separately.
pub fn solution_penalty(
    solution: &Solution,
    instance: &Instance,
    matrix: &DistanceMatrix,
    early_weight: f64,
    late_weight: f64,
) -> f64 {
    let mut total_penalty = 0.0;

    for route in solution.routes() {
        let ids = route.ids();
        let mut current_time = 0.0;

        for i in 1..ids.len().saturating_sub(1) {
            let customer = instance.customer(ids[i]);
            let window = customer.time_window();
            current_time += matrix.get(ids[i - 1], ids[i]);

            if current_time < window.ready() {
                total_penalty += (window.ready() - current_time) * early_weight;
            } else if current_time > window.due() {
                total_penalty += (current_time - window.due()) * late_weight;
            }

            current_time += customer.service_duration();
        }
    }

    total_penalty
}

/// Optimistic soft-feasibility predicate used only by greedy construction.
///
/// Mirrors the hard simulation but returns success as soon as some stop's
/// arrival lands strictly inside the tightened window
/// `[ready, due - service)` with demand-so-far within capacity. This is a
/// deliberately narrower check deciding whether to keep growing a route,
/// not a full feasibility audit.
pub fn is_feasible_soft(route: &Route, instance: &Instance, matrix: &DistanceMatrix) -> bool {
    let ids = route.ids();
    let mut current_time = 0.0;
    let mut total_demand: i32 = 0;

    for i in 1..ids.len().saturating_sub(1) {
        let customer = instance.customer(ids[i]);
        let window = customer.time_window();
        total_demand += customer.demand();
        current_time += matrix.get(ids[i - 1], ids[i]);

        if current_time >= window.ready()
            && current_time < window.due() - customer.service_duration()
            && total_demand <= instance.capacity()
        {
            return true;
        }
        if current_time < window.ready() {
            current_time = window.ready();
        }
        if window.is_violated(current_time) {
            return false;
        }
        current_time += customer.service_duration();
    }

    total_demand <= instance.capacity()
}
