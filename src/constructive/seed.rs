//! Randomized feasible seed construction.
//!
//! Shuffles the customer ids and deals them into `ceil(n / num_vehicles)`
//! sized routes, keeping a shuffle only when every dealt route passes the
//! active policy's route check. This is a best-effort randomized retry; the
//! attempt bound keeps it from spinning forever on degenerate instances.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::SolverError;
use crate::evaluation::FeasibilityPolicy;
use crate::models::{Instance, Route, Solution};

/// Default shuffle budget for [`seed_solution`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Builds an initial route set by repeated shuffling.
///
/// Returns [`SolverError::SeedExhausted`] once `max_attempts` shuffles have
/// failed to produce the required route count.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use vrptw_anneal::models::{Customer, Instance, TimeWindow};
/// use vrptw_anneal::distance::DistanceMatrix;
/// use vrptw_anneal::evaluation::HardWindows;
/// use vrptw_anneal::constructive::{seed_solution, DEFAULT_MAX_ATTEMPTS};
///
/// let tw = TimeWindow::new(0.0, 1000.0).unwrap();
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, 10, 0.0, tw),
///     Customer::new(2, 2.0, 0.0, 10, 0.0, tw),
/// ];
/// let instance = Instance::new(2, 30, customers).unwrap();
/// let dm = DistanceMatrix::from_customers(instance.customers());
/// let policy = HardWindows::new(&instance, &dm);
/// let mut rng = StdRng::seed_from_u64(0);
///
/// let seed = seed_solution(&instance, &policy, &mut rng, DEFAULT_MAX_ATTEMPTS).unwrap();
/// assert_eq!(seed.num_served(), 2);
/// ```
pub fn seed_solution<P, R>(
    instance: &Instance,
    policy: &P,
    rng: &mut R,
    max_attempts: usize,
) -> Result<Solution, SolverError>
where
    P: FeasibilityPolicy,
    R: Rng,
{
    let num_customers = instance.num_customers();
    if num_customers == 0 {
        return Ok(Solution::new());
    }

    let per_route = num_customers.div_ceil(instance.num_vehicles());
    let required_routes = num_customers.div_ceil(per_route);
    let mut ids: Vec<usize> = (1..=num_customers).collect();

    for attempt in 1..=max_attempts {
        ids.shuffle(rng);

        let mut routes = Vec::with_capacity(required_routes);
        for chunk in ids.chunks(per_route) {
            let route = Route::from_interior(chunk);
            if policy.route_ok(&route) {
                routes.push(route);
            } else {
                break;
            }
        }

        if routes.len() == required_routes {
            debug!(attempt, routes = routes.len(), "seed construction succeeded");
            return Ok(Solution::from_routes(routes));
        }
    }

    Err(SolverError::SeedExhausted {
        attempts: max_attempts,
    })
}
