//! Feasibility regimes as an injectable policy.

use super::{is_feasible, is_feasible_soft};
use crate::distance::DistanceMatrix;
use crate::models::{Instance, Route};

/// The feasibility regime under which neighborhood operators validate the
/// routes they touch.
///
/// A single operator implementation serves both regimes; the policy decides
/// which routes get validated and with which predicate.
pub trait FeasibilityPolicy {
    /// Returns `true` if a single route is acceptable under this regime.
    fn route_ok(&self, route: &Route) -> bool;

    /// Validates the two routes produced by a relocate move.
    fn relocate_ok(&self, source: &Route, destination: &Route) -> bool;
}

/// Hard time windows: every touched route must pass the full feasibility
/// simulation.
pub struct HardWindows<'a> {
    instance: &'a Instance,
    matrix: &'a DistanceMatrix,
}

impl<'a> HardWindows<'a> {
    /// Creates the hard-window policy for the given problem data.
    pub fn new(instance: &'a Instance, matrix: &'a DistanceMatrix) -> Self {
        Self { instance, matrix }
    }
}

impl FeasibilityPolicy for HardWindows<'_> {
    fn route_ok(&self, route: &Route) -> bool {
        is_feasible(route, self.instance, self.matrix)
    }

    fn relocate_ok(&self, source: &Route, destination: &Route) -> bool {
        self.route_ok(source) && self.route_ok(destination)
    }
}

/// Soft time windows: routes are validated with the optimistic soft
/// predicate, and a relocate validates only its destination route.
///
/// The source route only ever shrinks under relocate and cannot gain
/// demand, so it is deliberately not re-validated.
pub struct SoftWindows<'a> {
    instance: &'a Instance,
    matrix: &'a DistanceMatrix,
}

impl<'a> SoftWindows<'a> {
    /// Creates the soft-window policy for the given problem data.
    pub fn new(instance: &'a Instance, matrix: &'a DistanceMatrix) -> Self {
        Self { instance, matrix }
    }
}

impl FeasibilityPolicy for SoftWindows<'_> {
    fn route_ok(&self, route: &Route) -> bool {
        is_feasible_soft(route, self.instance, self.matrix)
    }

    fn relocate_ok(&self, _source: &Route, destination: &Route) -> bool {
        self.route_ok(destination)
    }
}
