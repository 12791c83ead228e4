//! Randomized neighborhood operators.
//!
//! Each operator draws from the injected RNG, mutates at most the touched
//! routes of a cloned route set, and returns the candidate; committing it is
//! the annealing engine's decision. One implementation per operator serves
//! both feasibility regimes through [`FeasibilityPolicy`].

mod exchange;
mod relocate;
mod reorder;

pub use exchange::exchange;
pub use relocate::relocate;
pub use reorder::adjacent_reorder;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::SolverError;
use crate::evaluation::FeasibilityPolicy;
use crate::models::Solution;

/// Selects which neighborhood operator the annealing engine invokes.
///
/// Parses from the labels `"relocate"`, `"exchange"`, and
/// `"adjacent-reorder"`; anything else is a configuration error naming the
/// allowed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    /// Move one customer from one route into another.
    Relocate,
    /// Swap one customer of each of two routes.
    Exchange,
    /// Swap two adjacent customers within one route when it shortens a leg.
    AdjacentReorder,
}

impl OperatorKind {
    /// The label used in configuration and in [`SolutionRecord`]s.
    ///
    /// [`SolutionRecord`]: crate::annealing::SolutionRecord
    pub fn label(&self) -> &'static str {
        match self {
            OperatorKind::Relocate => "relocate",
            OperatorKind::Exchange => "exchange",
            OperatorKind::AdjacentReorder => "adjacent-reorder",
        }
    }

    /// Produces one candidate with this operator.
    pub fn apply<P, R>(
        &self,
        solution: &Solution,
        matrix: &DistanceMatrix,
        policy: &P,
        rng: &mut R,
    ) -> Solution
    where
        P: FeasibilityPolicy,
        R: Rng,
    {
        match self {
            OperatorKind::Relocate => relocate(solution, policy, rng),
            OperatorKind::Exchange => exchange(solution, policy, rng),
            OperatorKind::AdjacentReorder => adjacent_reorder(solution, matrix, policy, rng),
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OperatorKind {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relocate" => Ok(OperatorKind::Relocate),
            "exchange" => Ok(OperatorKind::Exchange),
            "adjacent-reorder" => Ok(OperatorKind::AdjacentReorder),
            other => Err(SolverError::InvalidConfig(format!(
                "unknown neighborhood operator '{other}': expected one of \
                 'relocate', 'exchange', 'adjacent-reorder'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::HardWindows;
    use crate::models::{Customer, Instance, Route, TimeWindow};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_operator_labels_round_trip() {
        for kind in [
            OperatorKind::Relocate,
            OperatorKind::Exchange,
            OperatorKind::AdjacentReorder,
        ] {
            assert_eq!(kind.label().parse::<OperatorKind>().expect("parses"), kind);
        }
    }

    #[test]
    fn test_operator_unknown_label_names_allowed_values() {
        let err = "sweep".parse::<OperatorKind>().expect_err("must fail");
        let msg = err.to_string();
        assert!(msg.contains("sweep"));
        assert!(msg.contains("relocate"));
        assert!(msg.contains("exchange"));
        assert!(msg.contains("adjacent-reorder"));
    }

    proptest! {
        // Relocate and exchange must never duplicate or drop a customer,
        // whatever the instance geometry and whichever routes get touched.
        #[test]
        fn prop_operators_preserve_partition(
            points in prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 4..10),
            split in 1usize..3,
            seed in 0u64..1000,
        ) {
            let tw = TimeWindow::new(0.0, 100_000.0).expect("valid");
            let mut customers = vec![Customer::depot(0.0, 0.0)];
            for (i, &(x, y)) in points.iter().enumerate() {
                customers.push(Customer::new(i + 1, x, y, 1, 0.0, tw));
            }
            let n = points.len();
            let instance = Instance::new(2, 1000, customers).expect("valid");
            let matrix = DistanceMatrix::from_customers(instance.customers());
            let policy = HardWindows::new(&instance, &matrix);

            let cut = split.min(n - 1);
            let first: Vec<usize> = (1..=cut).collect();
            let second: Vec<usize> = (cut + 1..=n).collect();
            let solution = Solution::from_routes(vec![
                Route::from_interior(&first),
                Route::from_interior(&second),
            ]);

            let mut rng = StdRng::seed_from_u64(seed);
            for kind in [OperatorKind::Relocate, OperatorKind::Exchange, OperatorKind::AdjacentReorder] {
                let candidate = kind.apply(&solution, &matrix, &policy, &mut rng);
                let mut served = candidate.served_customers();
                served.sort_unstable();
                let expected: Vec<usize> = (1..=n).collect();
                prop_assert_eq!(served, expected);
            }
        }
    }
}
