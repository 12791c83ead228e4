//! Feasibility evaluation.
//!
//! Hard-window feasibility, soft-window penalty accrual, the optimistic soft
//! construction predicate, and the [`FeasibilityPolicy`] seam that lets one
//! operator implementation serve both regimes.

mod feasibility;
mod policy;

pub use feasibility::{is_feasible, is_feasible_soft, solution_penalty};
pub use policy::{FeasibilityPolicy, HardWindows, SoftWindows};
