//! Solver error taxonomy.
//!
//! Rejected merges and rejected neighborhood moves are the normal search
//! path and are never reported through this type.

use thiserror::Error;

/// Errors surfaced by construction, configuration, and the annealing engines.
#[derive(Debug, Clone, Error)]
pub enum SolverError {
    /// The instance data is unusable (bad depot, negative demand, ...).
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// A configuration value or label was rejected before any search began.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Randomized seed construction ran out of attempts without producing
    /// the required number of feasible routes.
    #[error("seed construction exhausted after {attempts} attempts")]
    SeedExhausted {
        /// Number of shuffles tried before giving up.
        attempts: usize,
    },
}
