//! Constructive heuristics.
//!
//! Clarke-Wright savings merging and the randomized shuffle-and-deal seed
//! used to start the annealing engines.

mod clarke_wright;
mod seed;

pub use clarke_wright::clarke_wright_savings;
pub use seed::{seed_solution, DEFAULT_MAX_ATTEMPTS};
