//! # vrptw-anneal
//!
//! Vehicle routing with time windows: savings construction plus simulated
//! annealing over hard and soft time-window regimes.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Customer, TimeWindow, Instance, Route, Solution)
//! - [`distance`] — Euclidean distance matrix and route length evaluation
//! - [`evaluation`] — Time-window feasibility, penalty scoring, feasibility policies
//! - [`constructive`] — Clarke-Wright savings and randomized seed construction
//! - [`neighborhood`] — Relocate, exchange, and adjacent-reorder operators
//! - [`annealing`] — Simulated annealing engines, configuration, and run records

pub mod annealing;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod neighborhood;

pub use error::SolverError;
