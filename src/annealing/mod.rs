//! Simulated annealing over vehicle routes.
//!
//! # Algorithm
//!
//! Starting from a seed solution, the engine repeatedly draws a neighbor
//! with the configured operator, accepts improvements outright, and accepts
//! uphill moves with probability `exp(-delta / k * T)`. The temperature
//! follows a geometric schedule, stepping once every `neighborhood_size`
//! iterations, and the search stops when it reaches `final_temperature`.
//! The best solution seen is tracked monotonically and returned regardless
//! of where the walk ends.
//!
//! Two entry points exist per regime: [`anneal`] / [`anneal_soft`] build a
//! randomized seed solution first, [`anneal_from`] / [`anneal_soft_from`]
//! continue from a caller-supplied route set (typically a savings
//! construction).

mod config;
mod cooling;
mod engine;
mod record;

pub use config::{SaConfig, SoftParams};
pub use cooling::CoolingSchedule;
pub use engine::{anneal, anneal_from, anneal_soft, anneal_soft_from, AnnealOutcome, AnnealTrace};
pub use record::SolutionRecord;
