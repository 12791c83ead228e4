//! Serializable run records.

use serde::{Deserialize, Serialize};

use super::engine::AnnealOutcome;
use crate::models::Solution;

/// Flat, serializable summary of one solver run.
///
/// Carries the labels identifying the run, the before/after distances and
/// route id sequences, the runtime in seconds, and the audit time series.
/// Construction-only runs leave the series empty and use the neighborhood
/// label `"none"`.
///
/// # Examples
///
/// ```
/// use vrptw_anneal::annealing::SolutionRecord;
/// use vrptw_anneal::models::{Route, Solution};
///
/// let solution = Solution::from_routes(vec![Route::from_interior(&[1, 2])]);
/// let record = SolutionRecord::from_construction("demo", "savings", 6.0, &solution, 0.001);
/// let json = serde_json::to_string(&record).expect("serializes");
/// let back: SolutionRecord = serde_json::from_str(&json).expect("deserializes");
/// assert_eq!(back.best_routes, vec![vec![0, 1, 2, 0]]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionRecord {
    /// Name of the instance the run solved.
    pub dataset: String,
    /// Algorithm label, e.g. `"sa-hard"`, `"sa-soft"`, `"savings"`.
    pub algorithm: String,
    /// Neighborhood operator label, `"none"` for construction-only runs.
    pub neighborhood: String,
    /// Total distance of the starting route set.
    pub initial_distance: f64,
    /// Total distance of the best route set found.
    pub best_distance: f64,
    /// Starting routes as id sequences, depot sentinels included.
    pub initial_routes: Vec<Vec<usize>>,
    /// Best routes as id sequences, depot sentinels included.
    pub best_routes: Vec<Vec<usize>>,
    /// Wall-clock runtime in seconds.
    pub runtime: f64,
    /// Temperature after each cooling step.
    pub temperatures: Vec<f64>,
    /// Distance of every candidate drawn.
    pub candidate_distances: Vec<f64>,
    /// Distance of each candidate accepted through the exponential draw.
    pub accepted_distances: Vec<f64>,
    /// Probability of each exponential acceptance.
    pub acceptance_probabilities: Vec<f64>,
}

fn route_ids(solution: &Solution) -> Vec<Vec<usize>> {
    solution
        .routes()
        .iter()
        .map(|route| route.ids().to_vec())
        .collect()
}

impl SolutionRecord {
    /// Builds a record from an annealing outcome.
    pub fn from_outcome(dataset: &str, algorithm: &str, outcome: &AnnealOutcome) -> Self {
        Self {
            dataset: dataset.to_owned(),
            algorithm: algorithm.to_owned(),
            neighborhood: String::new(),
            initial_distance: outcome.initial_distance,
            best_distance: outcome.best_distance,
            initial_routes: route_ids(&outcome.initial),
            best_routes: route_ids(&outcome.best),
            runtime: outcome.runtime.as_secs_f64(),
            temperatures: outcome.trace.temperatures.clone(),
            candidate_distances: outcome.trace.candidate_distances.clone(),
            accepted_distances: outcome.trace.accepted_distances.clone(),
            acceptance_probabilities: outcome.trace.acceptance_probabilities.clone(),
        }
    }

    /// Builds a record for a construction-only run such as a savings pass.
    /// Initial and best coincide and every time series is empty.
    pub fn from_construction(
        dataset: &str,
        algorithm: &str,
        distance: f64,
        solution: &Solution,
        runtime_secs: f64,
    ) -> Self {
        let routes = route_ids(solution);
        Self {
            dataset: dataset.to_owned(),
            algorithm: algorithm.to_owned(),
            neighborhood: "none".to_owned(),
            initial_distance: distance,
            best_distance: distance,
            initial_routes: routes.clone(),
            best_routes: routes,
            runtime: runtime_secs,
            temperatures: Vec::new(),
            candidate_distances: Vec::new(),
            accepted_distances: Vec::new(),
            acceptance_probabilities: Vec::new(),
        }
    }

    /// Sets the neighborhood label, builder-style.
    pub fn with_neighborhood(mut self, label: &str) -> Self {
        self.neighborhood = label.to_owned();
        self
    }
}
