//! Simulated-annealing search loops.
//!
//! Two regimes share the operator implementations but differ in how a
//! candidate is admitted: the hard engine requires every touched route to
//! pass full time-window feasibility, the soft engine admits window
//! violations as long as the accumulated penalty stays below a ceiling.
//!
//! The acceptance exponent is `exp(-delta / k * T)`: the temperature
//! multiplies the exponent rather than dividing it. See DESIGN.md for why
//! this form is kept as-is.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::config::{SaConfig, SoftParams};
use crate::constructive::{seed_solution, DEFAULT_MAX_ATTEMPTS};
use crate::distance::{total_length, DistanceMatrix};
use crate::error::SolverError;
use crate::evaluation::{solution_penalty, HardWindows, SoftWindows};
use crate::models::{Instance, Solution};

/// Audit time series gathered during a run. Not consumed by the search
/// itself; downstream tooling reads it off the [`AnnealOutcome`].
#[derive(Debug, Clone, Default)]
pub struct AnnealTrace {
    /// Temperature after each cooling step.
    pub temperatures: Vec<f64>,
    /// Distance of every candidate drawn, one entry per iteration.
    pub candidate_distances: Vec<f64>,
    /// Distance of each candidate accepted through the exponential draw.
    pub accepted_distances: Vec<f64>,
    /// Probability of each exponential acceptance.
    pub acceptance_probabilities: Vec<f64>,
}

/// Result of one annealing run.
#[derive(Debug, Clone)]
pub struct AnnealOutcome {
    /// The starting route set.
    pub initial: Solution,
    /// Total distance of the starting route set.
    pub initial_distance: f64,
    /// Best route set found.
    pub best: Solution,
    /// Total distance of the best route set.
    pub best_distance: f64,
    /// Penalty of the best route set (soft regime only).
    pub best_penalty: Option<f64>,
    /// Number of search iterations performed.
    pub iterations: usize,
    /// Wall-clock duration of the search. Reported only; never a guard.
    pub runtime: Duration,
    /// Audit time series.
    pub trace: AnnealTrace,
}

/// Runs hard-window simulated annealing from a freshly built seed solution.
///
/// The RNG stream is seeded once from `config.seed` and consumed in a fixed
/// order by seed construction and every operator invocation.
pub fn anneal(
    instance: &Instance,
    matrix: &DistanceMatrix,
    config: &SaConfig,
) -> Result<AnnealOutcome, SolverError> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let policy = HardWindows::new(instance, matrix);
    let initial = seed_solution(instance, &policy, &mut rng, DEFAULT_MAX_ATTEMPTS)?;
    run_hard(instance, matrix, initial, config, &mut rng)
}

/// Runs hard-window simulated annealing from a caller-supplied route set.
pub fn anneal_from(
    instance: &Instance,
    matrix: &DistanceMatrix,
    initial: Solution,
    config: &SaConfig,
) -> Result<AnnealOutcome, SolverError> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    run_hard(instance, matrix, initial, config, &mut rng)
}

/// Runs soft-window simulated annealing from a freshly built seed solution.
pub fn anneal_soft(
    instance: &Instance,
    matrix: &DistanceMatrix,
    config: &SaConfig,
    soft: &SoftParams,
) -> Result<AnnealOutcome, SolverError> {
    config.validate()?;
    soft.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let policy = SoftWindows::new(instance, matrix);
    let initial = seed_solution(instance, &policy, &mut rng, DEFAULT_MAX_ATTEMPTS)?;
    run_soft(instance, matrix, initial, config, soft, &mut rng)
}

/// Runs soft-window simulated annealing from a caller-supplied route set.
pub fn anneal_soft_from(
    instance: &Instance,
    matrix: &DistanceMatrix,
    initial: Solution,
    config: &SaConfig,
    soft: &SoftParams,
) -> Result<AnnealOutcome, SolverError> {
    config.validate()?;
    soft.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    run_soft(instance, matrix, initial, config, soft, &mut rng)
}

fn run_hard(
    instance: &Instance,
    matrix: &DistanceMatrix,
    initial: Solution,
    config: &SaConfig,
    rng: &mut StdRng,
) -> Result<AnnealOutcome, SolverError> {
    let start = Instant::now();
    let policy = HardWindows::new(instance, matrix);

    let initial_distance = total_length(&initial, matrix);
    let mut current = initial.clone();
    let mut current_distance = initial_distance;
    let mut best = initial.clone();
    let mut best_distance = initial_distance;

    // Hard regime: the configured value is a fraction of the initial
    // distance.
    let mut temperature = initial_distance * config.initial_temperature;
    let mut counter = 0usize;
    let mut audit = AnnealTrace::default();

    debug!(
        initial_distance,
        temperature,
        operator = %config.operator,
        "entering hard-window annealing"
    );

    while temperature > config.final_temperature {
        let candidate = config.operator.apply(&current, matrix, &policy, rng);
        let candidate_distance = total_length(&candidate, matrix);
        audit.candidate_distances.push(candidate_distance);

        let delta = candidate_distance - current_distance;
        if delta < 0.0 {
            current = candidate;
            current_distance = candidate_distance;
            trace!(current_distance, "improving candidate committed");
        } else {
            let probability = (-delta / config.constant_k * temperature).exp();
            if rng.random::<f64>() < probability {
                audit.acceptance_probabilities.push(probability);
                current = candidate;
                current_distance = candidate_distance;
                audit.accepted_distances.push(current_distance);
                trace!(current_distance, probability, "uphill candidate committed");
            }
        }

        if current_distance < best_distance {
            best = current.clone();
            best_distance = current_distance;
            debug!(best_distance, "new best distance");
        }

        counter += 1;
        if counter % config.neighborhood_size == 0 {
            temperature = config.cooling.next(temperature);
            audit.temperatures.push(temperature);
            trace!(temperature, "temperature reduced");
        }
    }

    debug!(best_distance, iterations = counter, "annealing terminated");
    Ok(AnnealOutcome {
        initial,
        initial_distance,
        best,
        best_distance,
        best_penalty: None,
        iterations: counter,
        runtime: start.elapsed(),
        trace: audit,
    })
}

fn run_soft(
    instance: &Instance,
    matrix: &DistanceMatrix,
    initial: Solution,
    config: &SaConfig,
    soft: &SoftParams,
    rng: &mut StdRng,
) -> Result<AnnealOutcome, SolverError> {
    let start = Instant::now();
    let policy = SoftWindows::new(instance, matrix);

    let initial_distance = total_length(&initial, matrix);
    let initial_penalty = solution_penalty(
        &initial,
        instance,
        matrix,
        soft.early_weight,
        soft.late_weight,
    );

    let mut current = initial.clone();
    let mut current_distance = initial_distance;
    let mut current_penalty = initial_penalty;
    let mut best = initial.clone();
    let mut best_distance = initial_distance;
    let mut best_penalty = initial_penalty;

    // Soft regime: the configured value is the absolute starting
    // temperature.
    let mut temperature = config.initial_temperature;
    let mut counter = 0usize;
    let mut audit = AnnealTrace::default();

    debug!(
        initial_distance,
        initial_penalty,
        temperature,
        operator = %config.operator,
        "entering soft-window annealing"
    );

    while temperature > config.final_temperature {
        let candidate = config.operator.apply(&current, matrix, &policy, rng);
        let candidate_distance = total_length(&candidate, matrix);
        let candidate_penalty = solution_penalty(
            &candidate,
            instance,
            matrix,
            soft.early_weight,
            soft.late_weight,
        );
        audit.candidate_distances.push(candidate_distance);

        let delta = candidate_distance - current_distance;
        let under_ceiling = candidate_penalty < soft.penalty_ceiling;

        if delta < 0.0 && under_ceiling {
            current = candidate;
            current_distance = candidate_distance;
            current_penalty = candidate_penalty;
            trace!(current_distance, current_penalty, "improving candidate committed");
        } else if under_ceiling {
            let probability = (-delta / config.constant_k * temperature).exp();
            if rng.random::<f64>() < probability {
                audit.acceptance_probabilities.push(probability);
                current = candidate;
                current_distance = candidate_distance;
                current_penalty = candidate_penalty;
                audit.accepted_distances.push(current_distance);
                trace!(current_distance, probability, "uphill candidate committed");
            }
        }

        if current_distance < best_distance && current_penalty < soft.penalty_ceiling {
            best = current.clone();
            best_distance = current_distance;
            best_penalty = current_penalty;
            debug!(best_distance, best_penalty, "new best distance");
        }

        counter += 1;
        if counter % config.neighborhood_size == 0 {
            temperature = config.cooling.next(temperature);
            audit.temperatures.push(temperature);
            trace!(temperature, "temperature reduced");
        }
    }

    debug!(
        best_distance,
        best_penalty,
        iterations = counter,
        "annealing terminated"
    );
    Ok(AnnealOutcome {
        initial,
        initial_distance,
        best,
        best_distance,
        best_penalty: Some(best_penalty),
        iterations: counter,
        runtime: start.elapsed(),
        trace: audit,
    })
}
