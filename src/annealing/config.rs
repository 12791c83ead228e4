//! Annealing configuration.

use super::cooling::CoolingSchedule;
use crate::error::SolverError;
use crate::neighborhood::OperatorKind;

/// Configuration for the annealing engines.
///
/// `initial_temperature` is interpreted per regime: the hard engine scales
/// it by the initial distance (a fraction), the soft engine uses it as an
/// absolute starting temperature.
///
/// # Examples
///
/// ```
/// use vrptw_anneal::annealing::{CoolingSchedule, SaConfig};
/// use vrptw_anneal::neighborhood::OperatorKind;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(0.5)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.95 })
///     .with_operator(OperatorKind::Exchange)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Starting temperature (hard: fraction of initial distance,
    /// soft: absolute value).
    pub initial_temperature: f64,

    /// The search stops once the temperature drops to this value or below.
    pub final_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// The `k` constant in the acceptance exponent.
    pub constant_k: f64,

    /// Iterations between cooling steps.
    pub neighborhood_size: usize,

    /// Neighborhood operator invoked each iteration.
    pub operator: OperatorKind,

    /// RNG seed; the whole solve consumes one seeded stream.
    pub seed: u64,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 0.5,
            final_temperature: 0.001,
            cooling: CoolingSchedule::default(),
            constant_k: 0.7,
            neighborhood_size: 5,
            operator: OperatorKind::Relocate,
            seed: 0,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_constant_k(mut self, k: f64) -> Self {
        self.constant_k = k;
        self
    }

    pub fn with_neighborhood_size(mut self, n: usize) -> Self {
        self.neighborhood_size = n;
        self
    }

    pub fn with_operator(mut self, operator: OperatorKind) -> Self {
        self.operator = operator;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration before any search work begins.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.initial_temperature > 0.0) {
            return Err(SolverError::InvalidConfig(
                "initial_temperature must be positive".into(),
            ));
        }
        if !(self.final_temperature > 0.0) {
            return Err(SolverError::InvalidConfig(
                "final_temperature must be positive".into(),
            ));
        }
        if !(self.constant_k > 0.0) {
            return Err(SolverError::InvalidConfig(
                "constant_k must be positive".into(),
            ));
        }
        if self.neighborhood_size == 0 {
            return Err(SolverError::InvalidConfig(
                "neighborhood_size must be at least 1".into(),
            ));
        }
        self.cooling.validate()
    }
}

/// Soft-regime parameters: window-violation weights and the acceptance
/// ceiling a candidate's total penalty must stay below.
#[derive(Debug, Clone)]
pub struct SoftParams {
    /// Weight per time unit of early arrival.
    pub early_weight: f64,

    /// Weight per time unit of late arrival.
    pub late_weight: f64,

    /// A candidate may become current or best only while its total penalty
    /// is strictly below this ceiling. Note the zero default rejects every
    /// candidate.
    pub penalty_ceiling: f64,
}

impl Default for SoftParams {
    fn default() -> Self {
        Self {
            early_weight: 1.0,
            late_weight: 1.0,
            penalty_ceiling: 0.0,
        }
    }
}

impl SoftParams {
    /// Creates validated soft parameters.
    pub fn new(early_weight: f64, late_weight: f64, penalty_ceiling: f64) -> Self {
        Self {
            early_weight,
            late_weight,
            penalty_ceiling,
        }
    }

    /// Validates the parameters.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.early_weight < 0.0 || self.late_weight < 0.0 {
            return Err(SolverError::InvalidConfig(
                "penalty weights must be non-negative".into(),
            ));
        }
        if !self.penalty_ceiling.is_finite() {
            return Err(SolverError::InvalidConfig(
                "penalty_ceiling must be finite".into(),
            ));
        }
        Ok(())
    }
}
