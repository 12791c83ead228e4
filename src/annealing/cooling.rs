//! Cooling schedules.

use crate::error::SolverError;

/// The rule by which the annealing temperature decreases.
///
/// Pluggable at configuration time; geometric cooling is the one schedule
/// the solver ships. Applied once per `neighborhood_size` iterations, not
/// once per improving move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoolingSchedule {
    /// Geometric cooling: `T ← alpha * T` with `alpha` in (0, 1).
    Geometric {
        /// Cooling factor. Higher means slower cooling.
        alpha: f64,
    },
}

impl CoolingSchedule {
    /// Resolves a configuration label into a schedule.
    ///
    /// The only accepted label is `"geometric"`; anything else is a
    /// configuration error naming the allowed values.
    pub fn from_label(label: &str, alpha: f64) -> Result<Self, SolverError> {
        match label {
            "geometric" => {
                let schedule = CoolingSchedule::Geometric { alpha };
                schedule.validate()?;
                Ok(schedule)
            }
            other => Err(SolverError::InvalidConfig(format!(
                "unknown cooling schedule '{other}': expected 'geometric'"
            ))),
        }
    }

    /// The label used in configuration.
    pub fn label(&self) -> &'static str {
        match self {
            CoolingSchedule::Geometric { .. } => "geometric",
        }
    }

    /// Computes the temperature after one cooling step.
    pub fn next(&self, temperature: f64) -> f64 {
        match self {
            CoolingSchedule::Geometric { alpha } => temperature * alpha,
        }
    }

    /// Validates the schedule parameters.
    pub fn validate(&self) -> Result<(), SolverError> {
        match self {
            CoolingSchedule::Geometric { alpha } => {
                if !(*alpha > 0.0 && *alpha < 1.0) {
                    return Err(SolverError::InvalidConfig(format!(
                        "geometric alpha must be in (0, 1), got {alpha}"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.9 }
    }
}
