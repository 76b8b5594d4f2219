use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::TemperatureInterval;

use crate::models::thermal::cooler::core::ConfigurationError;

/// Errors that can occur while sizing the Peltier drive current.
#[derive(Debug, Error)]
pub enum SizingError {
    /// The base configuration is invalid.
    #[error("invalid base configuration")]
    Configuration(#[from] ConfigurationError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best temperature residual achieved.
        ///
        /// This is the smallest absolute difference between the final
        /// monitored temperature and the goal encountered during iteration.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
