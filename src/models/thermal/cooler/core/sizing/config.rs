use twine_solvers::equation::bisection;
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, TemperatureInterval},
    temperature_interval::kelvin as delta_kelvin,
};

/// Solver configuration for sizing the Peltier drive current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingConfig {
    /// Bracket searched for the per-module drive current.
    pub current_range: [ElectricCurrent; 2],

    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the current search variable.
    pub current_tol: ElectricCurrent,

    /// Absolute tolerance for the temperature residual (achieved - goal).
    pub temperature_tol: TemperatureInterval,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            current_range: [
                ElectricCurrent::new::<ampere>(0.01),
                ElectricCurrent::new::<ampere>(30.0),
            ],
            max_iters: 100,
            current_tol: ElectricCurrent::new::<ampere>(1e-9),
            temperature_tol: TemperatureInterval::new::<delta_kelvin>(1e-6),
        }
    }
}

impl SizingConfig {
    /// Bracket in amperes.
    pub(super) fn bracket(&self) -> [f64; 2] {
        self.current_range.map(|current| current.get::<ampere>())
    }

    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.current_tol.get::<ampere>(),
            x_rel_tol: 0.0,
            residual_tol: self.temperature_tol.get::<delta_kelvin>(),
        }
    }
}
