// config.rs - Construction-time simulation settings

use thiserror::Error;

/// Shortest allowed delay between generations, in seconds.
pub const MIN_STEP_INTERVAL_SECS: f32 = 0.01;
/// Longest allowed delay between generations, in seconds.
pub const MAX_STEP_INTERVAL_SECS: f32 = 1.0;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("step interval must be a positive number of seconds, got {0}")]
    InvalidInterval(f32),
}

/// Settings fixed when the simulation is built. None of these change at
/// runtime; the step interval is later adjusted through
/// [`SimulationController::set_speed`](crate::SimulationController::set_speed).
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    /// Initial delay between generations, clamped into the allowed range.
    pub step_interval_secs: f32,
    /// Per-cell alive probability used by randomize.
    pub fill_probability: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            step_interval_secs: 0.1,
            fill_probability: 0.5,
        }
    }
}
