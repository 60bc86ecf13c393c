//! Fixed-size Conway's Game of Life simulation core.
//!
//! [`Grid`] holds the cell field and computes one B3/S23 generation at a
//! time against a consistent snapshot; [`SimulationController`] owns a grid,
//! schedules generations on a configurable interval and pauses the run when
//! the configuration repeats or dies out. Presentation layers poll the grid
//! read-only and feed commands through the controller.
//!
//! # Example
//!
//! ```
//! use life_core::{SimulationConfig, SimulationController, TickOutcome};
//!
//! let mut controller = SimulationController::new(SimulationConfig::default())?;
//! // A lone cell starves: the first generation ends the run.
//! controller.toggle_cell(10, 10);
//! controller.start();
//! assert!(matches!(
//!     controller.advance_generation(),
//!     TickOutcome::Halted(_)
//! ));
//! # Ok::<(), life_core::ConfigError>(())
//! ```

pub mod config;
pub mod controller;
pub mod grid;
pub mod patterns;

pub use config::{ConfigError, MAX_STEP_INTERVAL_SECS, MIN_STEP_INTERVAL_SECS, SimulationConfig};
pub use controller::{HaltReason, SimulationController, TickOutcome};
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern};
