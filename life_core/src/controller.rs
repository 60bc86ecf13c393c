// controller.rs - Run state, tick scheduling and termination detection

use std::collections::HashSet;
use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{
    ConfigError, MAX_STEP_INTERVAL_SECS, MIN_STEP_INTERVAL_SECS, SimulationConfig,
};
use crate::grid::Grid;
use crate::patterns::Pattern;

/// Why a run stopped on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// The grid reached a configuration already seen earlier in the run.
    /// A still life counts too: it is a cycle of length one.
    Cycle,
    /// Every cell died.
    Extinction,
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HaltReason::Cycle => "cycle detected",
            HaltReason::Extinction => "extinction",
        })
    }
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced,
    Halted(HaltReason),
}

/// Owns the grid and drives it generation by generation.
///
/// The controller is either paused or running. While running it keeps the
/// `Instant` at which the next generation is due; the host calls
/// [`poll`](Self::poll) every frame and a generation is advanced exactly
/// when that deadline passes. Each advanced generation is fingerprinted and
/// checked against the configurations already seen this run; a repeat or an
/// empty grid pauses the controller and records the reason.
///
/// Everything here runs on the caller's thread. There is exactly one
/// writer, so no locking.
pub struct SimulationController {
    grid: Grid,
    running: bool,
    step_interval: Duration,
    /// Due time of the next generation; armed only while running.
    next_step_at: Option<Instant>,
    /// Fingerprints seen during the active run.
    seen: HashSet<u64>,
    generation: u64,
    last_halt: Option<HaltReason>,
    fill_probability: f64,
    rng: StdRng,
}

impl SimulationController {
    /// Builds a paused controller over an all-dead grid. Fails on a zero
    /// grid dimension or a non-positive step interval; an interval outside
    /// the allowed range is clamped, not rejected.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        let grid = Grid::new(config.width, config.height)?;
        let secs = config.step_interval_secs;
        if !secs.is_finite() || secs <= 0.0 {
            return Err(ConfigError::InvalidInterval(secs));
        }
        Ok(Self {
            grid,
            running: false,
            step_interval: Duration::from_secs_f32(
                secs.clamp(MIN_STEP_INTERVAL_SECS, MAX_STEP_INTERVAL_SECS),
            ),
            next_step_at: None,
            seen: HashSet::new(),
            generation: 0,
            last_halt: None,
            fill_probability: config.fill_probability.clamp(0.0, 1.0),
            rng: StdRng::from_entropy(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    /// Why the previous run stopped, until the grid is reset or a new run
    /// starts.
    pub fn last_halt(&self) -> Option<HaltReason> {
        self.last_halt
    }

    /// Begins a run. The fingerprint history always starts fresh, and the
    /// first generation is due immediately on the next poll.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.seen.clear();
        self.last_halt = None;
        self.next_step_at = None;
    }

    /// Stops the run and cancels the pending tick.
    pub fn pause(&mut self) {
        self.running = false;
        self.next_step_at = None;
    }

    pub fn toggle_simulation(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Frame-loop entry point. Advances one generation when the deadline
    /// has passed and re-arms it; returns whether anything changed so the
    /// host knows to repaint. Does nothing while paused.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        if let Some(due) = self.next_step_at {
            if now < due {
                return false;
            }
        }
        if let TickOutcome::Advanced = self.advance_generation() {
            self.next_step_at = Some(now + self.step_interval);
        }
        true
    }

    /// One tick: step the grid, then decide whether the run goes on.
    ///
    /// The cycle check runs before the extinction check, so a repeat of an
    /// already-seen all-dead state still reports as a cycle, while an
    /// all-dead state reached for the first time reports as extinction.
    pub fn advance_generation(&mut self) -> TickOutcome {
        self.grid.step();
        self.generation += 1;
        let fingerprint = self.grid.fingerprint();
        if self.seen.contains(&fingerprint) {
            return self.halt(HaltReason::Cycle);
        }
        if self.grid.count_alive() == 0 {
            return self.halt(HaltReason::Extinction);
        }
        self.seen.insert(fingerprint);
        TickOutcome::Advanced
    }

    fn halt(&mut self, reason: HaltReason) -> TickOutcome {
        info!("simulation stopped at generation {}: {reason}", self.generation);
        self.running = false;
        self.next_step_at = None;
        self.last_halt = Some(reason);
        TickOutcome::Halted(reason)
    }

    /// Updates the delay between generations, clamped to the allowed
    /// range. An already armed deadline keeps its old due time; the new
    /// interval applies from the next re-arm.
    pub fn set_speed(&mut self, interval_secs: f32) {
        if !interval_secs.is_finite() {
            debug!("ignoring non-finite step interval {interval_secs}");
            return;
        }
        self.step_interval = Duration::from_secs_f32(
            interval_secs.clamp(MIN_STEP_INTERVAL_SECS, MAX_STEP_INTERVAL_SECS),
        );
    }

    /// Flips one cell. Manual edits are only allowed while paused; during
    /// a run the call is ignored and returns `false`.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> bool {
        if self.running {
            debug!("ignoring cell toggle at ({x}, {y}) while running");
            return false;
        }
        let alive = self.grid.get(x, y);
        self.grid.set(x, y, !alive);
        true
    }

    /// Refills the grid with the configured alive probability. Allowed in
    /// any state; the fingerprint history is reset so the next run starts
    /// clean.
    pub fn randomize_grid(&mut self) {
        self.grid.randomize(&mut self.rng, self.fill_probability);
        self.reset_history();
    }

    /// Kills every cell. Allowed in any state; resets the history like
    /// randomize does.
    pub fn clear_grid(&mut self) {
        self.grid.clear();
        self.reset_history();
    }

    /// Advances a single generation while paused. The fingerprint history
    /// only tracks active runs, so manual stepping does not touch it.
    pub fn step_once(&mut self) {
        if self.running {
            return;
        }
        self.grid.step();
        self.generation += 1;
    }

    /// Replaces the grid contents with a preset pattern; paused only.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        if self.running {
            return;
        }
        pattern.stamp(&mut self.grid);
        self.reset_history();
    }

    fn reset_history(&mut self) {
        self.seen.clear();
        self.generation = 0;
        self.last_halt = None;
    }
}
