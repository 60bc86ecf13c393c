// End-to-end controller sessions driven the way a frame loop would drive
// them: repeated polls with monotonically advancing instants.

use std::time::Instant;

use life_core::{HaltReason, PATTERNS, SimulationConfig, SimulationController, TickOutcome};

fn pattern(name: &str) -> &'static life_core::Pattern {
    PATTERNS.iter().find(|p| p.name == name).unwrap()
}

/// Polls until the run stops on its own, failing the test if it outlives
/// `max_ticks` generations.
fn run_to_halt(controller: &mut SimulationController, max_ticks: u64) {
    let mut now = Instant::now();
    while controller.is_running() {
        now += controller.step_interval();
        controller.poll(now);
        assert!(
            controller.generation() <= max_ticks,
            "run did not halt within {max_ticks} generations"
        );
    }
}

#[test]
fn blinker_session_reports_a_cycle_and_pauses() {
    let mut controller = SimulationController::new(SimulationConfig::default()).unwrap();
    controller.apply_pattern(pattern("Blinker"));
    controller.start();
    // Period two: the repeat is caught on the third generation at the latest.
    run_to_halt(&mut controller, 3);
    assert_eq!(controller.last_halt(), Some(HaltReason::Cycle));
    assert!(!controller.is_running());
    assert_eq!(controller.grid().count_alive(), 3);
}

#[test]
fn lone_cell_session_reports_extinction() {
    let mut controller = SimulationController::new(SimulationConfig::default()).unwrap();
    controller.toggle_cell(10, 10);
    controller.start();
    run_to_halt(&mut controller, 1);
    assert_eq!(controller.last_halt(), Some(HaltReason::Extinction));
    assert_eq!(controller.grid().count_alive(), 0);
}

#[test]
fn resetting_the_grid_clears_history_between_sessions() {
    let mut controller = SimulationController::new(SimulationConfig::default()).unwrap();
    controller.apply_pattern(pattern("Blinker"));
    controller.start();
    run_to_halt(&mut controller, 3);
    assert!(controller.last_halt().is_some());

    // Re-seed the exact configuration the finished run already visited.
    // The fresh session must not trip over stale fingerprints.
    controller.randomize_grid();
    controller.apply_pattern(pattern("Blinker"));
    assert_eq!(controller.generation(), 0);
    controller.start();
    assert_eq!(controller.advance_generation(), TickOutcome::Advanced);
    assert_eq!(controller.advance_generation(), TickOutcome::Advanced);
}

#[test]
fn toad_session_is_caught_as_a_cycle_too() {
    let mut controller = SimulationController::new(SimulationConfig::default()).unwrap();
    controller.apply_pattern(pattern("Toad"));
    controller.start();
    run_to_halt(&mut controller, 3);
    assert_eq!(controller.last_halt(), Some(HaltReason::Cycle));
}

#[test]
fn gosper_gun_keeps_running_well_past_its_period() {
    // The gun only repeats once its gliders hit the hard edge and decay;
    // thirty generations in, it must still be producing fresh states.
    let mut controller = SimulationController::new(SimulationConfig::default()).unwrap();
    controller.apply_pattern(pattern("Gosper Glider Gun"));
    controller.start();
    for _ in 0..30 {
        assert_eq!(controller.advance_generation(), TickOutcome::Advanced);
    }
    assert!(controller.is_running());
}
