// main.rs - egui frontend for the Game of Life simulation core

use eframe::egui;
use egui::Color32;

use life_core::{SimulationConfig, SimulationController};

mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let controller = SimulationController::new(SimulationConfig::default())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(controller))),
    )?;
    Ok(())
}

/// Frontend state: the owned simulation core plus pure presentation knobs.
/// All grid mutation goes through the controller; the panels only read
/// cell state back for drawing.
pub struct LifeApp {
    controller: SimulationController,
    selected_pattern: usize,
    live_color: Color32,
    dead_color: Color32,
}

impl LifeApp {
    pub fn new(controller: SimulationController) -> Self {
        Self {
            controller,
            selected_pattern: 0,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
        }
    }
}
