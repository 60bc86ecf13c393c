// ui.rs - Control panel and grid painting

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use life_core::{MAX_STEP_INTERVAL_SECS, MIN_STEP_INTERVAL_SECS, PATTERNS};

use crate::LifeApp;

const CELL_SIZE: f32 = 15.0;
const CELL_SPACING: f32 = 0.5;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The controller decides whether a generation is actually due.
        if self.controller.poll(Instant::now()) {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.controller.is_running() {
                    "⏸ Pause"
                } else {
                    "▶ Start"
                };
                if ui.button(button_text).clicked() {
                    self.controller.toggle_simulation();
                }

                if ui.button("⏭ Step").clicked() {
                    self.controller.step_once();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.controller.pause();
                    self.controller.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.controller.pause();
                    self.controller.randomize_grid();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.controller.pause();
                    self.controller.apply_pattern(&PATTERNS[self.selected_pattern]);
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.controller.generation()));
            });

            ui.separator();

            // Speed and colors
            ui.horizontal(|ui| {
                ui.label("Interval:");
                let mut interval = self.controller.step_interval().as_secs_f32();
                if ui
                    .add(
                        egui::Slider::new(
                            &mut interval,
                            MIN_STEP_INTERVAL_SECS..=MAX_STEP_INTERVAL_SECS,
                        )
                        .suffix(" s"),
                    )
                    .changed()
                {
                    self.controller.set_speed(interval);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            match self.controller.last_halt() {
                Some(reason) => {
                    ui.label(format!("Simulation stopped: {reason}."));
                }
                None => {
                    ui.label("Click cells to toggle them while paused. Start runs until the grid dies out or repeats.");
                }
            }

            ui.separator();

            self.draw_grid(ui);

            ui.separator();

            // Population statistics
            let alive = self.controller.grid().count_alive();
            let total = self.controller.grid().width() * self.controller.grid().height();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {alive}"));
                ui.label(format!("Dead cells: {}", total - alive));
                ui.label(format!(
                    "Population: {:.1}%",
                    (alive as f32 / total as f32) * 100.0
                ));
            });
        });

        // Keep frames coming while a run is waiting on its next deadline.
        if self.controller.is_running() {
            ctx.request_repaint();
        }
    }
}

impl LifeApp {
    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let width = self.controller.grid().width();
        let height = self.controller.grid().height();
        let pitch = CELL_SIZE + CELL_SPACING;

        let start_pos = ui.cursor().min;
        let total_size = Vec2::new(
            pitch * width as f32 - CELL_SPACING,
            pitch * height as f32 - CELL_SPACING,
        );
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

        painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

        for y in 0..height {
            for x in 0..width {
                let rect = Rect::from_min_size(
                    egui::pos2(
                        start_pos.x + x as f32 * pitch,
                        start_pos.y + y as f32 * pitch,
                    ),
                    Vec2::splat(CELL_SIZE),
                );
                let cell_color = if self.controller.grid().get(x, y) {
                    self.live_color
                } else {
                    self.dead_color
                };
                painter.rect_filled(rect, 1.0, cell_color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }

        // Map the click to a cell; the controller rejects edits mid-run.
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let col = ((pos.x - start_pos.x) / pitch).floor();
                let row = ((pos.y - start_pos.y) / pitch).floor();
                if col >= 0.0 && row >= 0.0 {
                    let (x, y) = (col as usize, row as usize);
                    if x < width && y < height {
                        self.controller.toggle_cell(x, y);
                    }
                }
            }
        }
    }
}
