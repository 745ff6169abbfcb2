// ui.rs - eframe application: per-frame update, input handling, painting

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2, vec2};

use crate::ant::Ant;
use crate::grid::Grid;
use crate::settings::{
    CELL_SIZE, SCALE_SLIDER_RANGE, SPEED_RANGE, ViewSettings, ZOOM_RANGE, ZOOM_SPEED,
};
use crate::sim::StepClock;

pub struct LangtonApp {
    grid: Grid,
    ant: Ant,
    settings: ViewSettings,
    clock: StepClock,
    is_running: bool,
    steps: u64,
}

impl LangtonApp {
    pub fn new(rows: i32, cols: i32, start_row: i32, start_col: i32) -> Self {
        let mut grid = Grid::new(rows, cols);
        let mut ant = Ant::default();
        ant.place(&mut grid, start_row, start_col);

        Self {
            grid,
            ant,
            settings: ViewSettings::default(),
            clock: StepClock::new(),
            is_running: true,
            steps: 0,
        }
    }

    fn settings_window(&mut self, ctx: &egui::Context) {
        egui::Window::new("Settings").auto_sized().show(ctx, |ui| {
            ui.add(egui::Slider::new(&mut self.settings.scale, SCALE_SLIDER_RANGE).text("Scale"));

            ui.horizontal(|ui| {
                ui.label("Grid color:");
                ui.color_edit_button_srgba(&mut self.settings.grid_color);
            });

            ui.add(
                egui::Slider::new(&mut self.ant.speed, SPEED_RANGE)
                    .suffix(" steps/sec")
                    .text("Ant speed"),
            );

            ui.separator();

            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Run" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.clock = StepClock::new();
                    }
                }
                ui.label(format!("Steps: {}", self.steps));
                ui.label(format!("Marked: {}", self.grid.marked_count()));
            });
        });
    }
}

impl eframe::App for LangtonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.settings_window(ctx);

        if self.is_running && self.clock.tick(Instant::now(), self.ant.speed) {
            match self.ant.step(&mut self.grid) {
                Ok(()) => self.steps += 1,
                Err(err) => {
                    log::warn!("simulation halted after {} steps: {}", self.steps, err);
                    self.is_running = false;
                }
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::from_gray(20)))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

                // Camera pan: drag with the primary button
                if response.dragged_by(egui::PointerButton::Primary) {
                    self.settings.camera_offset += response.drag_delta();
                }

                // Camera zoom: scroll wheel over the grid
                let scroll = ctx.input(|i| i.scroll_delta.y);
                if scroll != 0.0 && response.hovered() {
                    self.settings.scale = (self.settings.scale + scroll * ZOOM_SPEED)
                        .clamp(*ZOOM_RANGE.start(), *ZOOM_RANGE.end());
                }

                paint_grid(&painter, &self.grid, Some(&self.ant), &self.settings);
            });

        // Keep stepping even when no input arrives
        ctx.request_repaint();
    }
}

/// Paint every cell as a filled rect with a grid-line outline, then the
/// ant as a highlighted square on top. Read-only with respect to the
/// simulation.
pub fn paint_grid(painter: &egui::Painter, grid: &Grid, ant: Option<&Ant>, settings: &ViewSettings) {
    let viewport = painter.clip_rect();
    let origin = viewport.min + settings.camera_offset;
    let s = settings.scale * CELL_SIZE;
    let outline = Stroke::new(1.0, settings.grid_color);

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let rect = Rect::from_min_size(
                origin + vec2(col as f32 * s, row as f32 * s),
                Vec2::splat(s),
            );
            if !viewport.intersects(rect) {
                continue;
            }
            let Some(cell) = grid.cell(row, col) else {
                continue;
            };
            painter.rect_filled(rect, 0.0, cell.color());
            painter.rect_stroke(rect, 0.0, outline);
        }
    }

    if let Some(ant) = ant {
        if grid.is_valid(ant.row, ant.col) {
            let rect = Rect::from_min_size(
                origin + vec2(ant.col as f32 * s, ant.row as f32 * s),
                Vec2::splat(s),
            );
            painter.rect_filled(rect, 2.0, ant.color);
        }
    }
}
