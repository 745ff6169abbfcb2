// settings.rs - View configuration shared by the camera, renderer and
// settings window

use egui::{Color32, Vec2};

/// Unscaled edge length of one cell, in points
pub const CELL_SIZE: f32 = 32.0;

/// Scale change per scroll-wheel unit
pub const ZOOM_SPEED: f32 = 0.25;

/// Scroll zoom range; wider than the slider so the wheel can zoom out
/// over large grids
pub const ZOOM_RANGE: std::ops::RangeInclusive<f32> = 0.01..=100.0;

/// Scale slider range in the settings window
pub const SCALE_SLIDER_RANGE: std::ops::RangeInclusive<f32> = 0.01..=5.0;

/// Ant speed slider range, steps per second
pub const SPEED_RANGE: std::ops::RangeInclusive<f32> = 1.0..=1000.0;

/// Mutable view state. Passed explicitly to whoever needs it; there is
/// no global settings object.
pub struct ViewSettings {
    /// Zoom factor applied to [`CELL_SIZE`]
    pub scale: f32,
    /// Grid-line color drawn over every cell
    pub grid_color: Color32,
    /// Camera pan, in screen points
    pub camera_offset: Vec2,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            scale: 2.0,
            // Faint white grid lines (12.5% alpha)
            grid_color: Color32::from_rgba_unmultiplied(255, 255, 255, 32),
            camera_offset: Vec2::ZERO,
        }
    }
}
