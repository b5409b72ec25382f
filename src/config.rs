//! Fixed tunables. Nothing here is read at runtime.

use egui::Color32;
use std::time::Duration;

/// Size of one strip chart, in chart units (one unit = one logical pixel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub width: f64,
    pub height: f64,
    /// horizontal distance between two consecutive samples
    pub step: f64,
}

pub const GRAPH: Geometry = Geometry { width: 160.0, height: 40.0, step: 5.0 };

// ===================== Sampling =====================
pub const POLL_PERIOD: Duration = Duration::from_millis(500);

pub const MEGABYTE: f64 = 1024.0 * 1024.0;
pub const GIBIBYTE: f64 = MEGABYTE * 1024.0;

/// Starting network scale, in MB per poll period.
pub const INITIAL_BANDWIDTH_MB: f64 = 2.0;

// ===================== Look =====================
pub const CPU_COLOR: Color32 = Color32::from_rgb(30, 60, 220);      // blue
pub const MEMORY_COLOR: Color32 = Color32::from_rgb(150, 60, 180);  // purple
pub const NETWORK_COLOR: Color32 = Color32::from_rgb(20, 150, 60);  // green
pub const GRAPH_BACKGROUND: Color32 = Color32::WHITE;

/// Opacity of the whole overlay.
pub const WINDOW_ALPHA: f32 = 0.4;
pub const WINDOW_TITLE: &str = "Monitoring";
pub const WINDOW_SIZE: [f32; 2] = [172.0, 236.0];

pub const LABEL_FONT_SIZE: f32 = 11.0;
pub const EXIT_FONT_SIZE: f32 = 13.0;
