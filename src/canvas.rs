//! Retained segment store, drawn with `egui_plot`.

use crate::chart::{Canvas, Point};
use crate::config::{Geometry, GRAPH_BACKGROUND};
use egui::Color32;
use egui_plot::{Line, Plot, PlotBounds, PlotPoints};
use std::collections::BTreeMap;

/// Opaque handle to one drawn segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SegmentId(u64);

/// Segments are stored relative to an accumulated horizontal offset, so a
/// shift is a single addition.
#[derive(Default, Clone, Debug)]
pub struct PlotCanvas {
    next_id: u64,
    offset: f64,
    segments: BTreeMap<SegmentId, [Point; 2]>,
}

impl PlotCanvas {
    pub fn new() -> Self { Self::default() }

    /// Live segments in draw order, in surface coordinates.
    pub fn segments(&self) -> impl Iterator<Item = [Point; 2]> + '_ {
        let dx = self.offset;
        self.segments.values().map(move |[a, b]| [[a[0] + dx, a[1]], [b[0] + dx, b[1]]])
    }

    pub fn len(&self) -> usize { self.segments.len() }
    pub fn is_empty(&self) -> bool { self.segments.is_empty() }

    /// Draws the surface as a fixed, non-interactive plot of exactly
    /// `geometry.width` x `geometry.height`.
    pub fn show(&self, ui: &mut egui::Ui, id: &str, color: Color32, geometry: Geometry) {
        let Geometry { width, height, .. } = geometry;
        egui::Frame::none().fill(GRAPH_BACKGROUND).show(ui, |ui| {
            Plot::new(id)
                .width(width as f32)
                .height(height as f32)
                .show_axes(false)
                .show_grid(false)
                .show_background(false)
                .show_x(false)
                .show_y(false)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .allow_double_click_reset(false)
                .show(ui, |plot_ui| {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max([0.0, 0.0], [width, height]));
                    for [a, b] in self.segments() {
                        plot_ui.line(Line::new(PlotPoints::from(vec![a, b])).color(color).width(1.0));
                    }
                });
        });
    }
}

impl Canvas for PlotCanvas {
    type Handle = SegmentId;

    fn draw_segment(&mut self, from: Point, to: Point) -> SegmentId {
        let id = SegmentId(self.next_id);
        self.next_id += 1;
        let dx = self.offset;
        self.segments.insert(id, [[from[0] - dx, from[1]], [to[0] - dx, to[1]]]);
        id
    }

    fn delete_segment(&mut self, handle: SegmentId) { self.segments.remove(&handle); }

    fn shift(&mut self, dx: f64) { self.offset += dx; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_moves_existing_segments_only() {
        let mut canvas = PlotCanvas::new();
        canvas.draw_segment([0.0, 1.0], [5.0, 2.0]);
        canvas.shift(-5.0);
        canvas.draw_segment([0.0, 2.0], [5.0, 3.0]);

        let segs: Vec<_> = canvas.segments().collect();
        assert_eq!(segs, vec![[[-5.0, 1.0], [0.0, 2.0]], [[0.0, 2.0], [5.0, 3.0]]]);
    }

    #[test]
    fn delete_removes_by_handle() {
        let mut canvas = PlotCanvas::new();
        let a = canvas.draw_segment([0.0, 0.0], [1.0, 1.0]);
        let b = canvas.draw_segment([1.0, 1.0], [2.0, 2.0]);
        assert_ne!(a, b);

        canvas.delete_segment(a);
        assert_eq!(canvas.len(), 1);
        assert_eq!(canvas.segments().next(), Some([[1.0, 1.0], [2.0, 2.0]]));

        // deleting twice is harmless.
        canvas.delete_segment(a);
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn segments_keep_draw_order() {
        let mut canvas = PlotCanvas::new();
        for i in 0..20 {
            let x = i as f64;
            canvas.draw_segment([x, 0.0], [x + 1.0, 0.0]);
        }
        let starts: Vec<f64> = canvas.segments().map(|[a, _]| a[0]).collect();
        assert_eq!(starts, (0..20).map(|i| i as f64).collect::<Vec<_>>());
    }
}
