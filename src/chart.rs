//! Fixed-width scrolling line graph.

use crate::config::Geometry;
use egui::Color32;
use std::collections::VecDeque;

/// A point in chart units, origin at the bottom-left corner.
pub type Point = [f64; 2];

/// A drawing surface that owns line segments on behalf of a [`StripChart`].
///
/// Handles are opaque to the chart: it only stores them and hands them back
/// for deletion.
pub trait Canvas {
    type Handle;

    fn draw_segment(&mut self, from: Point, to: Point) -> Self::Handle;
    fn delete_segment(&mut self, handle: Self::Handle);
    /// Moves every live segment horizontally by `dx`.
    fn shift(&mut self, dx: f64);
}

/// A strip chart: each sample adds a segment on the right, and once the
/// drawn width passes the chart width the oldest segment is dropped and the
/// rest slide left by one step.
pub struct StripChart<C: Canvas> {
    label: String,
    text: String,
    color: Color32,
    geometry: Geometry,
    cursor: f64,
    last: Option<Point>,
    segments: VecDeque<C::Handle>,
    canvas: C,
}

impl<C: Canvas> StripChart<C> {
    pub fn new(label: impl Into<String>, color: Color32, geometry: Geometry, canvas: C) -> Self {
        let label = label.into();
        Self {
            text: label.clone(),
            label,
            color,
            geometry,
            cursor: 0.0,
            last: None,
            segments: VecDeque::new(),
            canvas,
        }
    }

    /// Plots `value`, a percentage of the chart height.
    ///
    /// The very first sample only seeds the line. Once the cursor has run past
    /// the chart width it stays put and the surface scrolls instead.
    pub fn update(&mut self, value: f64) {
        let Geometry { width, height, step } = self.geometry;
        let point = [self.cursor, value * height / 100.0];

        if let Some(last) = self.last {
            let handle = self.canvas.draw_segment(last, point);
            self.segments.push_back(handle);
        }
        self.last = Some(point);

        if self.cursor > width {
            if let Some(oldest) = self.segments.pop_front() {
                self.canvas.delete_segment(oldest);
            }
            self.canvas.shift(-step);
            if let Some(last) = self.last.as_mut() {
                last[0] -= step;
            }
        } else {
            self.cursor += step;
        }
    }

    pub fn update_text(&mut self, text: impl Into<String>) { self.text = text.into(); }

    pub fn label(&self) -> &str { &self.label }
    pub fn text(&self) -> &str { &self.text }
    pub fn color(&self) -> Color32 { self.color }
    pub fn geometry(&self) -> Geometry { self.geometry }
    pub fn cursor(&self) -> f64 { self.cursor }
    /// Number of live segments.
    pub fn len(&self) -> usize { self.segments.len() }
    pub fn is_empty(&self) -> bool { self.segments.is_empty() }
    pub fn canvas(&self) -> &C { &self.canvas }
}
