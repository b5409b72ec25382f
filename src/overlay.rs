//! The overlay window: three stacked charts and an exit button.

use crate::config::{EXIT_FONT_SIZE, LABEL_FONT_SIZE, WINDOW_ALPHA, WINDOW_SIZE, WINDOW_TITLE};
use crate::metrics::MetricsSource;
use crate::poll::{Control, PollLoop, Shutdown};
use egui::{pos2, Color32, FontId, Id, Pos2, RichText, Sense, Vec2, ViewportCommand};
use std::time::Instant;

/// Window descriptor: borderless, always on top, see-through, fixed size.
pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false)
            .with_decorations(false)
            .with_always_on_top()
            .with_transparent(true)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    }
}

/// Top-right corner of the screen, pushed down by the window's own height.
pub fn placement(screen: Vec2, window: Vec2) -> Pos2 { pos2((screen.x - window.x).max(0.0), window.y) }

pub struct Overlay<S> {
    poll: PollLoop<S>,
    placed: bool,
    exit_pressed: bool,
}

impl<S: MetricsSource> Overlay<S> {
    pub fn new(poll: PollLoop<S>) -> Self { Self { poll, placed: false, exit_pressed: false } }

    fn place(&mut self, ctx: &egui::Context) {
        let (screen, outer) = ctx.input(|i| (i.viewport().monitor_size, i.viewport().outer_rect));
        let (Some(screen), Some(outer)) = (screen, outer) else { return };
        let pos = placement(screen, outer.size());
        tracing::debug!(x = pos.x, y = pos.y, "placing overlay");
        ctx.send_viewport_cmd(ViewportCommand::OuterPosition(pos));
        self.placed = true;
    }

    fn panels(&mut self, ui: &mut egui::Ui) {
        for chart in self.poll.charts() {
            ui.label(RichText::new(chart.text()).font(FontId::proportional(LABEL_FONT_SIZE)));
            chart.canvas().show(ui, chart.label(), chart.color(), chart.geometry());
            ui.add_space(2.0);
        }
        let exit = egui::Button::new(RichText::new("Exit").font(FontId::proportional(EXIT_FONT_SIZE)));
        if ui.add(exit).clicked() {
            self.exit_pressed = true;
            ui.ctx().request_repaint();
        }
    }
}

impl<S: MetricsSource> eframe::App for Overlay<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.placed { self.place(ctx); }

        let shutdown = if self.exit_pressed {
            Some(Shutdown::ExitPressed)
        } else if ctx.input(|i| i.viewport().close_requested()) {
            Some(Shutdown::WindowClosed)
        } else {
            None
        };

        match self.poll.step(Instant::now(), shutdown) {
            Ok(Control::Continue { next_in }) => ctx.request_repaint_after(next_in),
            Ok(Control::Stop) => {
                ctx.send_viewport_cmd(ViewportCommand::Close);
                return;
            }
            Err(err) => {
                tracing::error!(error = %err, "metric read failed, exiting");
                std::process::exit(1);
            }
        }

        let alpha = (WINDOW_ALPHA * 255.0).round() as u8;
        let frame = egui::Frame::none().fill(Color32::from_black_alpha(alpha)).inner_margin(4.0);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            // dragging anywhere that isn't a widget moves the window.
            let drag = ui.interact(ui.max_rect(), Id::new("overlay_drag"), Sense::drag());
            if drag.drag_started() { ctx.send_viewport_cmd(ViewportCommand::StartDrag); }
            ui.spacing_mut().item_spacing.y = 1.0;
            self.panels(ui);
        });
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] { egui::Rgba::TRANSPARENT.to_array() }
}
