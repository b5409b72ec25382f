use eframe::egui;
use glance::{overlay, Overlay, PollLoop, SysinfoSource};
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// ===================== Entry =====================
fn main() -> eframe::Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).with_writer(std::io::stderr).finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("logging disabled: {err}");
    }

    let poll = match PollLoop::new(SysinfoSource::new(), Instant::now()) {
        Ok(poll) => poll,
        Err(err) => {
            tracing::error!(error = %err, "cannot read initial metrics");
            std::process::exit(1);
        }
    };
    tracing::info!(period_ms = poll.period().as_millis() as u64, "starting glance");

    let result = eframe::run_native(
        "Glance",
        overlay::native_options(),
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(Overlay::new(poll)))
        }),
    );
    tracing::info!("glance exited");
    result
}
