//! Glance - a translucent always-on-top overlay charting CPU load, memory use
//! and network receive rate as scrolling strip charts.

pub mod canvas;
pub mod chart;
pub mod config;
pub mod metrics;
pub mod overlay;
pub mod poll;
pub mod scale;

pub use canvas::{PlotCanvas, SegmentId};
pub use chart::{Canvas, Point, StripChart};
pub use metrics::{CpuReading, MemoryReading, MetricsError, MetricsSource, SysinfoSource};
pub use overlay::Overlay;
pub use poll::{Control, PollLoop, Shutdown};
pub use scale::{NetworkSample, NetworkScaleState};
