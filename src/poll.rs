//! Fixed-interval driver feeding the three charts.

use crate::canvas::PlotCanvas;
use crate::chart::StripChart;
use crate::config::{Geometry, CPU_COLOR, GRAPH, MEMORY_COLOR, NETWORK_COLOR, POLL_PERIOD};
use crate::metrics::{MetricsError, MetricsSource};
use crate::scale::NetworkScaleState;
use std::time::{Duration, Instant};

/// Why the loop is being asked to stop. Every cause is a normal close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shutdown {
    WindowClosed,
    ExitPressed,
}

/// What the caller should do after a [`PollLoop::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Come back within `next_in`.
    Continue { next_in: Duration },
    Stop,
}

pub struct PollLoop<S> {
    source: S,
    period: Duration,
    next_tick: Instant,
    stopped: bool,
    cpu: StripChart<PlotCanvas>,
    memory: StripChart<PlotCanvas>,
    network: StripChart<PlotCanvas>,
    scale: NetworkScaleState,
}

impl<S: MetricsSource> PollLoop<S> {
    /// Builds the loop with the default geometry and period. The first tick
    /// is due one period after `start`.
    pub fn new(source: S, start: Instant) -> Result<Self, MetricsError> {
        Self::with_timing(source, start, POLL_PERIOD, GRAPH)
    }

    pub fn with_timing(mut source: S, start: Instant, period: Duration, geometry: Geometry) -> Result<Self, MetricsError> {
        let received = source.bytes_received()?;
        Ok(Self {
            source,
            period,
            next_tick: start + period,
            stopped: false,
            cpu: StripChart::new("CPU", CPU_COLOR, geometry, PlotCanvas::new()),
            memory: StripChart::new("Memory", MEMORY_COLOR, geometry, PlotCanvas::new()),
            network: StripChart::new("Network", NETWORK_COLOR, geometry, PlotCanvas::new()),
            scale: NetworkScaleState::new(received),
        })
    }

    /// Advances the loop to `now`. A shutdown stops it for good, with no
    /// further metric reads; otherwise a tick runs if one is due.
    pub fn step(&mut self, now: Instant, shutdown: Option<Shutdown>) -> Result<Control, MetricsError> {
        if let Some(reason) = shutdown {
            if !self.stopped { tracing::info!(?reason, "stopping poll loop"); }
            self.stopped = true;
        }
        if self.stopped { return Ok(Control::Stop); }

        if now >= self.next_tick {
            self.tick()?;
            self.next_tick = now + self.period;
        }
        Ok(Control::Continue { next_in: self.next_tick.saturating_duration_since(now) })
    }

    /// Reads all three metrics once and updates every chart and label.
    pub fn tick(&mut self) -> Result<(), MetricsError> {
        let cpu = self.source.cpu()?;
        self.cpu.update(cpu.usage);
        self.cpu.update_text(cpu.to_string());

        let memory = self.source.memory()?;
        self.memory.update(memory.percent());
        self.memory.update_text(memory.to_string());

        let received = self.source.bytes_received()?;
        let net = self.scale.advance(received);
        self.network.update(net.percent());
        self.network.update_text(net.to_string());

        tracing::debug!(
            cpu = cpu.usage,
            memory = memory.percent(),
            net_mb = net.delta,
            net_bound = net.bound,
            "tick"
        );
        Ok(())
    }

    pub fn cpu(&self) -> &StripChart<PlotCanvas> { &self.cpu }
    pub fn memory(&self) -> &StripChart<PlotCanvas> { &self.memory }
    pub fn network(&self) -> &StripChart<PlotCanvas> { &self.network }
    /// The three charts, top to bottom.
    pub fn charts(&self) -> [&StripChart<PlotCanvas>; 3] { [&self.cpu, &self.memory, &self.network] }
    pub fn scale(&self) -> &NetworkScaleState { &self.scale }
    pub fn period(&self) -> Duration { self.period }
    pub fn is_stopped(&self) -> bool { self.stopped }
    pub fn source(&self) -> &S { &self.source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{CpuReading, MemoryReading};

    /// fixed readings, counting how often it was asked.
    #[derive(Default)]
    struct Fixed {
        reads: usize,
        received: u64,
    }

    impl MetricsSource for Fixed {
        fn cpu(&mut self) -> Result<CpuReading, MetricsError> {
            self.reads += 1;
            Ok(CpuReading { usage: 50.0, frequency_mhz: 2000.0 })
        }
        fn memory(&mut self) -> Result<MemoryReading, MetricsError> {
            Ok(MemoryReading { used: 1 << 30, total: 1 << 32 })
        }
        fn bytes_received(&mut self) -> Result<u64, MetricsError> {
            self.received += 1024 * 1024;
            Ok(self.received)
        }
    }

    struct Broken;

    impl MetricsSource for Broken {
        fn cpu(&mut self) -> Result<CpuReading, MetricsError> { Err(MetricsError::NoCpus) }
        fn memory(&mut self) -> Result<MemoryReading, MetricsError> { Err(MetricsError::NoMemory) }
        fn bytes_received(&mut self) -> Result<u64, MetricsError> { Ok(0) }
    }

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    #[test]
    fn first_tick_waits_one_period() {
        let start = Instant::now();
        let mut poll = PollLoop::new(Fixed::default(), start).unwrap();

        assert_eq!(poll.step(start, None).unwrap(), Control::Continue { next_in: ms(500) });
        assert_eq!(poll.step(start + ms(200), None).unwrap(), Control::Continue { next_in: ms(300) });
        assert_eq!(poll.source().reads, 0);

        assert_eq!(poll.step(start + ms(500), None).unwrap(), Control::Continue { next_in: ms(500) });
        assert_eq!(poll.source().reads, 1);
    }

    #[test]
    fn tick_updates_every_label() {
        let start = Instant::now();
        let mut poll = PollLoop::new(Fixed::default(), start).unwrap();
        poll.tick().unwrap();

        assert_eq!(poll.cpu().text(), "CPU: 50% 1.00 GHz");
        assert_eq!(poll.memory().text(), "Memory: 1.0/4.0 GB (25.0%)");
        assert_eq!(poll.network().text(), "Network: 1.00/2.00 MBs");
    }

    #[test]
    fn labels_before_first_tick_are_chart_names() {
        let poll = PollLoop::new(Fixed::default(), Instant::now()).unwrap();
        let names: Vec<&str> = poll.charts().into_iter().map(|c| c.text()).collect();
        assert_eq!(names, vec!["CPU", "Memory", "Network"]);
    }

    #[test]
    fn shutdown_stops_reads() {
        let start = Instant::now();
        let mut poll = PollLoop::new(Fixed::default(), start).unwrap();
        poll.step(start + ms(500), None).unwrap();
        assert_eq!(poll.source().reads, 1);

        assert_eq!(poll.step(start + ms(1000), Some(Shutdown::ExitPressed)).unwrap(), Control::Stop);
        assert!(poll.is_stopped());
        for i in 2..10 {
            assert_eq!(poll.step(start + ms(500 * i), None).unwrap(), Control::Stop);
        }
        assert_eq!(poll.source().reads, 1);
    }

    #[test]
    fn metric_failure_propagates() {
        let start = Instant::now();
        let mut poll = PollLoop::new(Broken, start).unwrap();
        assert_eq!(poll.step(start + ms(500), None), Err(MetricsError::NoCpus));
    }
}
