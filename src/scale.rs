//! Auto-scaling upper bound for the network chart.

use crate::config::{INITIAL_BANDWIDTH_MB, MEGABYTE};
use std::fmt;

/// Tracks the cumulative receive counter and the chart's normalization bound.
///
/// The bound only ever grows, in whole-MB steps, until it covers the largest
/// per-tick delta seen so far.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkScaleState {
    bound: f64,
    previous: u64,
}

/// One tick's worth of network traffic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetworkSample {
    /// MB received since the previous tick
    pub delta: f64,
    /// bound in effect after this tick's adjustment
    pub bound: f64,
}

impl NetworkScaleState {
    /// Starts from the current cumulative byte counter.
    pub fn new(received: u64) -> Self { Self { bound: INITIAL_BANDWIDTH_MB, previous: received } }

    pub fn bound(&self) -> f64 { self.bound }

    /// Consumes the latest cumulative counter and returns the delta since the
    /// previous one, scaled against the (possibly raised) bound.
    pub fn advance(&mut self, received: u64) -> NetworkSample {
        if received < self.previous {
            tracing::debug!(previous = self.previous, received, "receive counter went backwards");
        }
        let delta = received.saturating_sub(self.previous) as f64 / MEGABYTE;
        self.previous = received;
        let bound = self.ratchet(delta);
        NetworkSample { delta, bound }
    }

    /// Raises the bound one MB at a time until it covers `delta`.
    pub fn ratchet(&mut self, delta: f64) -> f64 {
        while delta > self.bound {
            self.bound += 1.0;
        }
        self.bound
    }
}

impl NetworkSample {
    /// Chart input: the delta as a percentage of the bound.
    pub fn percent(&self) -> f64 { self.delta * 100.0 / self.bound }
}

impl fmt::Display for NetworkSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Network: {:.2}/{:.2} MBs", self.delta, self.bound)
    }
}
