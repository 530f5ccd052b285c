//! Animation clock: tick policy, pause state, playback rate

use hifitime::Duration;
use std::time::Instant;

/// How the per-tick elapsed-time sample is sourced.
///
/// The default is `Measured` (wall-clock delta between ticks), which keeps the
/// simulation speed independent of the frame rate. `Fixed` advances by the same
/// nominal step every tick regardless of real time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickPolicy {
    Measured,
    Fixed(f64),
}

impl Default for TickPolicy {
    fn default() -> Self {
        Self::Measured
    }
}

/// Simulation clock with pause/resume and variable-rate playback
pub struct SimulationClock {
    policy: TickPolicy,
    /// Simulated seconds per real second
    rate: f64,
    paused: bool,
    /// Accumulated simulated time while running
    elapsed: Duration,
    last_instant: Option<Instant>,
}

impl SimulationClock {
    pub fn new(policy: TickPolicy) -> Self {
        Self {
            policy,
            rate: 1.0,
            paused: false,
            elapsed: Duration::ZERO,
            last_instant: None,
        }
    }

    pub fn policy(&self) -> TickPolicy {
        self.policy
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Set playback rate (simulated seconds per real second)
    pub fn set_rate(&mut self, rate: f64) {
        self.rate = rate.clamp(-1e6, 1e6);
    }

    /// Pause simulation; idempotent
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume simulation; idempotent
    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Accumulated simulated time
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.to_seconds()
    }

    /// Produce this tick's simulated dt.
    ///
    /// Returns 0.0 while paused. The measured policy re-arms its reference
    /// instant on every call, so wall time spent paused never leaks into the
    /// first running tick after resume; the very first measured tick is 0.0.
    pub fn tick(&mut self) -> f64 {
        let real_dt = match self.policy {
            TickPolicy::Fixed(step) => step,
            TickPolicy::Measured => {
                let now = Instant::now();
                let dt = self
                    .last_instant
                    .map(|prev| now.duration_since(prev).as_secs_f64())
                    .unwrap_or(0.0);
                self.last_instant = Some(now);
                dt
            }
        };

        if self.paused {
            return 0.0;
        }

        let sim_dt = real_dt * self.rate;
        self.elapsed += Duration::from_seconds(sim_dt);
        sim_dt
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(TickPolicy::default())
    }
}
