// sim.rs - Fixed-timestep gate for the simulation loop

use std::time::{Duration, Instant};

/// True once at least one step interval (1/speed seconds) has elapsed
/// since the last step. Speeds below 1 step/sec are treated as 1.
pub fn should_step(last_step: Instant, now: Instant, speed: f32) -> bool {
    let interval = Duration::from_secs_f32(1.0 / speed.max(1.0));
    now.saturating_duration_since(last_step) >= interval
}

/// Tracks when the last step ran. One `tick` per frame; it fires at most
/// once, and firing resets the clock to `now`, so elapsed time beyond a
/// single interval is discarded rather than replayed as extra steps.
pub struct StepClock {
    last_step: Instant,
}

impl StepClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self { last_step: now }
    }

    /// Returns true if a step is due, resetting the clock when it is
    pub fn tick(&mut self, now: Instant, speed: f32) -> bool {
        if should_step(self.last_step, now, speed) {
            self.last_step = now;
            true
        } else {
            false
        }
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new()
    }
}
