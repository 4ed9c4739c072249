//! Frame pacing
//!
//! Ticks happen no more often than every `FRAME_INTERVAL_MS`. The thread
//! sleeps until the deadline instead of spinning.

use std::time::{Duration, Instant};

use crate::consts::{FRAME_INTERVAL_MS, MAX_DT};

/// Convert an elapsed wall-clock interval into a simulation delta (seconds),
/// capped at `MAX_DT`
#[inline]
pub fn clamp_delta(elapsed: Duration) -> f32 {
    elapsed.as_secs_f32().min(MAX_DT)
}

/// Tracks the time of the last tick on the monotonic clock
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_tick: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(last_tick: Instant) -> Self {
        Self { last_tick }
    }

    pub fn last_tick(&self) -> Instant {
        self.last_tick
    }

    /// Earliest instant the next tick may run
    pub fn next_deadline(&self) -> Instant {
        self.last_tick + Duration::from_millis(FRAME_INTERVAL_MS)
    }

    /// Sleep until the next deadline, then tick. Returns the clamped delta.
    pub fn wait_and_tick(&mut self) -> f32 {
        let deadline = self.next_deadline();
        let now = Instant::now();
        if now < deadline {
            std::thread::sleep(deadline - now);
        }
        // sleep may wake marginally early on some platforms
        self.tick_at(Instant::now().max(deadline))
    }

    /// Record a tick at `now` and return the clamped delta since the last one
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = clamp_delta(now.saturating_duration_since(self.last_tick));
        self.last_tick = now;
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_delta() {
        assert!((clamp_delta(Duration::from_millis(16)) - 0.016).abs() < 1e-6);
        assert_eq!(clamp_delta(Duration::from_millis(50)), MAX_DT);
        assert_eq!(clamp_delta(Duration::from_secs(3)), MAX_DT);
        assert_eq!(clamp_delta(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_tick_at_updates_last_tick() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let later = start + Duration::from_millis(20);
        let dt = clock.tick_at(later);
        assert!((dt - 0.020).abs() < 1e-6);
        assert_eq!(clock.last_tick(), later);
    }

    #[test]
    fn test_stall_is_clamped() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        assert_eq!(clock.tick_at(start + Duration::from_millis(500)), MAX_DT);
    }

    #[test]
    fn test_wait_and_tick_respects_interval() {
        let mut clock = FrameClock::new();
        let before = clock.last_tick();
        let dt = clock.wait_and_tick();
        assert!(clock.last_tick() >= before + Duration::from_millis(FRAME_INTERVAL_MS));
        assert!(dt >= 0.016 - 1e-6);
        assert!(dt <= MAX_DT);
    }
}
