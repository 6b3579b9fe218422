use std::time::{Duration, Instant};

pub const DEFAULT_TICK_RATE_HZ: u32 = 60;

/// Fixed-rate tick scheduler.
///
/// The window loop sleeps until `next_tick()` and asks `poll` whether a frame is due. When the
/// loop falls more than a whole interval behind it resyncs instead of running a burst of
/// catch-up frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    interval: Duration,
    next_tick: Instant,
}

impl FrameClock {
    pub fn new(rate_hz: u32) -> Self {
        Self::starting_at(rate_hz, Instant::now())
    }

    pub fn starting_at(rate_hz: u32, now: Instant) -> Self {
        let interval = Duration::from_secs_f64(1.0 / rate_hz.max(1) as f64);
        Self {
            interval,
            next_tick: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_tick(&self) -> Instant {
        self.next_tick
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }
        self.next_tick += self.interval;
        if self.next_tick <= now {
            self.next_tick = now + self.interval;
        }
        true
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE_HZ)
    }
}
