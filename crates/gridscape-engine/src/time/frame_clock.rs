use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds (clamped).
    pub dt: f64,

    /// Seconds since the clock was created. Never decreases.
    pub elapsed: f64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped to avoid pathological values when the application is
/// paused by the debugger, minimized, or stalls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps of 0.1 ms and 250 ms.
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Restarts the delta baseline at the current instant.
    ///
    /// The runtime calls this after a resize so the time spent blocked in the
    /// platform's resize loop does not show up as one long frame.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f64(),
            elapsed: now.saturating_duration_since(self.start).as_secs_f64(),
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_increments() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn dt_is_clamped_low() {
        let mut clock = FrameClock::new();
        let t = clock.last;
        let ft = clock.tick_at(t);
        assert!((ft.dt - 0.0001).abs() < 1e-9);
    }

    #[test]
    fn dt_is_clamped_high() {
        let mut clock = FrameClock::new();
        let later = clock.last + Duration::from_secs(5);
        let ft = clock.tick_at(later);
        assert!((ft.dt - 0.25).abs() < 1e-9);
        assert!((ft.elapsed - 5.0).abs() < 1e-9);
    }

    #[test]
    fn reset_moves_the_delta_baseline() {
        let mut clock = FrameClock::new();
        let before = clock.last;
        clock.reset();
        assert!(clock.last >= before);

        let ft = clock.tick_at(clock.last + Duration::from_millis(16));
        assert!((ft.dt - 0.016).abs() < 1e-9);
        // Elapsed still counts from creation.
        assert!(ft.elapsed >= 0.016);
    }

    #[test]
    fn elapsed_is_measured_from_creation() {
        let mut clock = FrameClock::new();
        let base = clock.last;
        let a = clock.tick_at(base + Duration::from_millis(16));
        let b = clock.tick_at(base + Duration::from_millis(40));
        assert!(a.elapsed <= b.elapsed);
        assert!((b.elapsed - 0.040).abs() < 1e-9);
        assert!((b.dt - 0.024).abs() < 1e-9);
    }
}
