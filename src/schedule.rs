//! Tick sources
//!
//! The game runs two cadences: a wall-clock spawn timer and a per-frame
//! update clock. Both are explicit objects owned by the game loop and are
//! started on entering play and stopped on leaving it. Stopping a stopped
//! source does nothing.

/// A start/stop-able source of ticks, polled with the current time
pub trait TickSource {
    /// Begin producing ticks, measured from `now_ms`. Restarting resets the phase.
    fn start(&mut self, now_ms: f64);
    /// Stop producing ticks. Idempotent.
    fn stop(&mut self);
    fn is_running(&self) -> bool;
    /// Number of ticks due at `now_ms` (0 when stopped)
    fn poll(&mut self, now_ms: f64) -> u32;
}

/// Fires once every `period_ms` of wall-clock time
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period_ms: f64,
    /// Most ticks one poll may return; older backlog is dropped
    max_catch_up: u32,
    /// When the next tick falls due (None when stopped)
    next_due_ms: Option<f64>,
}

impl IntervalTimer {
    pub fn new(period_ms: f64, max_catch_up: u32) -> Self {
        Self {
            period_ms,
            max_catch_up: max_catch_up.max(1),
            next_due_ms: None,
        }
    }

    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }
}

impl TickSource for IntervalTimer {
    fn start(&mut self, now_ms: f64) {
        self.next_due_ms = Some(now_ms + self.period_ms);
    }

    fn stop(&mut self) {
        self.next_due_ms = None;
    }

    fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    fn poll(&mut self, now_ms: f64) -> u32 {
        let Some(mut due) = self.next_due_ms else {
            return 0;
        };

        let mut fired = 0;
        while now_ms >= due {
            due += self.period_ms;
            fired += 1;
            if fired == self.max_catch_up {
                // Skip the rest of a long stall instead of bursting
                if now_ms >= due {
                    log::debug!("Spawn timer dropped backlog after stall");
                    due = now_ms + self.period_ms;
                }
                break;
            }
        }
        self.next_due_ms = Some(due);
        fired
    }
}

/// Fires once per display refresh while running
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    running: bool,
    frames: u64,
    last_frame_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames delivered since the last start
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Time of the most recent frame
    pub fn last_frame_ms(&self) -> Option<f64> {
        self.last_frame_ms
    }
}

impl TickSource for FrameClock {
    fn start(&mut self, _now_ms: f64) {
        self.running = true;
        self.frames = 0;
        self.last_frame_ms = None;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn poll(&mut self, now_ms: f64) -> u32 {
        if !self.running {
            return 0;
        }
        // A repeated timestamp is the same display refresh
        if self.last_frame_ms == Some(now_ms) {
            return 0;
        }
        self.last_frame_ms = Some(now_ms);
        self.frames += 1;
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_fires_on_period() {
        let mut timer = IntervalTimer::new(800.0, 4);
        timer.start(0.0);
        assert_eq!(timer.poll(799.0), 0);
        assert_eq!(timer.poll(800.0), 1);
        assert_eq!(timer.poll(1599.0), 0);
        assert_eq!(timer.poll(1600.0), 1);
        assert_eq!(timer.poll(3200.0), 2);
    }

    #[test]
    fn test_interval_caps_backlog() {
        let mut timer = IntervalTimer::new(100.0, 4);
        timer.start(0.0);
        assert_eq!(timer.poll(10_000.0), 4);
        // Backlog was dropped; next tick is a full period later
        assert_eq!(timer.poll(10_050.0), 0);
        assert_eq!(timer.poll(10_100.0), 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut timer = IntervalTimer::new(100.0, 4);
        timer.stop();
        assert!(!timer.is_running());
        timer.start(0.0);
        timer.stop();
        timer.stop();
        assert!(!timer.is_running());
        assert_eq!(timer.poll(1_000.0), 0);

        let mut clock = FrameClock::new();
        clock.stop();
        clock.start(0.0);
        clock.stop();
        clock.stop();
        assert_eq!(clock.poll(16.0), 0);
    }

    #[test]
    fn test_restart_resets_phase() {
        let mut timer = IntervalTimer::new(800.0, 4);
        timer.start(0.0);
        timer.start(500.0);
        assert_eq!(timer.poll(800.0), 0);
        assert_eq!(timer.poll(1300.0), 1);
    }

    #[test]
    fn test_frame_clock_once_per_refresh() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.poll(16.0), 0);
        clock.start(0.0);
        assert_eq!(clock.poll(16.0), 1);
        assert_eq!(clock.poll(16.0), 0);
        assert_eq!(clock.poll(33.0), 1);
        assert_eq!(clock.frames(), 2);
        assert_eq!(clock.last_frame_ms(), Some(33.0));
    }
}
