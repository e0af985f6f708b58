//! Game loop
//!
//! Owns one session plus the two tick sources that drive it. The host calls
//! [`GameLoop::frame`] on every display refresh while [`GameLoop::is_running`]
//! is true and forwards pointer input; everything else happens here.

use crate::notify::{LogNotifier, Notifier, Toast};
use crate::schedule::{FrameClock, IntervalTimer, TickSource};
use crate::sim::{
    GameEvent, GamePhase, GameSession, PlaySurface, PointerSample, autopilot, spawn_item, tick,
};
use crate::tuning::GameConfig;

/// What one frame did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Items spawned this frame
    pub spawned: u32,
    /// Simulation events, in evaluation order
    pub events: Vec<GameEvent>,
    /// Whether the host should schedule another frame
    pub keep_running: bool,
}

/// A game session with its scheduler
pub struct GameLoop<N: Notifier = LogNotifier> {
    config: GameConfig,
    session: GameSession,
    spawn_timer: IntervalTimer,
    frame_clock: FrameClock,
    notifier: N,
    /// Demo mode - the autopilot steers the catcher
    autopilot: bool,
}

impl<N: Notifier> GameLoop<N> {
    pub fn new(config: GameConfig, seed: u64, notifier: N) -> Self {
        let config = config.sanitized();
        Self {
            session: GameSession::new(seed, &config),
            spawn_timer: IntervalTimer::new(config.spawn_interval_ms, config.max_spawn_catch_up),
            frame_clock: FrameClock::new(),
            config,
            notifier,
            autopilot: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        if self.autopilot != enabled {
            log::info!("Autopilot: {}", enabled);
        }
        self.autopilot = enabled;
    }

    /// True while frames should be delivered
    pub fn is_running(&self) -> bool {
        self.frame_clock.is_running()
    }

    /// Start (or restart) a run. Tick sources are restarted in place, so there
    /// is never more than one of each.
    pub fn start(&mut self, now_ms: f64) {
        self.session.start();
        self.spawn_timer.start(now_ms);
        self.frame_clock.start(now_ms);
    }

    /// Stop both tick sources. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if self.spawn_timer.is_running() || self.frame_clock.is_running() {
            log::debug!("Stopping tick sources");
        }
        self.spawn_timer.stop();
        self.frame_clock.stop();
    }

    /// Stop and throw the session away (dialog closed). The replacement keeps
    /// the id sequence so item ids stay unique for this instance.
    pub fn discard(&mut self) {
        self.stop();
        self.session = self.session.fresh(&self.config);
        log::info!("Session discarded");
    }

    /// Run one display refresh: due spawns, then one simulation tick.
    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        let mut report = FrameReport::default();
        if !self.is_running() {
            return report;
        }

        for _ in 0..self.spawn_timer.poll(now_ms) {
            if spawn_item(&mut self.session, &self.config).is_some() {
                report.spawned += 1;
            }
        }

        if self.frame_clock.poll(now_ms) > 0 {
            if self.autopilot {
                if let Some(x) = autopilot::target_x(&self.session, &self.config) {
                    self.session.move_catcher(x, &self.config);
                }
            }

            report.events = tick(&mut self.session, &self.config);
            for event in &report.events {
                self.notifier.notify(Toast::for_event(event));
            }
        }

        if !self.session.is_playing() {
            self.stop();
        }
        report.keep_running = self.is_running();
        report
    }

    /// Move the catcher from a mouse or touch sample. Ignored unless playing.
    pub fn pointer(&mut self, sample: PointerSample, surface: &PlaySurface) {
        if !self.session.is_playing() {
            log::trace!("Ignoring {:?} input outside play", sample.source);
            return;
        }
        match sample.board_x(surface) {
            Some(x) => self.session.move_catcher(x, &self.config),
            None => log::trace!("Ignoring input on degenerate surface {:?}", surface),
        }
    }
}
