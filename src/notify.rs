//! Transient notifications ("toasts")
//!
//! The game only produces messages; presenting them belongs to the host.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A short-lived message for the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }

    /// The toast a simulation event should raise
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::Caught { points, .. } => Self::success(format!("+{points} points!")),
            GameEvent::HazardCaught { .. } => Self::error("Game over! You caught a bomb 💣"),
        }
    }
}

/// Sink for toasts
pub trait Notifier {
    fn notify(&mut self, toast: Toast);
}

/// Collects toasts in memory
impl Notifier for Vec<Toast> {
    fn notify(&mut self, toast: Toast) {
        self.push(toast);
    }
}

/// Writes toasts to the log (native/headless runs)
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, toast: Toast) {
        match toast.level {
            ToastLevel::Success => log::info!("{}", toast.message),
            ToastLevel::Error => log::warn!("{}", toast.message),
        }
    }
}
