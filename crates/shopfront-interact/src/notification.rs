//! Toast notifications.
//!
//! At most one toast is on screen. A new toast removes the current one
//! outright (no exit transition) and the removed toast's pending timers turn
//! into no-ops because they no longer match the current id.

use std::time::Duration;

use crate::command::{Command, Task, ToastId};

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    /// The class added next to `toast`.
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    /// The icon shown in front of the message.
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "fa-check-circle",
            ToastKind::Error => "fa-exclamation-circle",
        }
    }
}

/// Lifecycle of a toast on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted, active class not yet applied.
    Entering,
    /// Fully shown.
    Active,
    /// Active class removed, waiting for removal.
    Leaving,
}

/// A toast on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

impl Toast {
    /// Whether the `active` class is applied.
    pub fn is_active(&self) -> bool {
        self.phase == ToastPhase::Active
    }
}

/// Timings for the notification lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    pub enter_delay: Duration,
    pub duration: Duration,
    pub exit: Duration,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            enter_delay: Duration::from_millis(10),
            duration: Duration::from_millis(4000),
            exit: Duration::from_millis(300),
        }
    }
}

/// Owns the single notification slot.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    current: Option<Toast>,
    next_id: u64,
    timings: ToastTimings,
}

impl NotificationCenter {
    pub fn new(timings: ToastTimings) -> Self {
        Self {
            current: None,
            next_id: 0,
            timings,
        }
    }

    /// The toast on screen, if any.
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Show a toast, replacing any current one immediately.
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) -> Vec<Task> {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.current = Some(Toast {
            id,
            message: message.into(),
            kind,
            phase: ToastPhase::Entering,
        });
        vec![
            Task::schedule(self.timings.enter_delay, Command::ActivateToast(id)),
            Task::schedule(self.timings.duration, Command::ExpireToast(id)),
        ]
    }

    /// Apply the active state to a toast that is still entering.
    pub fn activate(&mut self, id: ToastId) {
        if let Some(toast) = self.current_mut(id) {
            if toast.phase == ToastPhase::Entering {
                toast.phase = ToastPhase::Active;
            }
        }
    }

    /// Close control clicked: start the exit transition.
    pub fn dismiss(&mut self, id: ToastId) -> Vec<Task> {
        self.begin_exit(id)
    }

    /// Lifetime elapsed: start the exit transition if the toast is still on screen.
    pub fn expire(&mut self, id: ToastId) -> Vec<Task> {
        self.begin_exit(id)
    }

    /// Take the toast off screen. Removing a toast that is gone is a no-op.
    pub fn remove(&mut self, id: ToastId) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    fn begin_exit(&mut self, id: ToastId) -> Vec<Task> {
        let exit = self.timings.exit;
        match self.current_mut(id) {
            Some(toast) => {
                toast.phase = ToastPhase::Leaving;
                vec![Task::schedule(exit, Command::RemoveToast(id))]
            }
            None => Vec::new(),
        }
    }

    fn current_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.current.as_mut().filter(|t| t.id == id)
    }
}
