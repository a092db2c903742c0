//! Deterministic task executor.
//!
//! [`TaskQueue`] plays the role of the browser's timer loop on a virtual
//! clock: tasks fire in due-time order, ties in scheduling order, and the
//! commands they dispatch may schedule more tasks.

use std::time::Duration;

use crate::command::{Command, FormKind, Task, TimerId};

#[derive(Debug, Clone)]
struct Pending {
    due: Duration,
    seq: u64,
    command: Command,
    repeat: Option<(TimerId, Duration)>,
}

/// Virtual-clock executor for [`Task`]s.
#[derive(Debug, Default)]
pub struct TaskQueue {
    now: Duration,
    seq: u64,
    pending: Vec<Pending>,
    form_resets: Vec<FormKind>,
    cancelled: Vec<TimerId>,
}

impl TaskQueue {
    /// Create an empty queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Whether nothing is scheduled.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of scheduled entries.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Forms reset so far, in order.
    pub fn form_resets(&self) -> &[FormKind] {
        &self.form_resets
    }

    /// Intervals cancelled so far, in order.
    pub fn cancelled_timers(&self) -> &[TimerId] {
        &self.cancelled
    }

    /// Whether a repeating timer is still armed.
    pub fn has_interval(&self, timer: TimerId) -> bool {
        self.pending
            .iter()
            .any(|p| matches!(p.repeat, Some((id, _)) if id == timer))
    }

    /// Accept tasks returned by a dispatch.
    pub fn push_all(&mut self, tasks: impl IntoIterator<Item = Task>) {
        for task in tasks {
            self.push(task);
        }
    }

    /// Accept one task.
    pub fn push(&mut self, task: Task) {
        match task {
            Task::Schedule { delay, command } => self.enqueue(self.now + delay, command, None),
            Task::StartInterval {
                timer,
                every,
                command,
            } => self.enqueue(self.now + every, command, Some((timer, every))),
            Task::CancelInterval { timer } => {
                self.pending
                    .retain(|p| !matches!(p.repeat, Some((id, _)) if id == timer));
                self.cancelled.push(timer);
            }
            Task::ResetForm(form) => self.form_resets.push(form),
        }
    }

    fn enqueue(&mut self, due: Duration, command: Command, repeat: Option<(TimerId, Duration)>) {
        self.seq += 1;
        self.pending.push(Pending {
            due,
            seq: self.seq,
            command,
            repeat,
        });
    }

    fn pop_due(&mut self, until: Duration) -> Option<Pending> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        Some(self.pending.remove(index))
    }

    /// Advance the clock by `by`, dispatching every command that falls due.
    ///
    /// Returns the number of commands dispatched.
    pub fn advance<F>(&mut self, by: Duration, mut dispatch: F) -> usize
    where
        F: FnMut(Command) -> Vec<Task>,
    {
        let until = self.now + by;
        let mut fired = 0;
        while let Some(entry) = self.pop_due(until) {
            self.now = entry.due;
            // Re-arm before dispatching so a cancel issued by this tick wins.
            if let Some((timer, every)) = entry.repeat {
                self.enqueue(entry.due + every, entry.command.clone(), Some((timer, every)));
            }
            let tasks = dispatch(entry.command);
            self.push_all(tasks);
            fired += 1;
        }
        self.now = until;
        fired
    }

    /// Run until nothing is scheduled, giving up after `max_steps` dispatches.
    ///
    /// Returns the number of commands dispatched.
    pub fn run_until_idle<F>(&mut self, max_steps: usize, mut dispatch: F) -> usize
    where
        F: FnMut(Command) -> Vec<Task>,
    {
        let mut fired = 0;
        while fired < max_steps {
            let Some(next_due) = self.pending.iter().map(|p| p.due).min() else {
                break;
            };
            let by = next_due.saturating_sub(self.now);
            let mut budget = max_steps - fired;
            fired += self.advance(by, |command| {
                if budget == 0 {
                    return Vec::new();
                }
                budget -= 1;
                dispatch(command)
            });
        }
        fired
    }
}
