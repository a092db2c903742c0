//! Scroll reveal engine.
//!
//! Targets are registered once at page load. The first intersection report
//! at or above the threshold reveals a target: its progress fill drops to
//! zero and comes back after a short delay, and its counters start ticking.
//! Revealed targets never go back to pending.

use std::time::Duration;

use crate::command::{Command, CounterId, RevealId, Task};
use crate::config::SiteConfig;
use crate::counter::Counter;

/// What the page declares for one reveal target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSpec {
    /// Authored width of the progress fill, such as `"85%"`.
    pub progress_width: Option<String>,
    /// Authored texts of the counters inside the target.
    pub counters: Vec<String>,
    /// Per-element animation delay.
    pub delay_ms: Option<u64>,
}

impl RevealSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress(mut self, width: impl Into<String>) -> Self {
        self.progress_width = Some(width.into());
        self
    }

    pub fn with_counter(mut self, text: impl Into<String>) -> Self {
        self.counters.push(text.into());
        self
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// A progress bar fill inside a reveal target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressFill {
    target_width: String,
    width: String,
}

impl ProgressFill {
    fn new(target_width: String) -> Self {
        Self {
            width: target_width.clone(),
            target_width,
        }
    }

    /// Width currently applied.
    pub fn width(&self) -> &str {
        &self.width
    }

    /// Authored width.
    pub fn target_width(&self) -> &str {
        &self.target_width
    }
}

/// A registered reveal target.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTarget {
    id: RevealId,
    state: RevealState,
    progress: Option<ProgressFill>,
    counters: Vec<CounterId>,
    delay_ms: Option<u64>,
}

impl RevealTarget {
    pub fn id(&self) -> RevealId {
        self.id
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    pub fn progress(&self) -> Option<&ProgressFill> {
        self.progress.as_ref()
    }

    /// Counters nested in this target.
    pub fn counters(&self) -> &[CounterId] {
        &self.counters
    }

    /// The `animation-delay` style value, if one was authored.
    pub fn animation_delay(&self) -> Option<String> {
        self.delay_ms.map(|ms| format!("{}ms", ms))
    }
}

/// Owns every reveal target and counter on the page.
#[derive(Debug, Clone)]
pub struct RevealEngine {
    targets: Vec<RevealTarget>,
    counters: Vec<Counter>,
    threshold: f64,
    steps: u32,
    interval: Duration,
    restore_delay: Duration,
    separator: char,
}

impl RevealEngine {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            targets: Vec::new(),
            counters: Vec::new(),
            threshold: config.reveal_threshold,
            steps: config.counter_steps,
            interval: config.counter_interval(),
            restore_delay: config.progress_restore_delay(),
            separator: config.thousands_separator,
        }
    }

    /// Register a target and its counters.
    pub fn register(&mut self, spec: RevealSpec) -> RevealId {
        let id = RevealId(self.targets.len());
        let counters = spec
            .counters
            .into_iter()
            .map(|text| {
                let counter_id = CounterId(self.counters.len());
                self.counters
                    .push(Counter::new(counter_id, text, self.separator));
                counter_id
            })
            .collect();
        self.targets.push(RevealTarget {
            id,
            state: RevealState::Pending,
            progress: spec.progress_width.map(ProgressFill::new),
            counters,
            delay_ms: spec.delay_ms,
        });
        id
    }

    pub fn target(&self, id: RevealId) -> Option<&RevealTarget> {
        self.targets.get(id.0)
    }

    pub fn targets(&self) -> &[RevealTarget] {
        &self.targets
    }

    pub fn counter(&self, id: CounterId) -> Option<&Counter> {
        self.counters.get(id.0)
    }

    /// Text a counter currently shows.
    pub fn counter_text(&self, id: CounterId) -> Option<&str> {
        self.counter(id).map(Counter::text)
    }

    /// Handle a visibility report. Below the threshold, for unknown ids and
    /// for already revealed targets this does nothing.
    pub fn intersect(&mut self, id: RevealId, ratio: f64) -> Vec<Task> {
        if ratio.is_nan() || ratio < self.threshold {
            return Vec::new();
        }
        let Some(target) = self.targets.get_mut(id.0) else {
            return Vec::new();
        };
        if target.is_revealed() {
            return Vec::new();
        }
        target.state = RevealState::Revealed;

        let mut tasks = Vec::new();
        if let Some(fill) = target.progress.as_mut() {
            fill.width = "0".to_string();
            tasks.push(Task::schedule(
                self.restore_delay,
                Command::RestoreProgress(id),
            ));
        }

        for counter_id in target.counters.clone() {
            let Some(counter) = self.counters.get_mut(counter_id.0) else {
                continue;
            };
            if counter.start(self.steps) {
                tasks.push(Task::StartInterval {
                    timer: counter.timer(),
                    every: self.interval,
                    command: Command::CounterTick(counter_id),
                });
            }
        }
        tasks
    }

    /// Put a progress fill back to its authored width.
    pub fn restore_progress(&mut self, id: RevealId) {
        if let Some(fill) = self
            .targets
            .get_mut(id.0)
            .and_then(|t| t.progress.as_mut())
        {
            fill.width = fill.target_width.clone();
        }
    }

    /// Advance a counter; its interval is cancelled once it finishes.
    pub fn counter_tick(&mut self, id: CounterId) -> Vec<Task> {
        let Some(counter) = self.counters.get_mut(id.0) else {
            return Vec::new();
        };
        if counter.tick() {
            vec![Task::CancelInterval {
                timer: counter.timer(),
            }]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::TaskQueue;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn drive(engine: &mut RevealEngine, queue: &mut TaskQueue, by: Duration) {
        queue.advance(by, |command| match command {
            Command::RestoreProgress(id) => {
                engine.restore_progress(id);
                Vec::new()
            }
            Command::CounterTick(id) => engine.counter_tick(id),
            _ => Vec::new(),
        });
    }

    #[test]
    fn test_below_threshold_stays_pending() {
        let mut engine = RevealEngine::new(&SiteConfig::default());
        let id = engine.register(RevealSpec::new().with_progress("85%"));
        assert!(engine.intersect(id, 0.05).is_empty());
        assert_eq!(engine.target(id).unwrap().state(), RevealState::Pending);
        assert_eq!(engine.target(id).unwrap().progress().unwrap().width(), "85%");
    }

    #[test]
    fn test_progress_reset_and_restored() {
        let mut engine = RevealEngine::new(&SiteConfig::default());
        let mut queue = TaskQueue::new();
        let id = engine.register(RevealSpec::new().with_progress("85%"));

        queue.push_all(engine.intersect(id, 0.1));
        let target = engine.target(id).unwrap();
        assert!(target.is_revealed());
        assert_eq!(target.progress().unwrap().width(), "0");

        drive(&mut engine, &mut queue, ms(99));
        assert_eq!(engine.target(id).unwrap().progress().unwrap().width(), "0");
        drive(&mut engine, &mut queue, ms(1));
        assert_eq!(engine.target(id).unwrap().progress().unwrap().width(), "85%");
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut engine = RevealEngine::new(&SiteConfig::default());
        let id = engine.register(RevealSpec::new().with_counter("500"));
        assert_eq!(engine.intersect(id, 0.5).len(), 1);
        assert!(engine.intersect(id, 1.0).is_empty());
        assert!(engine.intersect(RevealId(9), 1.0).is_empty());
    }

    #[test]
    fn test_counters_run_to_target() {
        let mut engine = RevealEngine::new(&SiteConfig::default());
        let mut queue = TaskQueue::new();
        let id = engine.register(
            RevealSpec::new()
                .with_counter("1000")
                .with_counter("$10-20")
                .with_counter("98%"),
        );
        let counters = engine.target(id).unwrap().counters().to_vec();

        let tasks = engine.intersect(id, 0.3);
        // The range never gets an interval.
        assert_eq!(tasks.len(), 2);
        queue.push_all(tasks);

        drive(&mut engine, &mut queue, ms(30 * 60));
        assert_eq!(engine.counter_text(counters[0]), Some("1000"));
        assert_eq!(engine.counter_text(counters[1]), Some("$10-20"));
        assert_eq!(engine.counter_text(counters[2]), Some("98%"));
        assert!(queue.is_idle());
        assert_eq!(queue.cancelled_timers().len(), 2);
    }

    #[test]
    fn test_animation_delay() {
        let mut engine = RevealEngine::new(&SiteConfig::default());
        let id = engine.register(RevealSpec::new().with_delay(200));
        assert_eq!(
            engine.target(id).unwrap().animation_delay().as_deref(),
            Some("200ms")
        );
    }
}
