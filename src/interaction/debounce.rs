use std::time::Duration;

use tracing::trace;

use super::{Scheduler, TimerHandle, TimerTask};

/// Cancel-and-reschedule debounce over a [`Scheduler`].
///
/// At most one timer is pending at any time; only the most recently armed
/// handle is honoured when it fires.
#[derive(Debug, Clone)]
pub struct Debouncer {
    task: TimerTask,
    quiet: Duration,
    pending: Option<TimerHandle>,
}

impl Debouncer {
    #[must_use]
    pub fn new(task: TimerTask, quiet: Duration) -> Self {
        Self {
            task,
            quiet,
            pending: None,
        }
    }

    #[must_use]
    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    #[must_use]
    pub fn pending(&self) -> Option<TimerHandle> {
        self.pending
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Restarts the quiet window.
    pub fn trigger<S: Scheduler>(&mut self, scheduler: &mut S) -> TimerHandle {
        self.cancel_pending(scheduler);
        let handle = scheduler.schedule(self.task, self.quiet);
        trace!(task = ?self.task, quiet_ms = self.quiet.as_millis() as u64, "debounce armed");
        self.pending = Some(handle);
        handle
    }

    pub fn cancel_pending<S: Scheduler>(&mut self, scheduler: &mut S) -> bool {
        match self.pending.take() {
            Some(handle) => scheduler.cancel(handle),
            None => false,
        }
    }

    /// Consumes a fired timer; `true` means the debounced work should run.
    pub fn on_fired(&mut self, handle: TimerHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
