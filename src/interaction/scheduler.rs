use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Opaque id of one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerHandle(u64);

/// Work a timer callback stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerTask {
    /// Debounced re-render of every resizable chart.
    ResizeFlush,
    /// Periodic carousel advance.
    CarouselAutoRotate,
    /// End of a carousel slide animation.
    CarouselTransitionEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredTimer {
    pub handle: TimerHandle,
    pub task: TimerTask,
    pub at: Duration,
}

/// Cooperative timer service, the single source of suspension points.
///
/// Browser hosts map this onto `setTimeout`/`setInterval`; tests and
/// headless hosts use [`ManualScheduler`].
pub trait Scheduler {
    /// Fires `task` once after `delay`.
    fn schedule(&mut self, task: TimerTask, delay: Duration) -> TimerHandle;
    /// Fires `task` every `period` until cancelled.
    fn schedule_repeating(&mut self, task: TimerTask, period: Duration) -> TimerHandle;
    /// Returns `false` when the handle already fired or was cancelled.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    handle: TimerHandle,
    task: TimerTask,
    period: Option<Duration>,
}

/// Deterministic virtual-time scheduler.
///
/// Due timers fire in deadline order; equal deadlines fire in the order they
/// were armed. Repeating timers are re-armed relative to their deadline, so
/// they never drift.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_handle: u64,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), Entry>,
    index: HashMap<TimerHandle, (Duration, u64)>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.index.contains_key(&handle)
    }

    /// Number of armed timers for `task`.
    #[must_use]
    pub fn pending_for(&self, task: TimerTask) -> usize {
        self.queue.values().filter(|entry| entry.task == task).count()
    }

    /// Pops the earliest timer due at or before `until` and moves the clock
    /// to its deadline.
    pub fn next_due(&mut self, until: Duration) -> Option<FiredTimer> {
        let (&(deadline, seq), _) = self.queue.first_key_value()?;
        if deadline > until {
            return None;
        }
        let entry = self.queue.remove(&(deadline, seq))?;
        self.index.remove(&entry.handle);
        self.now = self.now.max(deadline);

        if let Some(period) = entry.period {
            self.arm(entry.handle, entry.task, deadline + period, Some(period));
        }
        trace!(task = ?entry.task, at_ms = deadline.as_millis() as u64, "timer fired");
        Some(FiredTimer {
            handle: entry.handle,
            task: entry.task,
            at: deadline,
        })
    }

    /// Runs every timer due up to `until`, including ones armed by `dispatch`
    /// along the way, then parks the clock at `until`.
    pub fn run_until<F>(&mut self, until: Duration, mut dispatch: F)
    where
        F: FnMut(&mut Self, FiredTimer),
    {
        while let Some(fired) = self.next_due(until) {
            dispatch(self, fired);
        }
        self.now = self.now.max(until);
    }

    pub fn run_for<F>(&mut self, delta: Duration, dispatch: F)
    where
        F: FnMut(&mut Self, FiredTimer),
    {
        let until = self.now + delta;
        self.run_until(until, dispatch);
    }

    /// Moves the clock forward without firing anything.
    ///
    /// Timers that became due stay queued and fire on the next run.
    pub fn advance_clock(&mut self, delta: Duration) {
        self.now += delta;
    }

    fn allocate_handle(&mut self) -> TimerHandle {
        self.next_handle += 1;
        TimerHandle(self.next_handle)
    }

    fn arm(
        &mut self,
        handle: TimerHandle,
        task: TimerTask,
        deadline: Duration,
        period: Option<Duration>,
    ) {
        self.next_seq += 1;
        let key = (deadline, self.next_seq);
        self.queue.insert(
            key,
            Entry {
                handle,
                task,
                period,
            },
        );
        self.index.insert(handle, key);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, task: TimerTask, delay: Duration) -> TimerHandle {
        let handle = self.allocate_handle();
        self.arm(handle, task, self.now + delay, None);
        handle
    }

    fn schedule_repeating(&mut self, task: TimerTask, period: Duration) -> TimerHandle {
        // A zero period would re-arm at the same instant forever.
        let period = period.max(Duration::from_millis(1));
        let handle = self.allocate_handle();
        self.arm(handle, task, self.now + period, Some(period));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.index.remove(&handle) {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }
}
