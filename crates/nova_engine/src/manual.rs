use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use crate::{EngineError, Scheduler, TimerEvent, TimerKey, TimerSpec};

#[derive(Debug)]
struct PendingTimer<K> {
    key: K,
    due: Duration,
    period: Option<Duration>,
    firing: u64,
    /// Registration order; breaks ties between timers due at the same instant.
    order: u64,
}

#[derive(Debug)]
struct ManualState<K> {
    now: Duration,
    timers: Vec<PendingTimer<K>>,
    ready: VecDeque<TimerEvent<K>>,
    next_order: u64,
}

/// Virtual-clock scheduler. Time only moves when [`ManualScheduler::advance`]
/// is called, which makes timer-driven flows deterministic in tests.
#[derive(Debug)]
pub struct ManualScheduler<K> {
    state: Mutex<ManualState<K>>,
}

impl<K: TimerKey> Default for ManualScheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TimerKey> ManualScheduler<K> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ManualState {
                now: Duration::ZERO,
                timers: Vec::new(),
                ready: VecDeque::new(),
                next_order: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ManualState<K>> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of registered timers that have not finished or been cancelled.
    pub fn active(&self) -> usize {
        self.lock().timers.len()
    }

    pub fn is_active(&self, key: K) -> bool {
        self.lock().timers.iter().any(|timer| timer.key == key)
    }

    /// Moves virtual time forward, queueing every firing that falls due.
    ///
    /// Firings are queued in due order; intervals may fire several times.
    /// Returns how many events were queued.
    pub fn advance(&self, by: Duration) -> usize {
        let mut state = self.lock();
        let target = state.now.saturating_add(by);
        let mut queued = 0;

        loop {
            let next = state
                .timers
                .iter()
                .enumerate()
                .filter(|(_, timer)| timer.due <= target)
                .min_by_key(|(_, timer)| (timer.due, timer.order))
                .map(|(index, _)| index);
            let Some(index) = next else {
                break;
            };

            let timer = &mut state.timers[index];
            timer.firing += 1;
            let event = TimerEvent {
                key: timer.key,
                firing: timer.firing,
            };
            let due = timer.due;
            let period = timer.period;
            match period {
                Some(period) => timer.due = due.saturating_add(period),
                None => {
                    state.timers.swap_remove(index);
                }
            }
            state.now = due;
            state.ready.push_back(event);
            queued += 1;
        }

        state.now = target;
        queued
    }

    /// Advances time and drains everything that fired.
    pub fn advance_and_drain(&self, by: Duration) -> Vec<TimerEvent<K>> {
        self.advance(by);
        self.lock().ready.drain(..).collect()
    }
}

impl<K: TimerKey> Scheduler<K> for ManualScheduler<K> {
    fn start(&self, key: K, spec: TimerSpec) -> Result<(), EngineError> {
        let (delay, period) = match spec {
            TimerSpec::Once(delay) => (delay, None),
            TimerSpec::Every(period) if period.is_zero() => return Err(EngineError::ZeroPeriod),
            TimerSpec::Every(period) => (period, Some(period)),
        };
        let mut state = self.lock();
        state.timers.retain(|timer| timer.key != key);
        let order = state.next_order;
        state.next_order += 1;
        let due = state.now.saturating_add(delay);
        state.timers.push(PendingTimer {
            key,
            due,
            period,
            firing: 0,
            order,
        });
        Ok(())
    }

    fn cancel(&self, key: K) {
        let mut state = self.lock();
        state.timers.retain(|timer| timer.key != key);
        state.ready.retain(|event| event.key != key);
    }

    fn cancel_all(&self) {
        let mut state = self.lock();
        state.timers.clear();
        state.ready.clear();
    }

    fn try_recv(&self) -> Option<TimerEvent<K>> {
        self.lock().ready.pop_front()
    }
}
