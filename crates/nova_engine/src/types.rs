use std::fmt;
use std::hash::Hash;
use std::time::Duration;

use thiserror::Error;

/// Anything usable as a timer identity.
pub trait TimerKey: Copy + Eq + Hash + fmt::Debug + Send + 'static {}

impl<K> TimerKey for K where K: Copy + Eq + Hash + fmt::Debug + Send + 'static {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSpec {
    /// Fire once after the delay.
    Once(Duration),
    /// Fire every period until cancelled. The first firing is one period out.
    Every(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent<K> {
    pub key: K,
    /// 1-based count of firings for this timer registration.
    pub firing: u64,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start timer runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("timer period must be non-zero")]
    ZeroPeriod,
}

/// Host capability that turns timer effects into later timer events.
///
/// Starting a key that is already running replaces the earlier registration.
pub trait Scheduler<K: TimerKey>: Send + Sync {
    fn start(&self, key: K, spec: TimerSpec) -> Result<(), EngineError>;
    fn cancel(&self, key: K);
    fn cancel_all(&self);
    fn try_recv(&self) -> Option<TimerEvent<K>>;
}
