//! NOVA engine: effect execution for the core state machine.
//!
//! Timers run either on a background tokio runtime ([`TimerEngine`]) or on a
//! virtual clock driven by tests ([`ManualScheduler`]). Both implement
//! [`Scheduler`], so hosts can swap them freely.
mod clock;
mod dictation;
mod engine;
mod manual;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dictation::{Dictation, DictationEvent, ScriptedDictation, UnavailableDictation};
pub use engine::TimerEngine;
pub use manual::ManualScheduler;
pub use types::{EngineError, Scheduler, TimerEvent, TimerKey, TimerSpec};
