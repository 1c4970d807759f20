use std::time::Duration;

use crate::{ParticleVolley, ReplyId, WizardId};

/// Identifies a timer owned by one component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    PaymentSettle(WizardId),
    Confetti(WizardId),
    ChatReply(ReplyId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fire `Msg::TimerFired(timer)` once after `after`.
    StartTimer { timer: TimerId, after: Duration },
    /// Fire `Msg::TimerFired(timer)` every `every` until cancelled.
    StartInterval { timer: TimerId, every: Duration },
    CancelTimer { timer: TimerId },
    LaunchConfetti { volleys: [ParticleVolley; 2] },
    StartDictation,
    StopDictation,
    OpenContactSales,
}
