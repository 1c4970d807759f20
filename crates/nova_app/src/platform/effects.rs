use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use nova_core::{Effect, Msg, SupportMsg, TimerId};
use nova_engine::{Dictation, DictationEvent, Scheduler, TimerSpec};
use nova_logging::{nova_error, nova_info};

use super::ui::render;

/// Carries out effects returned by `update` and turns timer and dictation
/// events back into messages.
pub struct EffectRunner {
    scheduler: Arc<dyn Scheduler<TimerId>>,
    dictation: Mutex<Box<dyn Dictation>>,
}

impl EffectRunner {
    pub fn new(scheduler: Arc<dyn Scheduler<TimerId>>, dictation: Box<dyn Dictation>) -> Self {
        Self {
            scheduler,
            dictation: Mutex::new(dictation),
        }
    }

    pub fn dictation_available(&self) -> bool {
        self.dictation
            .lock()
            .is_ok_and(|dictation| dictation.is_available())
    }

    /// Runs the effects, returning lines for anything that is only shown,
    /// such as confetti volleys.
    pub fn enqueue(&self, effects: Vec<Effect>) -> Vec<String> {
        let mut output = Vec::new();
        for effect in effects {
            match effect {
                Effect::StartTimer { timer, after } => {
                    self.start(timer, TimerSpec::Once(after));
                }
                Effect::StartInterval { timer, every } => {
                    self.start(timer, TimerSpec::Every(every));
                }
                Effect::CancelTimer { timer } => self.scheduler.cancel(timer),
                Effect::LaunchConfetti { volleys } => {
                    output.push(render::render_confetti(&volleys));
                }
                Effect::StartDictation => self.with_dictation(|dictation| dictation.start()),
                Effect::StopDictation => self.with_dictation(|dictation| dictation.stop()),
                Effect::OpenContactSales => {
                    nova_info!("Opening contact sales");
                    output.push("Opening contact sales...".to_string());
                }
            }
        }
        output
    }

    fn start(&self, timer: TimerId, spec: TimerSpec) {
        if let Err(err) = self.scheduler.start(timer, spec) {
            nova_error!("Failed to start timer {:?}: {}", timer, err);
        }
    }

    fn with_dictation(&self, action: impl FnOnce(&mut dyn Dictation)) {
        match self.dictation.lock() {
            Ok(mut dictation) => action(&mut **dictation),
            Err(_) => nova_error!("Dictation backend lock poisoned"),
        }
    }

    /// Drains every timer and dictation event that is ready right now.
    pub fn poll_events(&self) -> Vec<Msg> {
        let mut msgs: Vec<Msg> = std::iter::from_fn(|| self.scheduler.try_recv())
            .map(|event| Msg::TimerFired(event.key))
            .collect();

        if let Ok(mut dictation) = self.dictation.lock() {
            while let Some(event) = dictation.try_recv() {
                msgs.push(Msg::Support(map_dictation(event)));
            }
        }
        msgs
    }

    pub fn shutdown(&self) {
        self.scheduler.cancel_all();
        self.with_dictation(|dictation| dictation.stop());
    }

    /// Forwards ready events to `forward` from a background thread until the
    /// receiving side hangs up.
    pub fn spawn_event_loop<T, F>(self: &Arc<Self>, tx: mpsc::Sender<T>, forward: F)
    where
        T: Send + 'static,
        F: Fn(Msg) -> T + Send + 'static,
    {
        let runner = Arc::clone(self);
        thread::spawn(move || loop {
            let msgs = runner.poll_events();
            if msgs.is_empty() {
                thread::sleep(Duration::from_millis(20));
                continue;
            }
            for msg in msgs {
                if tx.send(forward(msg)).is_err() {
                    return;
                }
            }
        });
    }
}

fn map_dictation(event: DictationEvent) -> SupportMsg {
    match event {
        DictationEvent::Transcript(text) => SupportMsg::DictationTranscript(text),
        DictationEvent::Ended => SupportMsg::DictationEnded,
        DictationEvent::Failed(reason) => SupportMsg::DictationFailed(reason),
    }
}
