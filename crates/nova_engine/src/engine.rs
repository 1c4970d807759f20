use std::collections::HashMap;
use std::sync::{mpsc, Mutex};
use std::thread;

use nova_logging::{nova_debug, nova_warn};
use tokio::sync::mpsc as tokio_mpsc;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

use crate::{EngineError, Scheduler, TimerEvent, TimerKey, TimerSpec};

enum TimerCommand<K> {
    Start { key: K, spec: TimerSpec },
    Cancel { key: K },
    CancelAll,
}

/// Wall-clock scheduler backed by a single-threaded tokio runtime on its own
/// thread. Dropping the handle stops every timer.
pub struct TimerEngine<K: TimerKey> {
    cmd_tx: tokio_mpsc::UnboundedSender<TimerCommand<K>>,
    event_rx: Mutex<mpsc::Receiver<TimerEvent<K>>>,
}

impl<K: TimerKey> TimerEngine<K> {
    pub fn new() -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = tokio_mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;

        thread::Builder::new()
            .name("nova-timers".to_string())
            .spawn(move || {
                runtime.block_on(run_commands(cmd_rx, event_tx));
                nova_debug!("Timer engine stopped");
            })?;

        Ok(Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        })
    }

    /// Blocks until the next timer event, or `None` once the engine is gone.
    pub fn recv(&self) -> Option<TimerEvent<K>> {
        self.event_rx.lock().ok()?.recv().ok()
    }

    fn send(&self, command: TimerCommand<K>) {
        if self.cmd_tx.send(command).is_err() {
            nova_warn!("Timer engine is no longer running; command dropped");
        }
    }
}

impl<K: TimerKey> Scheduler<K> for TimerEngine<K> {
    fn start(&self, key: K, spec: TimerSpec) -> Result<(), EngineError> {
        if matches!(spec, TimerSpec::Every(period) if period.is_zero()) {
            return Err(EngineError::ZeroPeriod);
        }
        self.send(TimerCommand::Start { key, spec });
        Ok(())
    }

    fn cancel(&self, key: K) {
        self.send(TimerCommand::Cancel { key });
    }

    fn cancel_all(&self) {
        self.send(TimerCommand::CancelAll);
    }

    fn try_recv(&self) -> Option<TimerEvent<K>> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn run_commands<K: TimerKey>(
    mut cmd_rx: tokio_mpsc::UnboundedReceiver<TimerCommand<K>>,
    event_tx: mpsc::Sender<TimerEvent<K>>,
) {
    let mut active: HashMap<K, CancellationToken> = HashMap::new();
    while let Some(command) = cmd_rx.recv().await {
        // Finished one-shot timers cancel their own token.
        active.retain(|_, token| !token.is_cancelled());
        match command {
            TimerCommand::Start { key, spec } => {
                let token = CancellationToken::new();
                if let Some(previous) = active.insert(key, token.clone()) {
                    previous.cancel();
                }
                nova_debug!("Timer {:?} started ({:?})", key, spec);
                tokio::spawn(run_timer(key, spec, token, event_tx.clone()));
            }
            TimerCommand::Cancel { key } => {
                if let Some(token) = active.remove(&key) {
                    nova_debug!("Timer {:?} cancelled", key);
                    token.cancel();
                }
            }
            TimerCommand::CancelAll => {
                for (_, token) in active.drain() {
                    token.cancel();
                }
            }
        }
    }
}

async fn run_timer<K: TimerKey>(
    key: K,
    spec: TimerSpec,
    token: CancellationToken,
    event_tx: mpsc::Sender<TimerEvent<K>>,
) {
    match spec {
        TimerSpec::Once(delay) => {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = time::sleep(delay) => {
                    let _ = event_tx.send(TimerEvent { key, firing: 1 });
                    token.cancel();
                }
            }
        }
        TimerSpec::Every(period) => {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            let mut firing = 0;
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        firing += 1;
                        if event_tx.send(TimerEvent { key, firing }).is_err() {
                            break;
                        }
                    }
                }
            }
        }
    }
}
