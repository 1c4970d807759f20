use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use nova_core::{update, AppState, Msg, SupportMsg, TimerId};
use nova_engine::{
    Clock, Dictation, Scheduler, ScriptedDictation, SystemClock, TimerEngine, UnavailableDictation,
};
use nova_logging::{nova_debug, nova_info, nova_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui::input::{self, Command};
use super::ui::render;

const TICK_INTERVAL: Duration = Duration::from_millis(75);
const CHAT_CLOSED_HINT: &str =
    "Chat is not open; run `support` and `option AI Questions` first.";

/// What the terminal should do after a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Lines(Vec<String>),
    Quit,
}

/// Owns the state and routes messages through `update` and the effect runner.
pub struct Session {
    state: AppState,
    runner: Arc<EffectRunner>,
    clock: Box<dyn Clock>,
}

impl Session {
    pub fn new(state: AppState, runner: Arc<EffectRunner>, clock: Box<dyn Clock>) -> Self {
        Self {
            state,
            runner,
            clock,
        }
    }

    /// Builds the initial state for `config`, advertising the microphone only
    /// when the runner's dictation backend is usable.
    pub fn from_config(
        config: &AppConfig,
        runner: Arc<EffectRunner>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let state = AppState::new()
            .with_timings(config.timings())
            .with_knowledge_base(config.knowledge_base())
            .with_dictation(runner.dictation_available());
        Self::new(state, runner, clock)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies one message and runs its effects. Returns effect output only;
    /// the view is rendered separately.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<String> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects)
    }

    pub fn render_if_dirty(&mut self) -> Option<Vec<String>> {
        self.state
            .consume_dirty()
            .then(|| render::render(&self.state.view()))
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        match input::parse_line(line, self.clock.now()) {
            Command::Send(msgs) => self.send_all(msgs),
            Command::Ask(question) => {
                if !self.state.support().screen().is_chat() {
                    return Reply::Lines(vec![CHAT_CLOSED_HINT.to_string()]);
                }
                self.send_all(vec![
                    Msg::Support(SupportMsg::InputChanged(question)),
                    Msg::Support(SupportMsg::ChatSubmitted),
                ])
            }
            Command::Show => Reply::Lines(render::render(&self.state.view())),
            Command::Help => Reply::Lines(input::HELP.lines().map(str::to_string).collect()),
            Command::Quit => Reply::Quit,
            Command::Empty => Reply::Lines(Vec::new()),
            Command::Invalid(reason) => Reply::Lines(vec![reason]),
        }
    }

    fn send_all(&mut self, msgs: Vec<Msg>) -> Reply {
        let mut lines = Vec::new();
        for msg in msgs {
            lines.extend(self.dispatch(msg));
        }
        lines.extend(self.render_if_dirty().unwrap_or_default());
        Reply::Lines(lines)
    }

    /// Dispatches every timer and dictation event that is ready now.
    pub fn pump(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        for msg in self.runner.poll_events() {
            lines.extend(self.dispatch(msg));
        }
        lines.extend(self.render_if_dirty().unwrap_or_default());
        lines
    }
}

enum Inbound {
    Line(String),
    Event(Msg),
    Tick,
    InputClosed,
}

/// Runs the interactive session until `quit` or end of input.
pub fn run_app(config: &AppConfig) -> anyhow::Result<()> {
    let scheduler: Arc<dyn Scheduler<TimerId>> =
        Arc::new(TimerEngine::<TimerId>::new().context("failed to start the timer engine")?);
    let dictation: Box<dyn Dictation> = match &config.dictation_script {
        Some(phrases) => Box::new(ScriptedDictation::new(phrases.clone())),
        None => Box::new(UnavailableDictation),
    };
    let runner = Arc::new(EffectRunner::new(scheduler, dictation));
    let mut session = Session::from_config(config, Arc::clone(&runner), Box::new(SystemClock));

    let (tx, rx) = mpsc::channel::<Inbound>();
    runner.spawn_event_loop(tx.clone(), Inbound::Event);
    spawn_stdin_reader(tx.clone());

    // Background tick coalesces renders triggered by timers.
    thread::spawn(move || {
        while tx.send(Inbound::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    nova_info!("Interactive session started");
    print_lines(&["NOVA Aerospace. Type `help` for commands.".to_string()])?;
    print_lines(&render::render(&session.state().view()))?;

    while let Ok(inbound) = rx.recv() {
        match inbound {
            Inbound::Line(line) => match session.handle_line(&line) {
                Reply::Lines(lines) => print_lines(&lines)?,
                Reply::Quit => break,
            },
            Inbound::Event(msg) => {
                nova_debug!("Event {:?}", msg);
                print_lines(&session.dispatch(msg))?;
            }
            Inbound::Tick => {
                if let Some(lines) = session.render_if_dirty() {
                    print_lines(&lines)?;
                }
            }
            Inbound::InputClosed => break,
        }
    }

    runner.shutdown();
    nova_info!("Interactive session ended");
    Ok(())
}

fn spawn_stdin_reader(tx: mpsc::Sender<Inbound>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    nova_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            if tx.send(Inbound::Line(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(Inbound::InputClosed);
    });
}

fn print_lines(lines: &[String]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
