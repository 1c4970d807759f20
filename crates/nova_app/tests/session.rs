use std::sync::{Arc, Once};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use nova_app::platform::config::AppConfig;
use nova_app::platform::effects::EffectRunner;
use nova_app::platform::{Reply, Session};
use nova_core::{Author, KnowledgeBase, Step, TimerId};
use nova_engine::{Dictation, FixedClock, ManualScheduler, ScriptedDictation, UnavailableDictation};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(nova_logging::initialize_for_tests);
}

struct Harness {
    session: Session,
    scheduler: Arc<ManualScheduler<TimerId>>,
}

impl Harness {
    fn new(dictation: Box<dyn Dictation>) -> Self {
        init_logging();
        let scheduler = Arc::new(ManualScheduler::<TimerId>::new());
        let runner = Arc::new(EffectRunner::new(scheduler.clone(), dictation));
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap());
        let session = Session::from_config(&AppConfig::default(), runner, Box::new(clock));
        Self { session, scheduler }
    }

    fn plain() -> Self {
        Self::new(Box::new(UnavailableDictation))
    }

    fn line(&mut self, line: &str) -> Vec<String> {
        match self.session.handle_line(line) {
            Reply::Lines(lines) => lines,
            Reply::Quit => panic!("unexpected quit after {line:?}"),
        }
    }

    fn advance(&mut self, millis: u64) -> Vec<String> {
        self.scheduler.advance(Duration::from_millis(millis));
        self.session.pump()
    }

    fn step(&self) -> Step {
        self.session.state().checkout().expect("open checkout").step()
    }
}

fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

#[test]
fn page_checkout_runs_to_invoice() {
    let mut h = Harness::plain();

    let lines = h.line("checkout /checkout/Startup");
    assert!(contains(&lines, "Checkout #1 (page): Startup $999/mo"));

    let lines = h.line("next");
    assert!(contains(&lines, "Please fill in: Email, Full name"));
    assert_eq!(h.step(), Step::Details);

    h.line("set email ripley@nostromo.space");
    h.line("set name Ellen Ripley");
    h.line("next");
    assert_eq!(h.step(), Step::Payment);

    let lines = h.line("set card 4242424242424242");
    assert!(contains(&lines, "4242 4242 4242 4242"));

    let lines = h.line("pay");
    assert!(contains(&lines, "Processing payment..."));

    assert!(h.advance(1499).is_empty());
    assert_eq!(h.step(), Step::Payment);

    let lines = h.advance(1);
    assert_eq!(h.step(), Step::Confirmation);
    assert!(contains(&lines, "Payment successful! Welcome to NOVA Startup."));

    let lines = h.advance(250);
    assert_eq!(
        lines,
        vec!["* confetti * 45 left 0.1-0.3 | 45 right 0.7-0.9".to_string()]
    );

    let lines = h.line("invoice");
    assert!(contains(&lines, "Date:      October 17, 2026"));
    assert!(contains(&lines, "Billed to: Ellen Ripley"));

    h.advance(3000);
    let wizard = h.session.state().checkout().expect("open checkout");
    assert!(!wizard.confetti_running());
    assert_eq!(h.scheduler.active(), 0);
}

#[test]
fn closing_during_payment_cancels_the_settle_timer() {
    let mut h = Harness::plain();
    h.line("buy Enterprise");
    h.line("set email a@b.co");
    h.line("set name Ada");
    h.line("next");
    h.line("pay");
    assert_eq!(h.scheduler.active(), 1);

    h.line("close");
    assert_eq!(h.scheduler.active(), 0);
    assert!(h.session.state().checkout().is_none());
    assert!(h.advance(5000).is_empty());
}

#[test]
fn unknown_plan_is_reported() {
    let mut h = Harness::plain();
    let lines = h.line("checkout Custom");
    assert!(contains(&lines, "Plan not found: \"Custom\""));
    assert!(h.session.state().checkout().is_none());
}

#[test]
fn chat_answer_arrives_after_reply_delay() {
    let mut h = Harness::plain();
    h.line("support");
    h.line("option ai questions");

    let lines = h.line("ask How much does it cost?");
    assert!(contains(&lines, "nova is typing..."));

    assert!(h.advance(499).is_empty());
    h.advance(1);

    let history = h.session.state().support().history();
    let last = history.last().expect("reply delivered");
    assert_eq!(last.author, Author::System);
    assert_eq!(
        last.text,
        KnowledgeBase::nova().respond("How much does it cost?")
    );
}

#[test]
fn asking_outside_the_chat_screen_explains_how_to_open_it() {
    let mut h = Harness::plain();
    let lines = h.line("ask what is nova");
    assert_eq!(
        lines,
        vec!["Chat is not open; run `support` and `option AI Questions` first.".to_string()]
    );

    h.line("support");
    let lines = h.line("ask what is nova");
    assert!(contains(&lines, "Chat is not open"));
    assert!(h.session.state().support().history().is_empty());
    assert_eq!(h.scheduler.active(), 0);

    h.line("option AI Questions");
    let lines = h.line("ask what is nova");
    assert!(contains(&lines, "you: what is nova"));
    assert_eq!(h.session.state().support().pending_replies(), 1);
}

#[test]
fn going_back_drops_the_pending_reply() {
    let mut h = Harness::plain();
    h.line("support");
    h.line("option AI Questions");
    h.line("ask what is nova");
    h.line("option Go Back");

    assert_eq!(h.scheduler.active(), 0);
    h.advance(1000);
    assert_eq!(h.session.state().support().pending_replies(), 0);
}

#[test]
fn contact_now_opens_sales() {
    let mut h = Harness::plain();
    h.line("support");
    h.line("option Contact Sales");
    let lines = h.line("option Contact Now");
    assert_eq!(lines, vec!["Opening contact sales...".to_string()]);
}

#[test]
fn dictation_fills_the_chat_input() {
    let mut h = Harness::new(Box::new(ScriptedDictation::new(["what is nova"])));
    h.line("support");
    let lines = h.line("option AI Questions");
    assert!(contains(&lines, "[mic]"));

    h.line("mic");
    let lines = h.advance(0);
    assert!(contains(&lines, "> what is nova  [listening]"));

    h.line("mic");
    h.advance(0);
    let support = h.session.state().support();
    assert!(!support.is_listening());
    assert_eq!(support.input(), "what is nova");
}

#[test]
fn mic_is_hidden_without_dictation() {
    let mut h = Harness::plain();
    h.line("support");
    let lines = h.line("option AI Questions");
    assert!(!contains(&lines, "[mic]"));
    h.line("mic");
    assert!(!h.session.state().support().is_listening());
}

#[test]
fn team_members_can_be_added_and_removed() {
    let mut h = Harness::plain();
    let lines = h.line("tab team");
    assert!(contains(&lines, "Sarah Connor"));

    h.line("add");
    h.line("member name Ada Lovelace");
    let lines = h.line("save");
    assert!(contains(&lines, "Name and role are required"));

    h.line("member role Navigator");
    let lines = h.line("save");
    assert!(contains(&lines, "Added member #4"));
    assert_eq!(h.session.state().dashboard().roster().len(), 4);

    let lines = h.line("delete 2");
    assert!(contains(&lines, "Remove John Smith (#2) from the team?"));
    h.line("confirm");
    assert_eq!(h.session.state().dashboard().roster().ids(), vec![1, 3, 4]);
}

#[test]
fn bad_input_is_explained_and_quit_stops() {
    let mut h = Harness::plain();
    assert!(contains(&h.line("frobnicate"), "unknown command"));
    assert!(contains(&h.line("checkout /pricing"), "not a checkout route"));
    assert!(h.line("   ").is_empty());
    assert_eq!(h.session.handle_line("quit"), Reply::Quit);
}
