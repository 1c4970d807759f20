use std::sync::Once;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use nova_core::{
    update, AppState, CheckoutField, CheckoutMsg, CheckoutNotice, CheckoutVariant, Effect, Msg,
    OriginBand, Step, TimerId, Timings,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(nova_logging::initialize_for_tests);
}

fn send(state: AppState, msg: CheckoutMsg) -> (AppState, Vec<Effect>) {
    update(state, Msg::Checkout(msg))
}

fn open(plan: &str, variant: CheckoutVariant) -> AppState {
    let (state, effects) = send(
        AppState::new(),
        CheckoutMsg::Opened {
            plan: plan.to_string(),
            variant,
        },
    );
    assert!(effects.is_empty());
    state
}

fn edit(state: AppState, field: CheckoutField, value: &str) -> AppState {
    send(
        state,
        CheckoutMsg::FieldEdited {
            field,
            value: value.to_string(),
        },
    )
    .0
}

fn step_of(state: &AppState) -> Step {
    state.checkout().expect("open checkout").step()
}

fn with_details(state: AppState) -> AppState {
    let state = edit(state, CheckoutField::Email, "ripley@nostromo.space");
    let state = edit(state, CheckoutField::Name, "Ellen Ripley");
    let (state, effects) = send(state, CheckoutMsg::DetailsSubmitted);
    assert!(effects.is_empty());
    assert_eq!(step_of(&state), Step::Payment);
    state
}

fn wizard_id(state: &AppState) -> u64 {
    state.checkout().expect("open checkout").id()
}

#[test]
fn wizard_starts_in_details() {
    init_logging();
    let mut state = open("Startup", CheckoutVariant::Page);
    let view = state.view();

    let checkout = view.checkout.expect("checkout view");
    assert_eq!(checkout.step, Step::Details);
    assert_eq!(checkout.plan_name, "Startup");
    assert_eq!(checkout.price, "$999/mo");
    assert!(!checkout.loading);
    assert!(state.consume_dirty());
}

#[test]
fn details_without_name_stay_in_details() {
    init_logging();
    let state = open("Startup", CheckoutVariant::Page);
    let state = edit(state, CheckoutField::Email, "ripley@nostromo.space");

    let (state, effects) = send(state, CheckoutMsg::DetailsSubmitted);

    assert!(effects.is_empty());
    assert_eq!(step_of(&state), Step::Details);
    assert_eq!(
        state.view().checkout_notice,
        Some(CheckoutNotice::MissingFields(vec![CheckoutField::Name]))
    );
}

#[test]
fn details_with_email_and_name_advance_to_payment() {
    init_logging();
    let state = with_details(open("Enterprise", CheckoutVariant::Modal));
    assert_eq!(state.view().checkout_notice, None);
}

#[test]
fn payment_fields_are_formatted_on_entry() {
    init_logging();
    let state = with_details(open("Startup", CheckoutVariant::Page));
    let state = edit(state, CheckoutField::CardNumber, "4111111111111111");
    let state = edit(state, CheckoutField::Expiry, "1225");
    let state = edit(state, CheckoutField::Cvc, "12a34");

    let form = state.view().checkout.expect("checkout view").form;
    assert_eq!(form.card_number, "4111 1111 1111 1111");
    assert_eq!(form.expiry, "12/25");
    assert_eq!(form.cvc, "123");
}

#[test]
fn payment_confirms_only_after_timer() {
    init_logging();
    let state = with_details(open("Startup", CheckoutVariant::Page));
    let id = wizard_id(&state);

    let (state, effects) = send(state, CheckoutMsg::PaymentSubmitted);
    assert_eq!(
        effects,
        vec![Effect::StartTimer {
            timer: TimerId::PaymentSettle(id),
            after: Duration::from_millis(1500),
        }]
    );
    assert_eq!(step_of(&state), Step::Payment);
    assert!(state.checkout().unwrap().is_loading());

    // A second click while loading schedules nothing.
    let (state, effects) = send(state, CheckoutMsg::PaymentSubmitted);
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::TimerFired(TimerId::PaymentSettle(id)));
    assert_eq!(step_of(&state), Step::Confirmation);
    assert!(!state.checkout().unwrap().is_loading());
    assert_eq!(
        effects,
        vec![Effect::StartInterval {
            timer: TimerId::Confetti(id),
            every: Duration::from_millis(250),
        }]
    );
}

#[test]
fn payment_uses_configured_delay() {
    init_logging();
    let timings = Timings {
        payment_delay: Duration::from_millis(10),
        ..Timings::default()
    };
    let (state, _) = update(
        AppState::new().with_timings(timings),
        Msg::Checkout(CheckoutMsg::Opened {
            plan: "Startup".to_string(),
            variant: CheckoutVariant::Modal,
        }),
    );
    let state = with_details(state);
    let (_state, effects) = send(state, CheckoutMsg::PaymentSubmitted);

    assert!(matches!(
        effects.as_slice(),
        [Effect::StartTimer { after, .. }] if *after == Duration::from_millis(10)
    ));
}

#[test]
fn confetti_runs_for_three_seconds_then_cancels() {
    init_logging();
    let state = with_details(open("Startup", CheckoutVariant::Page));
    let id = wizard_id(&state);
    let (state, _) = send(state, CheckoutMsg::PaymentSubmitted);
    let (mut state, _) = update(state, Msg::TimerFired(TimerId::PaymentSettle(id)));
    assert!(state.checkout().unwrap().confetti_running());

    let mut volleys = Vec::new();
    loop {
        let (next, effects) = update(state, Msg::TimerFired(TimerId::Confetti(id)));
        state = next;
        match effects.as_slice() {
            [Effect::LaunchConfetti { volleys: pair }] => volleys.push(*pair),
            [Effect::CancelTimer { timer }] => {
                assert_eq!(*timer, TimerId::Confetti(id));
                break;
            }
            other => panic!("unexpected effects {other:?}"),
        }
    }

    assert_eq!(volleys.len(), 11);
    assert_eq!(volleys[0][0].particles, 45);
    assert_eq!(volleys[0][0].origin, OriginBand::Left);
    assert_eq!(volleys[0][1].origin, OriginBand::Right);
    assert_eq!(volleys[0][0].origin.range(), (0.1, 0.3));
    assert_eq!(volleys[0][1].origin.range(), (0.7, 0.9));
    assert!(volleys.windows(2).all(|w| w[0][0].particles >= w[1][0].particles));
    assert!(!state.checkout().unwrap().confetti_running());
}

#[test]
fn closing_cancels_outstanding_timers() {
    init_logging();
    let state = with_details(open("Startup", CheckoutVariant::Modal));
    let id = wizard_id(&state);
    let (state, _) = send(state, CheckoutMsg::PaymentSubmitted);

    let (state, effects) = send(state, CheckoutMsg::Closed);
    assert_eq!(
        effects,
        vec![Effect::CancelTimer {
            timer: TimerId::PaymentSettle(id)
        }]
    );
    assert!(state.checkout().is_none());

    // A late firing for the closed wizard is ignored.
    let (state, effects) = update(state, Msg::TimerFired(TimerId::PaymentSettle(id)));
    assert!(effects.is_empty());
    assert!(state.checkout().is_none());
}

#[test]
fn stale_timer_does_not_touch_new_wizard() {
    init_logging();
    let state = with_details(open("Startup", CheckoutVariant::Modal));
    let old_id = wizard_id(&state);
    let (state, _) = send(state, CheckoutMsg::PaymentSubmitted);

    let (state, effects) = send(
        state,
        CheckoutMsg::Opened {
            plan: "Enterprise".to_string(),
            variant: CheckoutVariant::Modal,
        },
    );
    assert_eq!(
        effects,
        vec![Effect::CancelTimer {
            timer: TimerId::PaymentSettle(old_id)
        }]
    );
    let state = with_details(state);
    assert_ne!(wizard_id(&state), old_id);

    let (state, effects) = update(state, Msg::TimerFired(TimerId::PaymentSettle(old_id)));
    assert!(effects.is_empty());
    assert_eq!(step_of(&state), Step::Payment);
}

#[test]
fn unknown_or_sales_only_plan_is_not_found() {
    init_logging();
    for plan in ["Custom", "Galaxy"] {
        let mut state = open(plan, CheckoutVariant::Page);
        assert!(state.checkout().is_none());
        assert_eq!(
            state.view().checkout_notice,
            Some(CheckoutNotice::PlanNotFound(plan.to_string()))
        );
        assert!(state.consume_dirty());
    }
}

#[test]
fn confirmed_fields_are_frozen() {
    init_logging();
    let state = with_details(open("Startup", CheckoutVariant::Page));
    let id = wizard_id(&state);
    let (state, _) = send(state, CheckoutMsg::PaymentSubmitted);
    let (state, _) = update(state, Msg::TimerFired(TimerId::PaymentSettle(id)));

    let state = edit(state, CheckoutField::Name, "Someone Else");
    assert_eq!(state.checkout().unwrap().form().name, "Ellen Ripley");
}

#[test]
fn invoice_is_issued_on_confirmed_page_checkout() {
    init_logging();
    let state = with_details(open("Startup", CheckoutVariant::Page));
    let state = edit(state, CheckoutField::Company, "Weyland-Yutani");
    let id = wizard_id(&state);
    let (state, _) = send(state, CheckoutMsg::PaymentSubmitted);
    let (state, _) = update(state, Msg::TimerFired(TimerId::PaymentSettle(id)));

    let issued_at = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
    let (state, _) = send(state, CheckoutMsg::InvoiceRequested { issued_at });

    let invoice = state
        .view()
        .checkout
        .and_then(|c| c.invoice)
        .expect("invoice");
    let millis = issued_at.timestamp_millis().to_string();
    assert_eq!(invoice.number, format!("INV-{}", &millis[millis.len() - 6..]));
    assert_eq!(invoice.date, "October 17, 2026");
    assert_eq!(invoice.due_date, invoice.date);
    assert_eq!(invoice.plan_name, "Startup");
    assert_eq!(invoice.price, "$999/mo");
    assert_eq!(invoice.billed_to_name, "Ellen Ripley");
    assert_eq!(invoice.billed_to_company.as_deref(), Some("Weyland-Yutani"));

    let (state, _) = send(state, CheckoutMsg::InvoiceDismissed);
    assert!(state.checkout().unwrap().invoice().is_none());
}

#[test]
fn modal_checkout_has_no_invoice() {
    init_logging();
    let state = with_details(open("Startup", CheckoutVariant::Modal));
    let id = wizard_id(&state);
    let (state, _) = send(state, CheckoutMsg::PaymentSubmitted);
    let (state, _) = update(state, Msg::TimerFired(TimerId::PaymentSettle(id)));

    let (state, _) = send(
        state,
        CheckoutMsg::InvoiceRequested {
            issued_at: Utc::now(),
        },
    );
    assert!(state.checkout().unwrap().invoice().is_none());
}
