use nova_logging::{nova_debug, nova_info, nova_warn};

use crate::state::CheckoutNotice;
use crate::{
    AppState, CheckoutMsg, CheckoutWizard, DashboardMsg, DashboardOutcome, DictationRequest,
    Effect, Msg, OptionOutcome, RosterChange, Step, SupportMsg, TimerId, Transition,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Checkout(msg) => update_checkout(&mut state, msg),
        Msg::Support(msg) => update_support(&mut state, msg),
        Msg::Dashboard(msg) => update_dashboard(&mut state, msg),
        Msg::TimerFired(timer) => timer_fired(&mut state, timer),
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn update_checkout(state: &mut AppState, msg: CheckoutMsg) -> Vec<Effect> {
    let timings = *state.timings();
    match msg {
        CheckoutMsg::Opened { plan, variant } => {
            let effects = tear_down_checkout(state);
            match state.catalog().purchasable(&plan).cloned() {
                Some(plan) => {
                    let id = state.next_wizard_id();
                    nova_info!("Checkout {} opened for plan {:?} ({:?})", id, plan.name, variant);
                    state.replace_checkout(Some(CheckoutWizard::new(id, plan, variant)));
                    state.set_checkout_notice(None);
                }
                None => {
                    nova_warn!("Checkout requested for unknown plan {:?}", plan);
                    state.set_checkout_notice(Some(CheckoutNotice::PlanNotFound(plan)));
                }
            }
            state.mark_dirty();
            effects
        }
        CheckoutMsg::FieldEdited { field, value } => {
            if state
                .checkout_mut()
                .is_some_and(|wizard| wizard.set_field(field, &value))
            {
                state.mark_dirty();
            }
            Vec::new()
        }
        CheckoutMsg::DetailsSubmitted => {
            let Some(wizard) = state.checkout_mut() else {
                return Vec::new();
            };
            match wizard.submit_details() {
                Transition::Advanced(step) => {
                    nova_debug!("Checkout {} advanced to {:?}", wizard.id(), step);
                    state.set_checkout_notice(None);
                    state.mark_dirty();
                }
                Transition::Rejected { missing } => {
                    state.set_checkout_notice(Some(CheckoutNotice::MissingFields(missing)));
                    state.mark_dirty();
                }
                Transition::Pending { .. } | Transition::Ignored => {}
            }
            Vec::new()
        }
        CheckoutMsg::PaymentSubmitted => {
            let Some(wizard) = state.checkout_mut() else {
                return Vec::new();
            };
            let id = wizard.id();
            match wizard.submit_payment(timings.payment_delay) {
                Transition::Pending { delay } => {
                    nova_debug!("Checkout {} processing payment for {:?}", id, delay);
                    state.mark_dirty();
                    vec![Effect::StartTimer {
                        timer: TimerId::PaymentSettle(id),
                        after: delay,
                    }]
                }
                _ => Vec::new(),
            }
        }
        CheckoutMsg::InvoiceRequested { issued_at } => {
            if state
                .checkout_mut()
                .is_some_and(|wizard| wizard.show_invoice(issued_at))
            {
                state.mark_dirty();
            }
            Vec::new()
        }
        CheckoutMsg::InvoiceDismissed => {
            if state.checkout_mut().is_some_and(CheckoutWizard::hide_invoice) {
                state.mark_dirty();
            }
            Vec::new()
        }
        CheckoutMsg::Closed => {
            let effects = tear_down_checkout(state);
            state.set_checkout_notice(None);
            state.mark_dirty();
            effects
        }
    }
}

/// Drops the open wizard and cancels the timers it still owns.
fn tear_down_checkout(state: &mut AppState) -> Vec<Effect> {
    let Some(wizard) = state.replace_checkout(None) else {
        return Vec::new();
    };
    nova_debug!("Checkout {} closed at {:?}", wizard.id(), wizard.step());
    let mut effects = Vec::new();
    if wizard.is_loading() {
        effects.push(Effect::CancelTimer {
            timer: TimerId::PaymentSettle(wizard.id()),
        });
    }
    if wizard.confetti_running() {
        effects.push(Effect::CancelTimer {
            timer: TimerId::Confetti(wizard.id()),
        });
    }
    effects
}

fn timer_fired(state: &mut AppState, timer: TimerId) -> Vec<Effect> {
    let timings = *state.timings();
    match timer {
        TimerId::PaymentSettle(id) => {
            let Some(wizard) = state.wizard_mut(id) else {
                nova_debug!("Ignoring payment timer for closed checkout {}", id);
                return Vec::new();
            };
            match wizard.settle_payment(&timings) {
                Transition::Advanced(Step::Confirmation) => {
                    nova_info!("Checkout {} confirmed", id);
                    state.mark_dirty();
                    vec![Effect::StartInterval {
                        timer: TimerId::Confetti(id),
                        every: timings.confetti_interval,
                    }]
                }
                _ => Vec::new(),
            }
        }
        TimerId::Confetti(id) => {
            match state.wizard_mut(id).and_then(CheckoutWizard::confetti_tick) {
                Some(volleys) => vec![Effect::LaunchConfetti { volleys }],
                None => {
                    state.mark_dirty();
                    vec![Effect::CancelTimer { timer }]
                }
            }
        }
        TimerId::ChatReply(reply_id) => {
            if state.support_mut().deliver(reply_id) {
                state.mark_dirty();
            }
            Vec::new()
        }
    }
}

fn update_support(state: &mut AppState, msg: SupportMsg) -> Vec<Effect> {
    let delay = state.timings().chat_reply_delay;
    let support = state.support_mut();
    let mut effects = Vec::new();
    let changed = match msg {
        SupportMsg::LauncherClicked => {
            support.toggle_open();
            true
        }
        SupportMsg::MinimizeClicked => {
            support.minimize();
            true
        }
        SupportMsg::ExpandToggled => support.toggle_expanded(),
        SupportMsg::OptionChosen(option) => match support.choose(option) {
            OptionOutcome::Navigated(_) => true,
            OptionOutcome::WentBack { dropped } => {
                effects.extend(dropped.into_iter().map(|reply_id| Effect::CancelTimer {
                    timer: TimerId::ChatReply(reply_id),
                }));
                true
            }
            OptionOutcome::ContactRequested => {
                effects.push(Effect::OpenContactSales);
                false
            }
            OptionOutcome::Unhandled => {
                nova_debug!("Support option {:?} has no action", option);
                false
            }
        },
        SupportMsg::InputChanged(text) => {
            support.set_input(text);
            true
        }
        SupportMsg::ChatSubmitted => {
            let (support, knowledge) = state.support_parts();
            match support.submit(knowledge) {
                Some(reply_id) => {
                    effects.push(Effect::StartTimer {
                        timer: TimerId::ChatReply(reply_id),
                        after: delay,
                    });
                    true
                }
                None => false,
            }
        }
        SupportMsg::MicToggled => match support.toggle_listening() {
            Some(DictationRequest::Start) => {
                effects.push(Effect::StartDictation);
                true
            }
            Some(DictationRequest::Stop) => {
                effects.push(Effect::StopDictation);
                false
            }
            None => {
                nova_debug!("Dictation unavailable; microphone toggle ignored");
                false
            }
        },
        SupportMsg::DictationTranscript(transcript) => {
            support.dictation_transcript(transcript);
            true
        }
        SupportMsg::DictationEnded => {
            support.dictation_ended();
            true
        }
        SupportMsg::DictationFailed(reason) => {
            nova_warn!("Speech recognition error: {}", reason);
            support.dictation_ended();
            true
        }
    };

    if changed {
        state.mark_dirty();
    }
    effects
}

fn update_dashboard(state: &mut AppState, msg: DashboardMsg) -> Vec<Effect> {
    let dashboard = state.dashboard_mut();
    let (changed, outcome) = match msg {
        DashboardMsg::TabSelected(tab) => {
            dashboard.select_tab(tab);
            (true, None)
        }
        DashboardMsg::AddClicked => {
            dashboard.open_add();
            (true, None)
        }
        DashboardMsg::EditClicked(id) => (dashboard.open_edit(id), None),
        DashboardMsg::DeleteClicked(id) => (dashboard.open_delete(id), None),
        DashboardMsg::FormFieldEdited { field, value } => (dashboard.edit_form(field, value), None),
        DashboardMsg::StatusSelected(status) => (dashboard.select_status(status), None),
        DashboardMsg::FormSubmitted => (true, Some(dashboard.submit_form())),
        DashboardMsg::DeleteConfirmed => (true, Some(dashboard.confirm_delete())),
        DashboardMsg::ModalClosed => {
            dashboard.close_modal();
            (true, None)
        }
    };

    if let Some(outcome) = outcome {
        log_dashboard_outcome(outcome);
        state.set_dashboard_outcome(outcome);
    }
    if changed {
        state.mark_dirty();
    }
    Vec::new()
}

fn log_dashboard_outcome(outcome: DashboardOutcome) {
    match outcome {
        DashboardOutcome::Added(id) => nova_info!("Team member {} added", id),
        DashboardOutcome::Edited(id, RosterChange::Applied) => {
            nova_info!("Team member {} updated", id)
        }
        DashboardOutcome::Deleted(id, RosterChange::Applied) => {
            nova_info!("Team member {} removed", id)
        }
        DashboardOutcome::Edited(id, RosterChange::NotFound)
        | DashboardOutcome::Deleted(id, RosterChange::NotFound) => {
            nova_debug!("Team member {} not found; roster unchanged", id)
        }
        DashboardOutcome::Incomplete => nova_debug!("Member form submitted without name or role"),
        DashboardOutcome::Ignored => {}
    }
}
