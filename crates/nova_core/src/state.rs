use std::time::Duration;

use crate::view_model::{
    AppViewModel, CheckoutView, DashboardView, MemberRowView, ModalView, SupportView,
};
use crate::{
    CheckoutField, CheckoutWizard, Dashboard, DashboardOutcome, KnowledgeBase, MemberModal,
    PlanCatalog, SupportWidget, WizardId,
};

/// Timing knobs for the simulated flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub payment_delay: Duration,
    pub chat_reply_delay: Duration,
    pub confetti_duration: Duration,
    pub confetti_interval: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            payment_delay: Duration::from_millis(1500),
            chat_reply_delay: Duration::from_millis(500),
            confetti_duration: Duration::from_secs(3),
            confetti_interval: Duration::from_millis(250),
        }
    }
}

/// Feedback about the last checkout action that did not change step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutNotice {
    PlanNotFound(String),
    MissingFields(Vec<CheckoutField>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    timings: Timings,
    catalog: PlanCatalog,
    knowledge: KnowledgeBase,
    checkout: Option<CheckoutWizard>,
    checkout_notice: Option<CheckoutNotice>,
    last_wizard_id: WizardId,
    support: SupportWidget,
    dashboard: Dashboard,
    last_dashboard_outcome: Option<DashboardOutcome>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            catalog: PlanCatalog::nova(),
            knowledge: KnowledgeBase::nova(),
            checkout: None,
            checkout_notice: None,
            last_wizard_id: 0,
            support: SupportWidget::new(false),
            dashboard: Dashboard::default(),
            last_dashboard_outcome: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    pub fn with_knowledge_base(mut self, knowledge: KnowledgeBase) -> Self {
        self.knowledge = knowledge;
        self
    }

    /// Declares whether the host can transcribe speech into the chat input.
    pub fn with_dictation(mut self, available: bool) -> Self {
        self.support = SupportWidget::new(available);
        self
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    pub fn checkout(&self) -> Option<&CheckoutWizard> {
        self.checkout.as_ref()
    }

    pub fn support(&self) -> &SupportWidget {
        &self.support
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            checkout: self.checkout.as_ref().map(|wizard| CheckoutView {
                wizard_id: wizard.id(),
                plan_name: wizard.plan().name.clone(),
                price: wizard.plan().price.clone(),
                variant: wizard.variant(),
                step: wizard.step(),
                form: wizard.form().clone(),
                loading: wizard.is_loading(),
                confetti_running: wizard.confetti_running(),
                invoice: wizard.invoice().cloned(),
            }),
            checkout_notice: self.checkout_notice.clone(),
            support: SupportView {
                open: self.support.is_open(),
                minimized: self.support.is_minimized(),
                expanded: self.support.is_expanded(),
                screen: self.support.screen(),
                text: self.support.screen().text(),
                options: self.support.screen().options().to_vec(),
                history: self.support.history().to_vec(),
                input: self.support.input().to_owned(),
                awaiting_reply: self.support.pending_replies() > 0,
                mic_available: self.support.dictation_available(),
                listening: self.support.is_listening(),
            },
            dashboard: DashboardView {
                tab: self.dashboard.tab(),
                members: self
                    .dashboard
                    .roster()
                    .members()
                    .iter()
                    .map(MemberRowView::from)
                    .collect(),
                modal: match self.dashboard.modal() {
                    MemberModal::Closed => ModalView::Closed,
                    MemberModal::Add(form) => ModalView::Add(form.clone()),
                    MemberModal::Edit { id, form } => ModalView::Edit {
                        id: *id,
                        form: form.clone(),
                    },
                    MemberModal::ConfirmDelete { id } => ModalView::ConfirmDelete {
                        id: *id,
                        name: self
                            .dashboard
                            .roster()
                            .get(*id)
                            .map(|m| m.name.clone())
                            .unwrap_or_default(),
                    },
                },
                last_outcome: self.last_dashboard_outcome,
            },
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn checkout_mut(&mut self) -> Option<&mut CheckoutWizard> {
        self.checkout.as_mut()
    }

    /// Wizard addressed by a timer, if it is still the open one.
    pub(crate) fn wizard_mut(&mut self, id: WizardId) -> Option<&mut CheckoutWizard> {
        self.checkout.as_mut().filter(|wizard| wizard.id() == id)
    }

    pub(crate) fn replace_checkout(
        &mut self,
        wizard: Option<CheckoutWizard>,
    ) -> Option<CheckoutWizard> {
        std::mem::replace(&mut self.checkout, wizard)
    }

    pub(crate) fn next_wizard_id(&mut self) -> WizardId {
        self.last_wizard_id += 1;
        self.last_wizard_id
    }

    pub(crate) fn set_checkout_notice(&mut self, notice: Option<CheckoutNotice>) {
        self.checkout_notice = notice;
    }

    pub(crate) fn support_parts(&mut self) -> (&mut SupportWidget, &KnowledgeBase) {
        (&mut self.support, &self.knowledge)
    }

    pub(crate) fn support_mut(&mut self) -> &mut SupportWidget {
        &mut self.support
    }

    pub(crate) fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    pub(crate) fn set_dashboard_outcome(&mut self, outcome: DashboardOutcome) {
        self.last_dashboard_outcome = Some(outcome);
    }
}
