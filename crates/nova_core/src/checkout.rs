use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::confetti::ConfettiBurst;
use crate::format::{format_card_number, format_cvc, format_expiry};
use crate::plan::Plan;
use crate::state::Timings;

pub type WizardId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Details,
    Payment,
    Confirmation,
}

impl Step {
    /// 1-based position shown in the progress indicator.
    pub fn number(self) -> u8 {
        match self {
            Step::Details => 1,
            Step::Payment => 2,
            Step::Confirmation => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Details => "Details",
            Step::Payment => "Payment",
            Step::Confirmation => "Confirmation",
        }
    }
}

/// Where the wizard is hosted. Only the page variant offers an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutVariant {
    Page,
    Modal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckoutField {
    Email,
    Name,
    Company,
    CardNumber,
    Expiry,
    Cvc,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckoutForm {
    pub email: String,
    pub name: String,
    pub company: String,
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
}

impl CheckoutForm {
    pub fn get(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::Email => &self.email,
            CheckoutField::Name => &self.name,
            CheckoutField::Company => &self.company,
            CheckoutField::CardNumber => &self.card_number,
            CheckoutField::Expiry => &self.expiry,
            CheckoutField::Cvc => &self.cvc,
        }
    }

    /// Stores a keystroke, running the payment fields through their formatter.
    pub fn set(&mut self, field: CheckoutField, raw: &str) {
        match field {
            CheckoutField::Email => self.email = raw.to_owned(),
            CheckoutField::Name => self.name = raw.to_owned(),
            CheckoutField::Company => self.company = raw.to_owned(),
            CheckoutField::CardNumber => self.card_number = format_card_number(raw),
            CheckoutField::Expiry => self.expiry = format_expiry(raw),
            CheckoutField::Cvc => self.cvc = format_cvc(raw),
        }
    }

    /// Required detail fields that are still empty.
    pub fn missing_details(&self) -> Vec<CheckoutField> {
        [CheckoutField::Email, CheckoutField::Name]
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }
}

/// Result of asking the wizard to move forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Advanced(Step),
    /// Payment accepted; confirmation follows once the delay elapses.
    Pending { delay: Duration },
    Rejected { missing: Vec<CheckoutField> },
    /// Not applicable in the current step.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    pub number: String,
    pub date: String,
    pub due_date: String,
    pub plan_name: String,
    pub price: String,
    pub billed_to_name: String,
    pub billed_to_email: String,
    pub billed_to_company: Option<String>,
}

impl Invoice {
    pub fn issue(plan: &Plan, form: &CheckoutForm, issued_at: DateTime<Utc>) -> Self {
        let millis = issued_at.timestamp_millis().unsigned_abs().to_string();
        let suffix_start = millis.len().saturating_sub(6);
        let date = issued_at.format("%B %-d, %Y").to_string();
        let company = form.company.trim();
        Self {
            number: format!("INV-{}", &millis[suffix_start..]),
            due_date: date.clone(),
            date,
            plan_name: plan.name.clone(),
            price: plan.price.clone(),
            billed_to_name: form.name.clone(),
            billed_to_email: form.email.clone(),
            billed_to_company: (!company.is_empty()).then(|| company.to_owned()),
        }
    }
}

/// One checkout instance, from details entry to confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutWizard {
    id: WizardId,
    plan: Plan,
    variant: CheckoutVariant,
    step: Step,
    form: CheckoutForm,
    loading: bool,
    confetti: Option<ConfettiBurst>,
    invoice: Option<Invoice>,
}

impl CheckoutWizard {
    pub fn new(id: WizardId, plan: Plan, variant: CheckoutVariant) -> Self {
        Self {
            id,
            plan,
            variant,
            step: Step::Details,
            form: CheckoutForm::default(),
            loading: false,
            confetti: None,
            invoice: None,
        }
    }

    pub fn id(&self) -> WizardId {
        self.id
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn variant(&self) -> CheckoutVariant {
        self.variant
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn confetti_running(&self) -> bool {
        self.confetti.as_ref().is_some_and(|c| !c.is_finished())
    }

    pub fn invoice(&self) -> Option<&Invoice> {
        self.invoice.as_ref()
    }

    /// Fields are editable until the order is confirmed.
    pub fn set_field(&mut self, field: CheckoutField, raw: &str) -> bool {
        if self.step == Step::Confirmation {
            return false;
        }
        self.form.set(field, raw);
        true
    }

    pub fn submit_details(&mut self) -> Transition {
        if self.step != Step::Details {
            return Transition::Ignored;
        }
        let missing = self.form.missing_details();
        if !missing.is_empty() {
            return Transition::Rejected { missing };
        }
        self.step = Step::Payment;
        Transition::Advanced(Step::Payment)
    }

    pub fn submit_payment(&mut self, delay: Duration) -> Transition {
        if self.step != Step::Payment || self.loading {
            return Transition::Ignored;
        }
        self.loading = true;
        Transition::Pending { delay }
    }

    /// Completes a pending payment and starts the confirmation burst.
    pub fn settle_payment(&mut self, timings: &Timings) -> Transition {
        if self.step != Step::Payment || !self.loading {
            return Transition::Ignored;
        }
        self.loading = false;
        self.step = Step::Confirmation;
        self.confetti = Some(ConfettiBurst::new(
            timings.confetti_duration,
            timings.confetti_interval,
        ));
        Transition::Advanced(Step::Confirmation)
    }

    /// Ticks the confirmation burst. `None` means the interval should stop.
    pub fn confetti_tick(&mut self) -> Option<[crate::ParticleVolley; 2]> {
        let burst = self.confetti.as_mut()?;
        let volleys = burst.tick();
        if volleys.is_none() {
            self.confetti = None;
        }
        volleys
    }

    pub fn show_invoice(&mut self, issued_at: DateTime<Utc>) -> bool {
        if self.step != Step::Confirmation || self.variant != CheckoutVariant::Page {
            return false;
        }
        self.invoice = Some(Invoice::issue(&self.plan, &self.form, issued_at));
        true
    }

    pub fn hide_invoice(&mut self) -> bool {
        self.invoice.take().is_some()
    }
}
