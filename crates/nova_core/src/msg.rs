use chrono::{DateTime, Utc};

use crate::{
    CheckoutField, CheckoutVariant, DashboardTab, MemberField, MemberId, MemberStatus,
    SupportOption, TimerId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Checkout(CheckoutMsg),
    Support(SupportMsg),
    Dashboard(DashboardMsg),
    /// A timer started through an effect elapsed.
    TimerFired(TimerId),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutMsg {
    /// A pricing card or checkout route selected a plan.
    Opened {
        plan: String,
        variant: CheckoutVariant,
    },
    FieldEdited {
        field: CheckoutField,
        value: String,
    },
    DetailsSubmitted,
    PaymentSubmitted,
    InvoiceRequested {
        issued_at: DateTime<Utc>,
    },
    InvoiceDismissed,
    /// The wizard was navigated away from or its modal closed.
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupportMsg {
    LauncherClicked,
    MinimizeClicked,
    ExpandToggled,
    OptionChosen(SupportOption),
    InputChanged(String),
    ChatSubmitted,
    MicToggled,
    DictationTranscript(String),
    DictationEnded,
    DictationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardMsg {
    TabSelected(DashboardTab),
    AddClicked,
    EditClicked(MemberId),
    DeleteClicked(MemberId),
    FormFieldEdited { field: MemberField, value: String },
    StatusSelected(MemberStatus),
    FormSubmitted,
    DeleteConfirmed,
    ModalClosed,
}
