//! NOVA core: pure state machines for checkout, support chat and the team
//! dashboard, plus the view models rendered from them.
mod checkout;
mod confetti;
mod dashboard;
mod effect;
mod faq;
mod format;
mod msg;
mod plan;
mod roster;
mod state;
mod support;
mod update;
mod view_model;

pub use checkout::{
    CheckoutField, CheckoutForm, CheckoutVariant, CheckoutWizard, Invoice, Step, Transition,
    WizardId,
};
pub use confetti::{ConfettiBurst, OriginBand, ParticleVolley, MAX_PARTICLES};
pub use dashboard::{
    Dashboard, DashboardOutcome, DashboardTab, MemberField, MemberForm, MemberModal, MissionStat,
    MISSION_STATS,
};
pub use effect::{Effect, TimerId};
pub use faq::{
    normalize_question, respond, FaqMatch, FaqRecord, KnowledgeBase, FALLBACK_ANSWER,
};
pub use format::{
    format_card_number, format_cvc, format_expiry, CARD_NUMBER_MAX_LEN, CVC_MAX_LEN,
    EXPIRY_MAX_LEN,
};
pub use msg::{CheckoutMsg, DashboardMsg, Msg, SupportMsg};
pub use plan::{plan_from_route, Plan, PlanCatalog};
pub use roster::{MemberDraft, MemberId, MemberStatus, Roster, RosterChange, TeamMember};
pub use state::{AppState, CheckoutNotice, Timings};
pub use support::{
    Author, ChatEntry, DictationRequest, OptionOutcome, ReplyId, Screen, SupportOption,
    SupportWidget,
};
pub use update::update;
pub use view_model::{
    AppViewModel, CheckoutView, DashboardView, MemberRowView, ModalView, SupportView,
};
