use crate::{
    ChatEntry, CheckoutForm, CheckoutNotice, CheckoutVariant, DashboardOutcome, DashboardTab,
    Invoice, MemberForm, MemberId, MemberStatus, Screen, Step, SupportOption, TeamMember,
    WizardId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub checkout: Option<CheckoutView>,
    pub checkout_notice: Option<CheckoutNotice>,
    pub support: SupportView,
    pub dashboard: DashboardView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutView {
    pub wizard_id: WizardId,
    pub plan_name: String,
    pub price: String,
    pub variant: CheckoutVariant,
    pub step: Step,
    pub form: CheckoutForm,
    pub loading: bool,
    pub confetti_running: bool,
    pub invoice: Option<Invoice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportView {
    pub open: bool,
    pub minimized: bool,
    pub expanded: bool,
    pub screen: Screen,
    pub text: &'static str,
    pub options: Vec<SupportOption>,
    pub history: Vec<ChatEntry>,
    pub input: String,
    pub awaiting_reply: bool,
    pub mic_available: bool,
    pub listening: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub tab: DashboardTab,
    pub members: Vec<MemberRowView>,
    pub modal: ModalView,
    pub last_outcome: Option<DashboardOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRowView {
    pub id: MemberId,
    pub name: String,
    pub role: String,
    pub status: MemberStatus,
    pub email: Option<String>,
    pub department: Option<String>,
}

impl From<&TeamMember> for MemberRowView {
    fn from(member: &TeamMember) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            role: member.role.clone(),
            status: member.status,
            email: member.email.clone(),
            department: member.department.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalView {
    Closed,
    Add(MemberForm),
    Edit { id: MemberId, form: MemberForm },
    ConfirmDelete { id: MemberId, name: String },
}
