use crate::roster::{MemberDraft, MemberId, MemberStatus, Roster, RosterChange, TeamMember};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Team,
}

/// Headline figures on the overview tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionStat {
    pub title: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
}

pub const MISSION_STATS: [MissionStat; 3] = [
    MissionStat {
        title: "Mission Success Rate",
        value: "94%",
        trend: "+2.5%",
    },
    MissionStat {
        title: "Resource Efficiency",
        value: "87%",
        trend: "+1.2%",
    },
    MissionStat {
        title: "Active Missions",
        value: "12",
        trend: "+3",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberField {
    Name,
    Role,
    Email,
    Department,
}

/// Text inputs of the add/edit member modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberForm {
    pub name: String,
    pub role: String,
    pub email: String,
    pub department: String,
    pub status: MemberStatus,
}

impl MemberForm {
    pub fn from_member(member: &TeamMember) -> Self {
        Self {
            name: member.name.clone(),
            role: member.role.clone(),
            email: member.email.clone().unwrap_or_default(),
            department: member.department.clone().unwrap_or_default(),
            status: member.status,
        }
    }

    pub fn set(&mut self, field: MemberField, value: impl Into<String>) {
        let value = value.into();
        match field {
            MemberField::Name => self.name = value,
            MemberField::Role => self.role = value,
            MemberField::Email => self.email = value,
            MemberField::Department => self.department = value,
        }
    }

    /// Name and role are required; blank optional fields become `None`.
    pub fn to_draft(&self) -> Option<MemberDraft> {
        if self.name.is_empty() || self.role.is_empty() {
            return None;
        }
        let optional = |value: &str| (!value.trim().is_empty()).then(|| value.to_owned());
        Some(MemberDraft {
            name: self.name.clone(),
            role: self.role.clone(),
            status: self.status,
            email: optional(&self.email),
            department: optional(&self.department),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MemberModal {
    #[default]
    Closed,
    Add(MemberForm),
    Edit { id: MemberId, form: MemberForm },
    ConfirmDelete { id: MemberId },
}

/// What a modal submission did to the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardOutcome {
    Added(MemberId),
    Edited(MemberId, RosterChange),
    Deleted(MemberId, RosterChange),
    /// Required fields missing; the modal stays open.
    Incomplete,
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    tab: DashboardTab,
    roster: Roster,
    modal: MemberModal,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Roster::nova_crew())
    }
}

impl Dashboard {
    pub fn new(roster: Roster) -> Self {
        Self {
            tab: DashboardTab::Overview,
            roster,
            modal: MemberModal::Closed,
        }
    }

    pub fn tab(&self) -> DashboardTab {
        self.tab
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn modal(&self) -> &MemberModal {
        &self.modal
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.tab = tab;
    }

    pub fn open_add(&mut self) {
        self.modal = MemberModal::Add(MemberForm::default());
    }

    pub fn open_edit(&mut self, id: MemberId) -> bool {
        match self.roster.get(id) {
            Some(member) => {
                self.modal = MemberModal::Edit {
                    id,
                    form: MemberForm::from_member(member),
                };
                true
            }
            None => false,
        }
    }

    pub fn open_delete(&mut self, id: MemberId) -> bool {
        if self.roster.get(id).is_none() {
            return false;
        }
        self.modal = MemberModal::ConfirmDelete { id };
        true
    }

    pub fn close_modal(&mut self) {
        self.modal = MemberModal::Closed;
    }

    fn form_mut(&mut self) -> Option<&mut MemberForm> {
        match &mut self.modal {
            MemberModal::Add(form) | MemberModal::Edit { form, .. } => Some(form),
            MemberModal::Closed | MemberModal::ConfirmDelete { .. } => None,
        }
    }

    pub fn edit_form(&mut self, field: MemberField, value: impl Into<String>) -> bool {
        match self.form_mut() {
            Some(form) => {
                form.set(field, value);
                true
            }
            None => false,
        }
    }

    pub fn select_status(&mut self, status: MemberStatus) -> bool {
        match self.form_mut() {
            Some(form) => {
                form.status = status;
                true
            }
            None => false,
        }
    }

    /// Submits the add/edit modal. A successful submission closes it.
    pub fn submit_form(&mut self) -> DashboardOutcome {
        let outcome = match &self.modal {
            MemberModal::Add(form) => match form.to_draft() {
                Some(draft) => DashboardOutcome::Added(self.roster.add(draft)),
                None => DashboardOutcome::Incomplete,
            },
            MemberModal::Edit { id, form } => match form.to_draft() {
                Some(draft) => DashboardOutcome::Edited(*id, self.roster.edit(*id, draft)),
                None => DashboardOutcome::Incomplete,
            },
            MemberModal::Closed | MemberModal::ConfirmDelete { .. } => DashboardOutcome::Ignored,
        };
        if matches!(
            outcome,
            DashboardOutcome::Added(_) | DashboardOutcome::Edited(..)
        ) {
            self.modal = MemberModal::Closed;
        }
        outcome
    }

    pub fn confirm_delete(&mut self) -> DashboardOutcome {
        let MemberModal::ConfirmDelete { id } = self.modal else {
            return DashboardOutcome::Ignored;
        };
        self.modal = MemberModal::Closed;
        DashboardOutcome::Deleted(id, self.roster.delete(id))
    }
}
