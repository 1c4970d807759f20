pub type MemberId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberStatus {
    #[default]
    Active,
    Away,
}

impl MemberStatus {
    pub fn label(self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Away => "away",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "active" => Some(MemberStatus::Active),
            "away" => Some(MemberStatus::Away),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    pub role: String,
    pub status: MemberStatus,
    pub email: Option<String>,
    pub department: Option<String>,
}

/// A team member without an id, as entered in the member form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberDraft {
    pub name: String,
    pub role: String,
    pub status: MemberStatus,
    pub email: Option<String>,
    pub department: Option<String>,
}

impl MemberDraft {
    pub fn new(name: impl Into<String>, role: impl Into<String>, status: MemberStatus) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            status,
            email: None,
            department: None,
        }
    }

    fn into_member(self, id: MemberId) -> TeamMember {
        TeamMember {
            id,
            name: self.name,
            role: self.role,
            status: self.status,
            email: self.email,
            department: self.department,
        }
    }
}

impl From<&TeamMember> for MemberDraft {
    fn from(member: &TeamMember) -> Self {
        Self {
            name: member.name.clone(),
            role: member.role.clone(),
            status: member.status,
            email: member.email.clone(),
            department: member.department.clone(),
        }
    }
}

/// Outcome of an edit or delete addressed by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterChange {
    Applied,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    members: Vec<TeamMember>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// The crew shown on a fresh dashboard.
    pub fn nova_crew() -> Self {
        let mut sarah = MemberDraft::new("Sarah Connor", "Mission Specialist", MemberStatus::Active);
        sarah.email = Some("sarah.connor@nova.space".to_owned());
        sarah.department = Some("Operations".to_owned());

        let mut roster = Self::new();
        roster.add(sarah);
        roster.add(MemberDraft::new("John Smith", "Engineer", MemberStatus::Away));
        roster.add(MemberDraft::new("Maria Garcia", "Data Analyst", MemberStatus::Active));
        roster
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: MemberId) -> Option<&TeamMember> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn ids(&self) -> Vec<MemberId> {
        self.members.iter().map(|member| member.id).collect()
    }

    /// Appends the member with `id = max(existing ids, 0) + 1`.
    pub fn add(&mut self, draft: MemberDraft) -> MemberId {
        let id = self.members.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        self.members.push(draft.into_member(id));
        id
    }

    /// Replaces every field of the member but its id.
    pub fn edit(&mut self, id: MemberId, draft: MemberDraft) -> RosterChange {
        match self.members.iter_mut().find(|member| member.id == id) {
            Some(member) => {
                *member = draft.into_member(id);
                RosterChange::Applied
            }
            None => RosterChange::NotFound,
        }
    }

    pub fn delete(&mut self, id: MemberId) -> RosterChange {
        let before = self.members.len();
        self.members.retain(|member| member.id != id);
        if self.members.len() == before {
            RosterChange::NotFound
        } else {
            RosterChange::Applied
        }
    }
}
