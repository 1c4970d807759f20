use nova_core::{
    update, AppState, DashboardMsg, DashboardOutcome, DashboardTab, MemberDraft, MemberField,
    MemberStatus, ModalView, Msg, Roster, RosterChange,
};
use pretty_assertions::assert_eq;

fn send(state: AppState, msg: DashboardMsg) -> AppState {
    let (state, effects) = update(state, Msg::Dashboard(msg));
    assert!(effects.is_empty());
    state
}

fn ids(state: &AppState) -> Vec<u32> {
    state.view().dashboard.members.iter().map(|m| m.id).collect()
}

fn draft(name: &str) -> MemberDraft {
    MemberDraft::new(name, "Pilot", MemberStatus::Active)
}

#[test]
fn add_assigns_max_plus_one() {
    let mut roster = Roster::nova_crew();
    assert_eq!(roster.ids(), vec![1, 2, 3]);

    assert_eq!(roster.add(draft("Dallas")), 4);
    assert_eq!(roster.ids(), vec![1, 2, 3, 4]);
}

#[test]
fn delete_leaves_remaining_ids_untouched() {
    let mut roster = Roster::nova_crew();
    assert_eq!(roster.delete(2), RosterChange::Applied);
    assert_eq!(roster.ids(), vec![1, 3]);

    // Gaps are not reused; only the maximum matters.
    assert_eq!(roster.add(draft("Lambert")), 4);
    assert_eq!(roster.ids(), vec![1, 3, 4]);
}

#[test]
fn add_to_empty_roster_starts_at_one() {
    let mut roster = Roster::new();
    assert_eq!(roster.add(draft("Kane")), 1);
}

#[test]
fn edit_preserves_id() {
    let mut roster = Roster::nova_crew();
    let mut replacement = MemberDraft::new("John Smith", "Chief Engineer", MemberStatus::Active);
    replacement.department = Some("Propulsion".to_string());

    assert_eq!(roster.edit(2, replacement), RosterChange::Applied);
    let member = roster.get(2).expect("member 2");
    assert_eq!(member.id, 2);
    assert_eq!(member.role, "Chief Engineer");
    assert_eq!(member.status, MemberStatus::Active);
    assert_eq!(member.department.as_deref(), Some("Propulsion"));
}

#[test]
fn edit_and_delete_of_missing_id_change_nothing() {
    let mut roster = Roster::nova_crew();
    let before = roster.clone();

    assert_eq!(roster.edit(42, draft("Ash")), RosterChange::NotFound);
    assert_eq!(roster.delete(42), RosterChange::NotFound);
    assert_eq!(roster, before);
}

#[test]
fn add_modal_requires_name_and_role() {
    let state = send(AppState::new(), DashboardMsg::TabSelected(DashboardTab::Team));
    let state = send(state, DashboardMsg::AddClicked);
    let state = send(
        state,
        DashboardMsg::FormFieldEdited {
            field: MemberField::Name,
            value: "Parker".to_string(),
        },
    );
    let state = send(state, DashboardMsg::FormSubmitted);

    let view = state.view().dashboard;
    assert_eq!(view.last_outcome, Some(DashboardOutcome::Incomplete));
    assert!(matches!(view.modal, ModalView::Add(_)));
    assert_eq!(ids(&state), vec![1, 2, 3]);

    let state = send(
        state,
        DashboardMsg::FormFieldEdited {
            field: MemberField::Role,
            value: "Engineer".to_string(),
        },
    );
    let state = send(state, DashboardMsg::StatusSelected(MemberStatus::Away));
    let state = send(state, DashboardMsg::FormSubmitted);

    let view = state.view().dashboard;
    assert_eq!(view.last_outcome, Some(DashboardOutcome::Added(4)));
    assert_eq!(view.modal, ModalView::Closed);
    let parker = view.members.last().expect("new member");
    assert_eq!(parker.name, "Parker");
    assert_eq!(parker.status, MemberStatus::Away);
    assert_eq!(parker.email, None);
}

#[test]
fn edit_modal_is_prefilled_and_keeps_id() {
    let state = send(AppState::new(), DashboardMsg::EditClicked(1));
    match state.view().dashboard.modal {
        ModalView::Edit { id, form } => {
            assert_eq!(id, 1);
            assert_eq!(form.name, "Sarah Connor");
            assert_eq!(form.email, "sarah.connor@nova.space");
        }
        other => panic!("expected edit modal, got {other:?}"),
    }

    let state = send(
        state,
        DashboardMsg::FormFieldEdited {
            field: MemberField::Email,
            value: String::new(),
        },
    );
    let state = send(state, DashboardMsg::FormSubmitted);

    let view = state.view().dashboard;
    assert_eq!(
        view.last_outcome,
        Some(DashboardOutcome::Edited(1, RosterChange::Applied))
    );
    assert_eq!(view.members[0].id, 1);
    assert_eq!(view.members[0].email, None);
    assert_eq!(view.members[0].department.as_deref(), Some("Operations"));
}

#[test]
fn delete_requires_confirmation() {
    let state = send(AppState::new(), DashboardMsg::DeleteClicked(2));
    assert_eq!(
        state.view().dashboard.modal,
        ModalView::ConfirmDelete {
            id: 2,
            name: "John Smith".to_string()
        }
    );

    let state = send(state, DashboardMsg::ModalClosed);
    assert_eq!(ids(&state), vec![1, 2, 3]);

    let state = send(state, DashboardMsg::DeleteClicked(2));
    let state = send(state, DashboardMsg::DeleteConfirmed);
    assert_eq!(ids(&state), vec![1, 3]);
    assert_eq!(
        state.view().dashboard.last_outcome,
        Some(DashboardOutcome::Deleted(2, RosterChange::Applied))
    );
}

#[test]
fn actions_on_missing_member_do_not_open_modals() {
    let mut state = AppState::new();
    state.consume_dirty();

    let mut state = send(state, DashboardMsg::EditClicked(99));
    assert_eq!(state.view().dashboard.modal, ModalView::Closed);
    assert!(!state.consume_dirty());

    let mut state = send(state, DashboardMsg::DeleteClicked(99));
    assert_eq!(state.view().dashboard.modal, ModalView::Closed);
    assert!(!state.consume_dirty());
}
