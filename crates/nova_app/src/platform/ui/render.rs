use nova_core::{
    AppViewModel, Author, CheckoutField, CheckoutNotice, CheckoutVariant, CheckoutView,
    DashboardOutcome, DashboardTab, DashboardView, Invoice, MemberForm, ModalView, OriginBand,
    ParticleVolley, PlanCatalog, RosterChange, Step, SupportView, MISSION_STATS,
};

const RULE: &str = "----------------------------------------";

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(checkout) = &view.checkout {
        render_checkout(checkout, &mut lines);
    }
    if let Some(notice) = &view.checkout_notice {
        lines.push(notice_text(notice));
    }
    render_support(&view.support, &mut lines);
    render_dashboard(&view.dashboard, &mut lines);
    lines
}

fn render_checkout(view: &CheckoutView, lines: &mut Vec<String>) {
    let host = match view.variant {
        CheckoutVariant::Page => "page",
        CheckoutVariant::Modal => "modal",
    };
    lines.push(RULE.to_string());
    lines.push(format!(
        "Checkout #{} ({host}): {} {}",
        view.wizard_id, view.plan_name, view.price
    ));
    lines.push(progress(view.step));

    match view.step {
        Step::Details => {
            for field in [CheckoutField::Email, CheckoutField::Name, CheckoutField::Company] {
                lines.push(field_line(field, view.form.get(field)));
            }
        }
        Step::Payment => {
            for field in [CheckoutField::CardNumber, CheckoutField::Expiry, CheckoutField::Cvc] {
                lines.push(field_line(field, view.form.get(field)));
            }
            if view.loading {
                lines.push("  Processing payment...".to_string());
            }
        }
        Step::Confirmation => {
            lines.push(format!("  Payment successful! Welcome to NOVA {}.", view.plan_name));
            lines.push(format!("  A confirmation was sent to {}.", view.form.email));
            match &view.invoice {
                Some(invoice) => render_invoice(invoice, lines),
                None if view.variant == CheckoutVariant::Page => {
                    lines.push("  Type `invoice` to view your invoice.".to_string());
                }
                None => {}
            }
        }
    }
}

fn progress(current: Step) -> String {
    [Step::Details, Step::Payment, Step::Confirmation]
        .into_iter()
        .map(|step| {
            let marker = if step.number() < current.number() {
                "x"
            } else if step == current {
                ">"
            } else {
                " "
            };
            format!("[{marker}] {}. {}", step.number(), step.title())
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn field_label(field: CheckoutField) -> &'static str {
    match field {
        CheckoutField::Email => "Email",
        CheckoutField::Name => "Full name",
        CheckoutField::Company => "Company",
        CheckoutField::CardNumber => "Card number",
        CheckoutField::Expiry => "Expiry",
        CheckoutField::Cvc => "CVC",
    }
}

fn field_line(field: CheckoutField, value: &str) -> String {
    format!("  {:<12} {}", format!("{}:", field_label(field)), value)
}

fn render_invoice(invoice: &Invoice, lines: &mut Vec<String>) {
    lines.push(format!("  Invoice {}", invoice.number));
    lines.push(format!("    Date:      {}", invoice.date));
    lines.push(format!("    Due:       {}", invoice.due_date));
    lines.push(format!("    Billed to: {}", invoice.billed_to_name));
    lines.push(format!("               {}", invoice.billed_to_email));
    if let Some(company) = &invoice.billed_to_company {
        lines.push(format!("               {company}"));
    }
    lines.push(format!("    {} plan: {}", invoice.plan_name, invoice.price));
    lines.push(format!("    Total:     {}", invoice.price));
}

pub fn notice_text(notice: &CheckoutNotice) -> String {
    match notice {
        CheckoutNotice::PlanNotFound(plan) => format!("Plan not found: {plan:?}"),
        CheckoutNotice::MissingFields(fields) => {
            let names: Vec<&str> = fields.iter().map(|field| field_label(*field)).collect();
            format!("Please fill in: {}", names.join(", "))
        }
    }
}

fn render_support(view: &SupportView, lines: &mut Vec<String>) {
    lines.push(RULE.to_string());
    if !view.open {
        lines.push("Support: closed (type `support` to open)".to_string());
        return;
    }
    if view.minimized {
        lines.push("Support: minimized".to_string());
        return;
    }

    let size = if view.expanded { " (expanded)" } else { "" };
    lines.push(format!("Support{size}: {}", view.text));
    if view.screen.is_chat() {
        for entry in &view.history {
            let who = match entry.author {
                Author::User => "you",
                Author::System => "nova",
            };
            lines.push(format!("  {who:>4}: {}", entry.text));
        }
        if view.awaiting_reply {
            lines.push("  nova is typing...".to_string());
        }
        let mic = match (view.mic_available, view.listening) {
            (false, _) => "",
            (true, false) => "  [mic]",
            (true, true) => "  [listening]",
        };
        lines.push(format!("  > {}{mic}", view.input));
    }
    let buttons: Vec<String> = view
        .options
        .iter()
        .map(|option| format!("[{}]", option.label()))
        .collect();
    lines.push(format!("  {}", buttons.join(" ")));
}

fn render_dashboard(view: &DashboardView, lines: &mut Vec<String>) {
    lines.push(RULE.to_string());
    match view.tab {
        DashboardTab::Overview => {
            lines.push("Dashboard: Overview | team".to_string());
            for stat in MISSION_STATS {
                lines.push(format!("  {:<22} {:>4}  {}", stat.title, stat.value, stat.trend));
            }
        }
        DashboardTab::Team => {
            lines.push("Dashboard: overview | Team".to_string());
            for member in &view.members {
                let mut row = format!(
                    "  #{:<3} {:<16} {:<20} {}",
                    member.id,
                    member.name,
                    member.role,
                    member.status.label()
                );
                if let Some(email) = &member.email {
                    row.push_str(&format!("  {email}"));
                }
                if let Some(department) = &member.department {
                    row.push_str(&format!("  ({department})"));
                }
                lines.push(row);
            }
        }
    }

    match &view.modal {
        ModalView::Closed => {}
        ModalView::Add(form) => render_member_form("Add team member", form, lines),
        ModalView::Edit { id, form } => {
            render_member_form(&format!("Edit team member #{id}"), form, lines)
        }
        ModalView::ConfirmDelete { id, name } => lines.push(format!(
            "  Remove {name} (#{id}) from the team? `confirm` or `cancel`"
        )),
    }

    if let Some(outcome) = view.last_outcome {
        if let Some(text) = outcome_text(outcome) {
            lines.push(format!("  {text}"));
        }
    }
}

fn render_member_form(title: &str, form: &MemberForm, lines: &mut Vec<String>) {
    lines.push(format!("  {title}"));
    lines.push(format!("    Name:       {}", form.name));
    lines.push(format!("    Role:       {}", form.role));
    lines.push(format!("    Email:      {}", form.email));
    lines.push(format!("    Department: {}", form.department));
    lines.push(format!("    Status:     {}", form.status.label()));
}

fn outcome_text(outcome: DashboardOutcome) -> Option<String> {
    match outcome {
        DashboardOutcome::Added(id) => Some(format!("Added member #{id}")),
        DashboardOutcome::Edited(id, RosterChange::Applied) => Some(format!("Updated member #{id}")),
        DashboardOutcome::Deleted(id, RosterChange::Applied) => Some(format!("Removed member #{id}")),
        DashboardOutcome::Edited(id, RosterChange::NotFound)
        | DashboardOutcome::Deleted(id, RosterChange::NotFound) => {
            Some(format!("Member #{id} no longer exists"))
        }
        DashboardOutcome::Incomplete => Some("Name and role are required".to_string()),
        DashboardOutcome::Ignored => None,
    }
}

pub fn render_confetti(volleys: &[ParticleVolley; 2]) -> String {
    let parts: Vec<String> = volleys
        .iter()
        .map(|volley| {
            let side = match volley.origin {
                OriginBand::Left => "left",
                OriginBand::Right => "right",
            };
            let (from, to) = volley.origin.range();
            format!("{} {side} {from:.1}-{to:.1}", volley.particles)
        })
        .collect();
    format!("* confetti * {}", parts.join(" | "))
}

pub fn render_plans(catalog: &PlanCatalog) -> Vec<String> {
    let mut lines = Vec::new();
    for plan in catalog.plans() {
        let badge = if plan.highlighted { "  (most popular)" } else { "" };
        lines.push(format!("{} {}{badge}", plan.name, plan.price));
        for feature in &plan.features {
            lines.push(format!("  - {feature}"));
        }
        let action = if plan.purchasable {
            format!("  checkout /checkout/{}", plan.name)
        } else {
            "  contact sales".to_string()
        };
        lines.push(action);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_core::AppState;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_state_shows_closed_support_and_overview() {
        let lines = render(&AppState::new().view());
        assert!(lines.contains(&"Support: closed (type `support` to open)".to_string()));
        assert!(lines.contains(&"Dashboard: Overview | team".to_string()));
        assert!(lines.iter().any(|line| line.contains("Mission Success Rate")));
    }

    #[test]
    fn progress_marks_completed_steps() {
        assert_eq!(
            progress(Step::Payment),
            "[x] 1. Details  [>] 2. Payment  [ ] 3. Confirmation"
        );
    }

    #[test]
    fn missing_fields_notice_lists_labels() {
        let notice =
            CheckoutNotice::MissingFields(vec![CheckoutField::Email, CheckoutField::Name]);
        assert_eq!(notice_text(&notice), "Please fill in: Email, Full name");
    }

    #[test]
    fn confetti_line_names_both_bands() {
        let volleys = [
            ParticleVolley {
                particles: 45,
                origin: OriginBand::Left,
            },
            ParticleVolley {
                particles: 45,
                origin: OriginBand::Right,
            },
        ];
        assert_eq!(
            render_confetti(&volleys),
            "* confetti * 45 left 0.1-0.3 | 45 right 0.7-0.9"
        );
    }

    #[test]
    fn custom_plan_points_to_sales() {
        let lines = render_plans(&PlanCatalog::nova());
        assert!(lines.contains(&"  checkout /checkout/Startup".to_string()));
        assert!(lines.contains(&"  contact sales".to_string()));
    }
}
