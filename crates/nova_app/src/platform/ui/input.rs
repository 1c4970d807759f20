//! Maps REPL lines onto the messages a click or keystroke would send.
use chrono::{DateTime, Utc};
use nova_core::{
    plan_from_route, CheckoutField, CheckoutMsg, CheckoutVariant, DashboardMsg, DashboardTab,
    MemberField, MemberId, MemberStatus, Msg, SupportMsg, SupportOption,
};

pub const HELP: &str = "\
Checkout
  checkout <plan | /checkout/<plan>>   open the checkout page
  buy <plan>                           open the checkout modal
  set <email|name|company|card|expiry|cvc> <value>
  next | pay | invoice | dismiss | close
Support
  support | minimize | expand
  option <label>                       press a support button
  ask <question>                       send a chat message (AI Questions screen)
  type <text> | send | mic
Team dashboard
  tab <overview|team>
  add | edit <id> | delete <id>
  member <name|role|email|department> <value>
  status <active|away> | save | confirm | cancel
Other
  show | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(Vec<Msg>),
    /// Type and send a chat question; only meaningful on the chat screen.
    Ask(String),
    Show,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

impl Command {
    fn one(msg: Msg) -> Self {
        Command::Send(vec![msg])
    }
}

/// Parses one input line. `now` stamps invoice requests.
pub fn parse_line(line: &str, now: DateTime<Utc>) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "show" => Command::Show,

        "checkout" => open_checkout(rest, CheckoutVariant::Page),
        "buy" => open_checkout(rest, CheckoutVariant::Modal),
        "set" => match rest.split_once(char::is_whitespace) {
            Some((field, value)) => match checkout_field(field) {
                Some(field) => Command::one(Msg::Checkout(CheckoutMsg::FieldEdited {
                    field,
                    value: value.trim().to_string(),
                })),
                None => Command::Invalid(format!("unknown checkout field {field:?}")),
            },
            None => Command::Invalid("usage: set <field> <value>".to_string()),
        },
        "next" => Command::one(Msg::Checkout(CheckoutMsg::DetailsSubmitted)),
        "pay" => Command::one(Msg::Checkout(CheckoutMsg::PaymentSubmitted)),
        "invoice" => Command::one(Msg::Checkout(CheckoutMsg::InvoiceRequested { issued_at: now })),
        "dismiss" => Command::one(Msg::Checkout(CheckoutMsg::InvoiceDismissed)),
        "close" => Command::one(Msg::Checkout(CheckoutMsg::Closed)),

        "support" => Command::one(Msg::Support(SupportMsg::LauncherClicked)),
        "minimize" => Command::one(Msg::Support(SupportMsg::MinimizeClicked)),
        "expand" => Command::one(Msg::Support(SupportMsg::ExpandToggled)),
        "option" => match SupportOption::from_label(rest) {
            Some(option) => Command::one(Msg::Support(SupportMsg::OptionChosen(option))),
            None => Command::Invalid(format!("no support button labelled {rest:?}")),
        },
        "ask" if rest.is_empty() => Command::Invalid("usage: ask <question>".to_string()),
        "ask" => Command::Ask(rest.to_string()),
        "type" => Command::one(Msg::Support(SupportMsg::InputChanged(rest.to_string()))),
        "send" => Command::one(Msg::Support(SupportMsg::ChatSubmitted)),
        "mic" => Command::one(Msg::Support(SupportMsg::MicToggled)),

        "tab" => match rest.to_ascii_lowercase().as_str() {
            "overview" => Command::one(Msg::Dashboard(DashboardMsg::TabSelected(
                DashboardTab::Overview,
            ))),
            "team" => Command::one(Msg::Dashboard(DashboardMsg::TabSelected(DashboardTab::Team))),
            other => Command::Invalid(format!("unknown tab {other:?}")),
        },
        "add" => Command::one(Msg::Dashboard(DashboardMsg::AddClicked)),
        "edit" => with_member_id(rest, DashboardMsg::EditClicked),
        "delete" => with_member_id(rest, DashboardMsg::DeleteClicked),
        "member" => match rest.split_once(char::is_whitespace) {
            Some((field, value)) => match member_field(field) {
                Some(field) => Command::one(Msg::Dashboard(DashboardMsg::FormFieldEdited {
                    field,
                    value: value.trim().to_string(),
                })),
                None => Command::Invalid(format!("unknown member field {field:?}")),
            },
            // A bare field clears it.
            None => match member_field(rest) {
                Some(field) => Command::one(Msg::Dashboard(DashboardMsg::FormFieldEdited {
                    field,
                    value: String::new(),
                })),
                None => Command::Invalid("usage: member <field> <value>".to_string()),
            },
        },
        "status" => match MemberStatus::from_label(rest) {
            Some(status) => Command::one(Msg::Dashboard(DashboardMsg::StatusSelected(status))),
            None => Command::Invalid(format!("unknown status {rest:?}")),
        },
        "save" => Command::one(Msg::Dashboard(DashboardMsg::FormSubmitted)),
        "confirm" => Command::one(Msg::Dashboard(DashboardMsg::DeleteConfirmed)),
        "cancel" => Command::one(Msg::Dashboard(DashboardMsg::ModalClosed)),

        other => Command::Invalid(format!("unknown command {other:?}; try `help`")),
    }
}

fn open_checkout(target: &str, variant: CheckoutVariant) -> Command {
    let plan = if target.starts_with('/') {
        match plan_from_route(target) {
            Some(plan) => plan,
            None => return Command::Invalid(format!("{target:?} is not a checkout route")),
        }
    } else {
        target.to_string()
    };
    if plan.is_empty() {
        return Command::Invalid("usage: checkout <plan>".to_string());
    }
    Command::one(Msg::Checkout(CheckoutMsg::Opened { plan, variant }))
}

fn with_member_id(raw: &str, msg: fn(MemberId) -> DashboardMsg) -> Command {
    match raw.parse::<MemberId>() {
        Ok(id) => Command::one(Msg::Dashboard(msg(id))),
        Err(_) => Command::Invalid(format!("{raw:?} is not a member id")),
    }
}

fn checkout_field(name: &str) -> Option<CheckoutField> {
    match name.to_ascii_lowercase().as_str() {
        "email" => Some(CheckoutField::Email),
        "name" => Some(CheckoutField::Name),
        "company" => Some(CheckoutField::Company),
        "card" => Some(CheckoutField::CardNumber),
        "expiry" => Some(CheckoutField::Expiry),
        "cvc" => Some(CheckoutField::Cvc),
        _ => None,
    }
}

fn member_field(name: &str) -> Option<MemberField> {
    match name.to_ascii_lowercase().as_str() {
        "name" => Some(MemberField::Name),
        "role" => Some(MemberField::Role),
        "email" => Some(MemberField::Email),
        "department" => Some(MemberField::Department),
        _ => None,
    }
}
