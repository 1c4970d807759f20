use std::collections::BTreeMap;

use crate::faq::KnowledgeBase;

pub type ReplyId = u64;

const CHAT_GREETING: &str = "Ask me anything about NOVA Aerospace!";

/// Menu buttons offered by the support widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportOption {
    AboutNova,
    Technology,
    Pricing,
    ContactSales,
    AiQuestions,
    LearnMore,
    SeeDetails,
    ViewPlans,
    ContactNow,
    GoBack,
}

impl SupportOption {
    pub const ALL: [SupportOption; 10] = [
        SupportOption::AboutNova,
        SupportOption::Technology,
        SupportOption::Pricing,
        SupportOption::ContactSales,
        SupportOption::AiQuestions,
        SupportOption::LearnMore,
        SupportOption::SeeDetails,
        SupportOption::ViewPlans,
        SupportOption::ContactNow,
        SupportOption::GoBack,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SupportOption::AboutNova => "About NOVA",
            SupportOption::Technology => "Technology",
            SupportOption::Pricing => "Pricing",
            SupportOption::ContactSales => "Contact Sales",
            SupportOption::AiQuestions => "AI Questions",
            SupportOption::LearnMore => "Learn More",
            SupportOption::SeeDetails => "See Details",
            SupportOption::ViewPlans => "View Plans",
            SupportOption::ContactNow => "Contact Now",
            SupportOption::GoBack => "Go Back",
        }
    }

    /// Case-insensitive lookup by button label.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.label().eq_ignore_ascii_case(label))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Welcome,
    AboutNova,
    Technology,
    Pricing,
    ContactSales,
    AiChat,
}

impl Screen {
    pub fn text(self) -> &'static str {
        match self {
            Screen::Welcome => "👋 Need help? I'm here to assist you!",
            Screen::AboutNova => {
                "NOVA Aerospace is pioneering the future of space exploration through advanced \
                 propulsion systems and cutting-edge technology."
            }
            Screen::Technology => {
                "Our technology stack includes Quantum Propulsion, Neural Navigation, and Plasma \
                 Shielding systems."
            }
            Screen::Pricing => {
                "We offer flexible plans starting from $999/mo for startups to enterprise-grade \
                 solutions."
            }
            Screen::ContactSales => {
                "Our sales team is ready to help! We typically respond within 24 hours."
            }
            Screen::AiChat => "Ask me anything about NOVA Aerospace and our technology!",
        }
    }

    pub fn options(self) -> &'static [SupportOption] {
        use SupportOption::*;
        match self {
            Screen::Welcome => &[AboutNova, Technology, Pricing, ContactSales, AiQuestions],
            Screen::AboutNova => &[LearnMore, GoBack],
            Screen::Technology => &[SeeDetails, GoBack],
            Screen::Pricing => &[ViewPlans, GoBack],
            Screen::ContactSales => &[ContactNow, GoBack],
            Screen::AiChat => &[GoBack],
        }
    }

    pub fn is_chat(self) -> bool {
        self == Screen::AiChat
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub author: Author,
    pub text: String,
}

impl ChatEntry {
    fn system(text: impl Into<String>) -> Self {
        Self {
            author: Author::System,
            text: text.into(),
        }
    }
}

/// What choosing a menu option did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionOutcome {
    Navigated(Screen),
    /// Returned to the welcome screen; these pending replies were dropped.
    WentBack { dropped: Vec<ReplyId> },
    ContactRequested,
    Unhandled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictationRequest {
    Start,
    Stop,
}

/// State of the floating support widget, one per page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SupportWidget {
    open: bool,
    minimized: bool,
    expanded: bool,
    screen: Screen,
    input: String,
    history: Vec<ChatEntry>,
    pending: BTreeMap<ReplyId, String>,
    next_reply_id: ReplyId,
    dictation_available: bool,
    listening: bool,
}

impl SupportWidget {
    pub fn new(dictation_available: bool) -> Self {
        Self {
            dictation_available,
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn history(&self) -> &[ChatEntry] {
        &self.history
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    pub fn dictation_available(&self) -> bool {
        self.dictation_available
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
        self.minimized = false;
    }

    pub fn minimize(&mut self) {
        self.minimized = true;
    }

    /// Expansion is only offered on the chat screen.
    pub fn toggle_expanded(&mut self) -> bool {
        if !self.screen.is_chat() {
            return false;
        }
        self.expanded = !self.expanded;
        true
    }

    pub fn choose(&mut self, option: SupportOption) -> OptionOutcome {
        let target = match option {
            SupportOption::GoBack => {
                self.screen = Screen::Welcome;
                self.history.clear();
                self.expanded = false;
                let dropped = std::mem::take(&mut self.pending).into_keys().collect();
                return OptionOutcome::WentBack { dropped };
            }
            SupportOption::ContactNow => return OptionOutcome::ContactRequested,
            SupportOption::AboutNova => Screen::AboutNova,
            SupportOption::Technology => Screen::Technology,
            SupportOption::Pricing => Screen::Pricing,
            SupportOption::ContactSales => Screen::ContactSales,
            SupportOption::AiQuestions => Screen::AiChat,
            SupportOption::LearnMore | SupportOption::SeeDetails | SupportOption::ViewPlans => {
                return OptionOutcome::Unhandled;
            }
        };

        self.screen = target;
        if target.is_chat() {
            self.history = vec![ChatEntry::system(CHAT_GREETING)];
        }
        OptionOutcome::Navigated(target)
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Posts the current input and queues the answer for delayed delivery.
    ///
    /// Returns `None` when the input is blank or the chat screen is not shown.
    pub fn submit(&mut self, knowledge: &KnowledgeBase) -> Option<ReplyId> {
        if !self.screen.is_chat() || self.input.trim().is_empty() {
            return None;
        }
        let question = std::mem::take(&mut self.input);
        let answer = knowledge.respond(&question).to_owned();
        self.history.push(ChatEntry {
            author: Author::User,
            text: question,
        });

        self.next_reply_id += 1;
        let reply_id = self.next_reply_id;
        self.pending.insert(reply_id, answer);
        Some(reply_id)
    }

    /// Appends a queued answer to the history. Unknown ids are ignored.
    pub fn deliver(&mut self, reply_id: ReplyId) -> bool {
        match self.pending.remove(&reply_id) {
            Some(answer) => {
                self.history.push(ChatEntry::system(answer));
                true
            }
            None => false,
        }
    }

    pub fn toggle_listening(&mut self) -> Option<DictationRequest> {
        if !self.dictation_available {
            return None;
        }
        if self.listening {
            return Some(DictationRequest::Stop);
        }
        self.input.clear();
        self.listening = true;
        Some(DictationRequest::Start)
    }

    pub fn dictation_transcript(&mut self, transcript: impl Into<String>) {
        self.input = transcript.into();
    }

    pub fn dictation_ended(&mut self) {
        self.listening = false;
    }
}
