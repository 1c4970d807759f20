use std::collections::HashSet;

use serde::Deserialize;

/// Answer given when no record overlaps the question at all.
pub const FALLBACK_ANSWER: &str =
    "I'm not sure about that. Could you please ask about NOVA, our technology, pricing, or support?";

const PRICING_ANSWER: &str = "Our plans start at $999/month for startups. We offer three tiers:\n\n\
• Startup: $999/month - Basic propulsion systems and support\n\
• Business: $2,499/month - Advanced systems + priority support\n\
• Enterprise: Custom pricing - Full suite with dedicated support\n\n\
Would you like to know more about any specific plan?";

const COMPANY_ANSWER: &str = "NOVA Aerospace is a pioneering space technology company focused on \
developing advanced propulsion systems and cutting-edge space exploration solutions. We're \
revolutionizing space travel through innovative technologies like quantum propulsion and neural \
navigation systems.";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FaqRecord {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl FaqRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            keywords: Vec::new(),
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Overlap between this record and an already normalized query.
    fn score(&self, query: &NormalizedQuery) -> usize {
        let keyword_score = self
            .keywords
            .iter()
            .filter(|keyword| {
                query.tokens.contains(keyword.as_str()) || query.text.contains(keyword.as_str())
            })
            .count();

        let question = self.question.to_lowercase();
        let question_score = if query.text.contains(&question) {
            question.split(' ').count()
        } else {
            0
        };

        keyword_score.max(question_score)
    }
}

/// Best-scoring record for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqMatch<'a> {
    pub record: &'a FaqRecord,
    pub score: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NormalizedQuery {
    text: String,
    tokens: HashSet<String>,
}

impl NormalizedQuery {
    fn new(raw: &str) -> Self {
        let text = normalize_question(raw);
        let tokens = text.split_whitespace().map(ToOwned::to_owned).collect();
        Self { text, tokens }
    }
}

/// Lowercases and strips everything that is not a letter, digit or whitespace.
pub fn normalize_question(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Static question/answer table scanned in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    records: Vec<FaqRecord>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::nova()
    }
}

impl KnowledgeBase {
    pub fn new(records: Vec<FaqRecord>) -> Self {
        Self { records }
    }

    /// The support widget's built-in answers.
    pub fn nova() -> Self {
        Self::new(vec![
            FaqRecord::new("what is nova", COMPANY_ANSWER),
            FaqRecord::new("how much", PRICING_ANSWER),
            FaqRecord::new(
                "quantum propulsion",
                "Quantum propulsion is our revolutionary engine technology that utilizes quantum \
                 mechanics principles for unprecedented efficiency in space travel. It achieves \
                 300% better fuel efficiency compared to traditional rocket engines.",
            ),
            FaqRecord::new(
                "neural navigation",
                "Neural navigation combines AI and quantum computing to calculate optimal space \
                 trajectories in real-time with incredible precision. It reduces navigation \
                 errors by 99.9% compared to conventional systems.",
            ),
            FaqRecord::new(
                "contact",
                "You can reach our sales team at sales@nova-aerospace.com or call us at \
                 +1 (555) 0123-4567. We typically respond within 24 hours on business days.",
            ),
            FaqRecord::new(
                "location",
                "Our headquarters is located in Silicon Valley, with research facilities in \
                 Houston, Cape Canaveral, and Tokyo. We serve clients globally.",
            ),
            FaqRecord::new(
                "support",
                "We offer 24/7 technical support for all our clients. Enterprise clients get \
                 dedicated support teams. You can reach support through our portal or via \
                 emergency hotline.",
            ),
            FaqRecord::new(
                "technology",
                "Our key technologies include:\n\n\
                 • Quantum Propulsion Systems\n\
                 • Neural Navigation\n\
                 • Plasma Shielding\n\
                 • AI-Driven Flight Controls\n\
                 • Zero-G Manufacturing\n\n\
                 Which technology would you like to learn more about?",
            ),
            FaqRecord::new("cost", PRICING_ANSWER).with_keywords([
                "cost",
                "price",
                "pricing",
                "plans",
                "subscription",
                "how much",
                "prices",
                "fee",
                "fees",
                "charge",
                "charges",
                "rate",
                "rates",
                "package",
                "packages",
                "tier",
                "tiers",
                "monthly",
                "annual",
                // Punctuated variants never survive normalization; kept as listed.
                "cost?",
                "price?",
                "pricing?",
                "how much?",
                "nova cost",
                "nova price",
                "nova pricing",
                "nova plans",
                "nova subscription",
                "nova packages",
                "nova rates",
                "what does nova cost",
                "what is the price",
                "tell me about pricing",
                "show me prices",
                "show pricing",
            ]),
            FaqRecord::new("nova", COMPANY_ANSWER).with_keywords([
                "nova", "company", "about", "what is",
            ]),
        ])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Highest-scoring record, or `None` when nothing scores above zero.
    ///
    /// Only a strictly greater score replaces the current best, so on ties the
    /// record listed first wins.
    pub fn best_match(&self, question: &str) -> Option<FaqMatch<'_>> {
        let query = NormalizedQuery::new(question);
        let mut best: Option<FaqMatch<'_>> = None;
        for record in &self.records {
            let score = record.score(&query);
            let best_score = best.map_or(0, |m| m.score);
            if score > best_score {
                best = Some(FaqMatch { record, score });
            }
        }
        best
    }

    /// Answer text for free-form user input; never empty.
    pub fn respond(&self, question: &str) -> &str {
        match self.best_match(question) {
            Some(found) if !found.record.answer.is_empty() => &found.record.answer,
            _ => FALLBACK_ANSWER,
        }
    }
}

/// Answers a question against the built-in knowledge base.
pub fn respond(question: &str) -> String {
    KnowledgeBase::nova().respond(question).to_owned()
}
