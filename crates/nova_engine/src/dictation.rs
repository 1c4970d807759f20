use std::collections::VecDeque;

use nova_logging::nova_debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictationEvent {
    /// Everything recognised so far in this session, interim results included.
    Transcript(String),
    Ended,
    Failed(String),
}

/// Optional speech-to-text capability feeding the chat input.
pub trait Dictation: Send {
    fn is_available(&self) -> bool;
    fn start(&mut self);
    fn stop(&mut self);
    fn try_recv(&mut self) -> Option<DictationEvent>;
}

/// Host without speech recognition; the widget hides its microphone.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableDictation;

impl Dictation for UnavailableDictation {
    fn is_available(&self) -> bool {
        false
    }

    fn start(&mut self) {}

    fn stop(&mut self) {}

    fn try_recv(&mut self) -> Option<DictationEvent> {
        None
    }
}

/// Replays canned phrases, one per listening session, word by word.
#[derive(Debug, Default, Clone)]
pub struct ScriptedDictation {
    phrases: VecDeque<String>,
    events: VecDeque<DictationEvent>,
    listening: bool,
}

impl ScriptedDictation {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            events: VecDeque::new(),
            listening: false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.phrases.len()
    }
}

impl Dictation for ScriptedDictation {
    fn is_available(&self) -> bool {
        true
    }

    fn start(&mut self) {
        if self.listening {
            return;
        }
        let Some(phrase) = self.phrases.pop_front() else {
            nova_debug!("Scripted dictation has no phrases left");
            self.events
                .push_back(DictationEvent::Failed("no-speech".to_string()));
            self.events.push_back(DictationEvent::Ended);
            return;
        };
        self.listening = true;
        let words: Vec<&str> = phrase.split_whitespace().collect();
        for heard in 1..=words.len() {
            self.events
                .push_back(DictationEvent::Transcript(words[..heard].join(" ")));
        }
    }

    fn stop(&mut self) {
        if self.listening {
            self.listening = false;
            self.events.push_back(DictationEvent::Ended);
        }
    }

    fn try_recv(&mut self) -> Option<DictationEvent> {
        self.events.pop_front()
    }
}
