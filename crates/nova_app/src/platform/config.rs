use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use nova_core::{FaqRecord, KnowledgeBase, Timings};
use nova_logging::log::LevelFilter;
use nova_logging::{LogDestination, DEFAULT_LOG_FILE};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "nova.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Settings read from `nova.ron`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub payment_delay_ms: u64,
    pub chat_reply_delay_ms: u64,
    pub confetti_duration_ms: u64,
    pub confetti_interval_ms: u64,
    pub log_destination: LogDestination,
    pub log_level: String,
    pub log_file: PathBuf,
    /// Phrases replayed by the scripted microphone. `None` disables dictation.
    pub dictation_script: Option<Vec<String>>,
    /// Replaces the built-in FAQ records.
    pub knowledge_base: Option<Vec<FaqRecord>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let timings = Timings::default();
        Self {
            payment_delay_ms: millis(timings.payment_delay),
            chat_reply_delay_ms: millis(timings.chat_reply_delay),
            confetti_duration_ms: millis(timings.confetti_duration),
            confetti_interval_ms: millis(timings.confetti_interval),
            log_destination: LogDestination::default(),
            log_level: "info".to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            dictation_script: None,
            knowledge_base: None,
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl AppConfig {
    /// A zero confetti interval would never tick, so it falls back to the default.
    pub fn timings(&self) -> Timings {
        let defaults = Timings::default();
        let confetti_interval = match self.confetti_interval_ms {
            0 => defaults.confetti_interval,
            ms => Duration::from_millis(ms),
        };
        Timings {
            payment_delay: Duration::from_millis(self.payment_delay_ms),
            chat_reply_delay: Duration::from_millis(self.chat_reply_delay_ms),
            confetti_duration: Duration::from_millis(self.confetti_duration_ms),
            confetti_interval,
        }
    }

    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }

    pub fn knowledge_base(&self) -> KnowledgeBase {
        match &self.knowledge_base {
            Some(records) => KnowledgeBase::new(records.clone()),
            None => KnowledgeBase::nova(),
        }
    }
}

/// Reads the config at `path`. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
