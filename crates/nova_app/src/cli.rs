use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use nova_logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "nova", version, about = "NOVA Aerospace checkout, support chat and team dashboard")]
pub struct Cli {
    /// RON configuration file (defaults to ./nova.ron when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured log destination.
    #[arg(long, global = true, value_enum)]
    pub log: Option<LogArg>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Subcommand)]
pub enum Command {
    /// Interactive session driving every component (default).
    #[default]
    Repl,
    /// Answer a single support question and exit.
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Print the pricing plans.
    Plans,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogArg {
    File,
    Terminal,
    Both,
    Off,
}

impl From<LogArg> for LogDestination {
    fn from(arg: LogArg) -> Self {
        match arg {
            LogArg::File => LogDestination::File,
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::Both => LogDestination::Both,
            LogArg::Off => LogDestination::Off,
        }
    }
}
