use std::path::PathBuf;

use clap::Parser;
use nova_app::cli::{Cli, Command};
use nova_app::platform::config::{self, AppConfig, DEFAULT_CONFIG_FILE};
use nova_app::platform::{self, ui};
use nova_core::PlanCatalog;
use nova_logging::nova_warn;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let (config, config_error) = match config::load(&config_path) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    let destination = cli.log.map(Into::into).unwrap_or(config.log_destination);
    nova_logging::initialize(destination, config.level_filter(), &config.log_file);
    if let Some(err) = config_error {
        nova_warn!("{}; falling back to defaults", err);
    }

    match cli.command.unwrap_or_default() {
        Command::Repl => platform::run_app(&config),
        Command::Ask { question } => {
            let knowledge = config.knowledge_base();
            println!("{}", knowledge.respond(&question.join(" ")));
            Ok(())
        }
        Command::Plans => {
            for line in ui::render::render_plans(&PlanCatalog::nova()) {
                println!("{line}");
            }
            Ok(())
        }
    }
}
