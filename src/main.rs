use clap::Parser;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use rust_prailude::cli::{self, Cli, Output};
use rust_prailude::config::PrailudeConfig;

/// Logs go to stderr; stdout only carries command output.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let loaded = PrailudeConfig::load(&args.config);
    let level = match &loaded {
        Ok(config) => config.log.level.clone(),
        Err(_) => "info".to_string(),
    };
    init_tracing(&level);

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            warn!("{} ({}). Using defaults.", e, args.config);
            PrailudeConfig::default()
        }
    };

    let output = Output::from_config(&config.output, args.json);
    match cli::run(args.command, &output) {
        Ok(text) => {
            println!("{}", text.trim_end_matches('\n'));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
