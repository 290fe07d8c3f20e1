//! Terminal front end: CLI, configuration, the interactive dashboard and the
//! one-shot text/HTML outputs.
mod app;
mod cli;
mod config;
mod effects;
mod oneshot;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use stock_engine::EngineHandle;
use stock_logging::{stock_debug, stock_info, stock_warn, LevelFilter, LogDestination};

pub use cli::Cli;

use app::App;
use config::{AppConfig, DEFAULT_CONFIG_FILE};
use effects::EffectRunner;
use oneshot::OutputMode;

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let loaded = AppConfig::load(&config_path);
    let mut config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => AppConfig::default(),
    };
    config.apply_cli(&cli);

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // Every mode draws on stdout, so the log always goes to a file.
    stock_logging::initialize(LogDestination::File(config.log_file.clone()), level);

    match loaded {
        Ok(Some(_)) => stock_info!("Loaded config from {:?}", config_path),
        Ok(None) => stock_debug!("No config at {:?}; using defaults", config_path),
        Err(err) => stock_warn!("{}; using defaults", err),
    }
    stock_info!("Backend {}", config.base_url);

    let engine = EngineHandle::new(config.fetch_settings()).context("starting fetch engine")?;
    let runner = EffectRunner::new(engine);

    match (cli.symbol, OutputMode::from_cli(cli.plain, cli.html)) {
        (Some(symbol), Some(mode)) => oneshot::run(&runner, &symbol, mode),
        (symbol, _) => {
            app::run_interactive(App::new(runner, symbol))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
