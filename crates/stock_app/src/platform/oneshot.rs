use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use stock_core::{update, AppState, Msg, ShellState};
use stock_engine::write_atomic;
use stock_logging::stock_info;
use stock_render::{render_page, Dashboard};

use super::effects::EffectRunner;
use super::ui::lines::{dashboard_lines, plain_text};

/// Non-interactive output for `--symbol`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Plain,
    Html(PathBuf),
}

impl OutputMode {
    pub fn from_cli(plain: bool, html: Option<PathBuf>) -> Option<Self> {
        match (plain, html) {
            (_, Some(path)) => Some(OutputMode::Html(path)),
            (true, None) => Some(OutputMode::Plain),
            (false, None) => None,
        }
    }
}

/// Runs a single submit through the shell and prints or exports the outcome.
/// A failed fetch prints the shell's message and exits non-zero.
pub fn run(runner: &EffectRunner, symbol: &str, mode: OutputMode) -> Result<ExitCode> {
    let (state, _) = update(AppState::new(), Msg::QueryChanged(symbol.to_string()));
    let (mut state, effects) = update(state, Msg::Submitted);
    if effects.is_empty() {
        bail!("--symbol must not be empty");
    }
    runner.enqueue(effects);

    while state.is_loading() {
        let msg = runner
            .wait()
            .context("fetch engine stopped before answering")?;
        state = update(state, msg).0;
    }

    match state.shell() {
        ShellState::Result { symbol, result } => {
            let dashboard = Dashboard::build(result);
            match mode {
                OutputMode::Plain => print!("{}", plain_text(&dashboard_lines(&dashboard))),
                OutputMode::Html(path) => {
                    let generated_at = chrono::Utc::now().to_rfc3339();
                    let page = render_page(symbol, &dashboard, &generated_at);
                    let written = write_atomic(&path, &page)
                        .with_context(|| format!("writing {}", path.display()))?;
                    stock_info!("Exported {} to {:?}", symbol, written);
                    println!("{}", written.display());
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        ShellState::Error(message) => {
            eprintln!("{message}");
            Ok(ExitCode::FAILURE)
        }
        ShellState::Idle | ShellState::Loading { .. } => bail!("no analysis received"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_wins_over_plain_and_neither_means_interactive() {
        assert_eq!(OutputMode::from_cli(false, None), None);
        assert_eq!(OutputMode::from_cli(true, None), Some(OutputMode::Plain));
        assert_eq!(
            OutputMode::from_cli(false, Some(PathBuf::from("a.html"))),
            Some(OutputMode::Html(PathBuf::from("a.html")))
        );
    }
}
