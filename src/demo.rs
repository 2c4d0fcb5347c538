use log::info;

use snafu::{prelude::*, Snafu};

use crate::args::Args;
use crate::demo::app::App;
use crate::demo::event::EventHandler;
use crate::demo::tui::Tui;

pub mod app;
pub mod config_reader;
pub mod event;
pub mod tui;
pub mod view;

#[derive(Debug, Snafu)]
pub enum DemoError {
    #[snafu(display("Error opening scenario file {path}"))]
    OpeningScenarios {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing scenario file {path}"))]
    ParsingScenarios {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Scenario '{name}': {message}"))]
    InvalidScenario { name: String, message: String },
    #[snafu(display("Terminal error"))]
    Terminal { source: std::io::Error },
}

pub type DemoResult<T> = Result<T, DemoError>;

/// Runs the interactive demo until the user quits.
///
/// The loop is single-threaded and synchronous: block on the next terminal
/// event, map it to an action, apply it, redraw. Every accepted input change
/// produces one complete re-evaluation of the pipeline, so only consistent
/// frames are ever rendered.
pub fn run_demo(args: &Args) -> DemoResult<()> {
    let scenarios = match &args.config {
        Some(path) => config_reader::read_scenarios(path)?,
        None => Vec::new(),
    };
    info!("run_demo: loaded {} preset scenarios", scenarios.len());

    let mut app = App::new(scenarios);
    let mut tui = Tui::new().context(TerminalSnafu)?;
    let events = EventHandler::new();

    while app.state.is_running {
        tui.draw(&app).context(TerminalSnafu)?;
        let action = events.next().context(TerminalSnafu)?;
        app.dispatch(action);
    }

    Tui::restore_terminal().context(TerminalSnafu)?;
    Ok(())
}
