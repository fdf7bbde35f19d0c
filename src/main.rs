//! kiosk - Terminal Demo App Suite
//!
//! A launcher plus five self-contained demo apps driven by a shared
//! in-memory collection core. Everything runs in one synchronous key-event
//! loop; leaving an app keeps its state for the rest of the session.

use std::io;

use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod application;
mod domain;
mod infrastructure;
mod presentation;

use application::{ActiveApp, Suite};
use presentation::{render_ui, InputHandler};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LaunchTarget {
    Shop,
    Jobs,
    Projects,
    Quiz,
    Portfolio,
}

impl From<LaunchTarget> for ActiveApp {
    fn from(target: LaunchTarget) -> Self {
        match target {
            LaunchTarget::Shop => ActiveApp::Shop,
            LaunchTarget::Jobs => ActiveApp::Jobs,
            LaunchTarget::Projects => ActiveApp::Projects,
            LaunchTarget::Quiz => ActiveApp::Quiz,
            LaunchTarget::Portfolio => ActiveApp::Portfolio,
        }
    }
}

#[derive(Parser)]
#[command(name = "kiosk", about = "A terminal suite of self-contained demo apps")]
struct Cli {
    /// Launch straight into one app instead of the launcher.
    #[arg(long, value_enum)]
    app: Option<LaunchTarget>,
}

/// Entry point for the kiosk demo suite.
///
/// Parses the launch options, sets up the terminal interface, and runs the
/// main event loop until the user quits from the launcher.
///
/// # Errors
///
/// Returns an error if the embedded seed catalogs fail to decode or if
/// terminal setup fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut suite = Suite::new()?;
    if let Some(target) = cli.app {
        suite.launch(target.into());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut suite);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Renders the active app and processes one key event at a time; every
/// mutation completes before the next event is read.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, suite: &mut Suite) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, suite))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if matches!(suite.active, ActiveApp::Launcher) => {
                        return Ok(())
                    }
                    _ => InputHandler::handle_key_event(suite, key.code, key.modifiers),
                }
            }
        }
    }
}
