//! Terminal setup and teardown.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, instrument};

/// Terminal type used by the binary.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches to raw mode on the alternate screen with mouse capture enabled,
/// and sets the terminal title.
#[instrument]
pub fn setup(title: &str) -> io::Result<Tui> {
    debug!("Entering raw mode");
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(title)) {
        error!(error = %err, "Terminal setup failed, leaving raw mode");
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        disable_raw_mode()?;
        return Err(err);
    }
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).inspect_err(|err| {
        error!(error = %err, "Terminal creation failed, leaving raw mode");
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = disable_raw_mode();
    })
}

/// Restores the terminal to the state it had before [`setup`].
///
/// Every step is attempted; the first failure is returned.
#[instrument(skip(terminal))]
pub fn restore(terminal: &mut Tui) -> io::Result<()> {
    debug!("Leaving raw mode");
    let raw = disable_raw_mode();
    let screen = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let cursor = terminal.show_cursor();
    raw.and(screen).and(cursor)
}

/// Combines the game loop result with the terminal restore result.
///
/// A loop error is returned ahead of a restore error; both are logged.
pub fn shutdown_result(run: anyhow::Result<()>, restored: io::Result<()>) -> anyhow::Result<()> {
    if let Err(err) = &run {
        error!(error = ?err, "Game loop error");
    }
    if let Err(err) = &restored {
        error!(error = %err, "Failed to restore terminal");
    }
    run?;
    restored?;
    Ok(())
}
