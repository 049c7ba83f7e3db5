//! Frame loop driving the state machine on a terminal.

use std::io;

use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::Backend};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use crate::game::machine::GameStateMachine;
use crate::game::screen::ScreenId;
use crate::input::InputCollector;
use hangman_core::GameConfig;

/// How long one poll waits for the first event of a frame.
const POLL_TICK: Duration = Duration::from_millis(100);

/// Pause between frames so the loop yields to the runtime.
const FRAME_PAUSE: Duration = Duration::from_millis(10);

/// Controller that owns the state machine and runs the frame loop.
///
/// Call [`GameController::run`] to start the event loop.
#[derive(Debug)]
pub struct GameController {
    machine: GameStateMachine,
    collector: InputCollector,
}

impl GameController {
    /// Creates a controller for a validated configuration.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        info!("Creating GameController");
        Self {
            machine: GameStateMachine::new(config),
            collector: InputCollector::new(),
        }
    }

    /// The underlying state machine.
    pub fn machine(&self) -> &GameStateMachine {
        &self.machine
    }

    /// Runs the frame loop until the player quits.
    ///
    /// Each frame draws the active screen, gathers every pending input
    /// event, and applies them as one step. Quitting takes effect after the
    /// frame in which it was requested completes.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting game loop");

        loop {
            let machine = &mut self.machine;
            terminal.draw(|f| {
                machine.layout(f.area());
                machine.render(f);
            })?;

            let events = next_batch()?;
            let input = self.collector.collect(events);

            let screen = self.machine.step(&input);
            if screen == ScreenId::Quit {
                info!("Game loop finished");
                return Ok(());
            }

            sleep(FRAME_PAUSE).await;
        }
    }
}

/// Waits up to one tick for input, then drains everything already queued.
fn next_batch() -> io::Result<Vec<Event>> {
    let mut events = Vec::new();
    if event::poll(POLL_TICK)? {
        events.push(event::read()?);
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
    }
    if !events.is_empty() {
        debug!(count = events.len(), "Input batch read");
    }
    Ok(events)
}
