//! Terminal snake runner (default binary).
//!
//! Wires the engine, input mapping, and board view into a single
//! poll-and-step event loop. One step is ever in flight: the loop sleeps on
//! input until the next step deadline, runs at most one step, then redraws.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::GameState;
use tui_snake::engine::GameLoop;
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{BoardView, TerminalRenderer, Viewport};
use tui_snake::types::{GameCommand, GRID_COLS, GRID_ROWS, SCORE_PER_FRUIT, STEP_MS};

fn main() -> Result<()> {
    env_logger::init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut view = BoardView::new(Viewport::new(w, h))?;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    log::debug!("viewport {w}x{h}, rng seed {seed}");

    let mut game = GameLoop::new(
        GameState::new(GRID_ROWS, GRID_COLS, seed),
        Duration::from_millis(u64::from(STEP_MS)),
    );
    game.start();

    let idle_poll = Duration::from_millis(u64::from(STEP_MS));

    loop {
        // Render.
        game.state().draw(&mut view);
        let paused = !game.is_running() && !game.game_over();
        view.draw_hud(game.score() * SCORE_PER_FRUIT, paused, game.game_over());
        term.present(view.frame())?;

        // Input with timeout until the next step is due.
        let timeout = game.time_until_step(Instant::now()).unwrap_or(idle_poll);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(cmd) = handle_key_event(key) {
                        dispatch(&mut game, cmd);
                    }
                }
            }
        }

        game.update(Instant::now());
    }
}

/// Route a command to the lifecycle.
///
/// Restart works from any state, including game over; every other command is
/// swallowed while the game-over screen is up.
fn dispatch(game: &mut GameLoop, cmd: GameCommand) {
    match cmd {
        GameCommand::Restart => {
            game.reset();
            game.start();
        }
        _ if game.game_over() => {}
        GameCommand::Pause => game.toggle_pause(),
        cmd => {
            game.command(cmd);
        }
    }
}
