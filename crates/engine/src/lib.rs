//! Lifecycle controller - schedules steps and gates commands
//!
//! [`GameLoop`] owns the [`GameState`] and decides *when* the engine runs:
//! it keeps the fixed step period, the running flag, and the game-over
//! latch. Pausing is nothing but a stop/start pair; stopping cancels the
//! pending step deadline, so no step can fire between `stop()` and the next
//! `start()`.
//!
//! The loop never spawns threads or timers. The event loop that owns it
//! calls [`GameLoop::update`] whenever it wakes up, and
//! [`GameLoop::time_until_step`] tells that loop how long it may sleep.

use std::time::{Duration, Instant};

use tui_snake_core::{GameState, StepOutcome};
use tui_snake_types::GameCommand;

/// Owns the game state and its step scheduling
#[derive(Debug)]
pub struct GameLoop {
    state: GameState,
    period: Duration,
    running: bool,
    /// Set on the fatal step, cleared only by reset; while set, `start` is
    /// refused so the game-over screen cannot be played through.
    dead: bool,
    /// Deadline of the next step; `None` whenever not running
    next_step: Option<Instant>,
}

impl GameLoop {
    pub fn new(state: GameState, period: Duration) -> Self {
        Self {
            state,
            period,
            running: false,
            dead: false,
            next_step: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Fruits eaten this run
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn game_over(&self) -> bool {
        self.dead
    }

    /// Begin periodic stepping. Refused while the game-over latch is set;
    /// a reset has to come first.
    pub fn start(&mut self) {
        if self.running || self.dead {
            return;
        }
        self.running = true;
        self.next_step = Some(Instant::now() + self.period);
        log::debug!("loop started, period {:?}", self.period);
    }

    /// Halt periodic stepping without touching game state. Cancellation is
    /// immediate: the pending deadline is dropped.
    pub fn stop(&mut self) {
        self.running = false;
        self.next_step = None;
        log::debug!("loop stopped");
    }

    /// Stop if running, start if paused. Ignored while dead.
    pub fn toggle_pause(&mut self) {
        if self.dead {
            return;
        }
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Reinitialize the game state and clear the game-over latch.
    pub fn reset(&mut self) {
        self.stop();
        self.state.reset();
        self.dead = false;
        log::debug!("game reset");
    }

    /// Forward a steering command to the engine.
    ///
    /// Dropped unless the loop is currently running; pause and restart are
    /// the event loop's business, not the engine's.
    pub fn command(&mut self, cmd: GameCommand) -> bool {
        if !self.running {
            return false;
        }
        match cmd.direction() {
            Some(dir) => self.state.request_direction(dir),
            None => false,
        }
    }

    /// Run at most one step if its deadline has passed.
    ///
    /// Returns the step outcome when a step fired. A fatal step stops the
    /// loop and sets the game-over latch.
    pub fn update(&mut self, now: Instant) -> Option<StepOutcome> {
        if !self.running {
            return None;
        }
        match self.next_step {
            Some(deadline) if now >= deadline => {
                self.next_step = Some(now + self.period);
                Some(self.step())
            }
            _ => None,
        }
    }

    /// Run one step immediately.
    ///
    /// This is the unit [`update`](Self::update) fires on its deadline;
    /// calling it directly drives deterministic tests.
    pub fn step(&mut self) -> StepOutcome {
        let outcome = self.state.advance();
        if outcome.ate_fruit {
            log::debug!("fruit eaten, score {}", self.state.score());
        }
        if outcome.died {
            self.running = false;
            self.next_step = None;
            self.dead = true;
            log::info!("game over, score {}", self.state.score());
        }
        outcome
    }

    /// How long the event loop may sleep before the next step is due.
    ///
    /// `None` while not running (sleep on input alone).
    pub fn time_until_step(&self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }
        self.next_step
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_snake_types::{Cell, Direction, GRID_COLS, GRID_ROWS, STEP_MS};

    fn game_loop() -> GameLoop {
        GameLoop::new(
            GameState::new(GRID_ROWS, GRID_COLS, 12345),
            Duration::from_millis(STEP_MS as u64),
        )
    }

    #[test]
    fn test_starts_stopped() {
        let game = game_loop();
        assert!(!game.is_running());
        assert!(!game.game_over());
    }

    #[test]
    fn test_start_stop_running_flag() {
        let mut game = game_loop();

        game.start();
        assert!(game.is_running());

        game.stop();
        assert!(!game.is_running());
    }

    #[test]
    fn test_stop_cancels_pending_step() {
        let mut game = game_loop();
        game.start();
        game.stop();

        // Even far past the old deadline, nothing fires.
        let later = Instant::now() + Duration::from_secs(10);
        assert_eq!(game.update(later), None);
    }

    #[test]
    fn test_update_waits_for_the_deadline() {
        let mut game = game_loop();
        let before_start = Instant::now();
        game.start();

        assert_eq!(game.update(before_start), None);

        let past_deadline = before_start + Duration::from_millis(2 * STEP_MS as u64);
        let outcome = game.update(past_deadline).expect("step should fire");
        assert!(outcome.stepped);
    }

    #[test]
    fn test_update_fires_at_most_one_step() {
        let mut game = game_loop();
        game.start();

        let head_before = game.state().head();
        let far_future = Instant::now() + Duration::from_secs(60);
        game.update(far_future);

        let head = game.state().head();
        assert_eq!(head.col, head_before.col + 1);
    }

    #[test]
    fn test_command_dropped_unless_running() {
        let mut game = game_loop();

        assert!(!game.command(GameCommand::Up));
        assert_eq!(game.state().pending_direction(), None);

        game.start();
        assert!(game.command(GameCommand::Up));
        assert_eq!(game.state().pending_direction(), Some(Direction::Up));
    }

    #[test]
    fn test_command_ignores_non_steering_symbols() {
        let mut game = game_loop();
        game.start();

        assert!(!game.command(GameCommand::Pause));
        assert!(!game.command(GameCommand::Restart));
        assert_eq!(game.state().pending_direction(), None);
    }

    #[test]
    fn test_toggle_pause_is_stop_start() {
        let mut game = game_loop();
        game.start();

        game.toggle_pause();
        assert!(!game.is_running());

        game.toggle_pause();
        assert!(game.is_running());
    }

    #[test]
    fn test_pause_preserves_game_state() {
        let mut game = game_loop();
        game.start();
        game.step();
        let head = game.state().head();
        let score = game.score();

        game.toggle_pause();
        game.toggle_pause();

        assert_eq!(game.state().head(), head);
        assert_eq!(game.score(), score);
    }

    fn run_into_wall(game: &mut GameLoop) {
        // Head starts at column 5 heading right; the wall is fatal within
        // the grid width.
        game.start();
        for _ in 0..GRID_COLS {
            if game.step().died {
                return;
            }
        }
        panic!("snake never reached the wall");
    }

    #[test]
    fn test_fatal_step_stops_loop_and_latches() {
        let mut game = game_loop();
        run_into_wall(&mut game);

        assert!(!game.is_running());
        assert!(game.game_over());
        assert_eq!(game.update(Instant::now() + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_start_refused_while_dead() {
        let mut game = game_loop();
        run_into_wall(&mut game);

        game.start();
        assert!(!game.is_running());

        game.toggle_pause();
        assert!(!game.is_running());
    }

    #[test]
    fn test_reset_clears_latch_and_restores_state() {
        let mut game = game_loop();
        run_into_wall(&mut game);

        game.reset();

        assert!(!game.game_over());
        assert_eq!(game.score(), 0);
        assert_eq!(game.state().head(), Cell::new(5, GRID_ROWS / 2));

        game.start();
        assert!(game.is_running());
        assert!(game.step().stepped);
    }

    #[test]
    fn test_time_until_step_none_when_stopped() {
        let game = game_loop();
        assert_eq!(game.time_until_step(Instant::now()), None);
    }

    #[test]
    fn test_time_until_step_bounded_by_period() {
        let mut game = game_loop();
        game.start();

        let wait = game.time_until_step(Instant::now()).unwrap();
        assert!(wait <= Duration::from_millis(STEP_MS as u64));
    }
}
