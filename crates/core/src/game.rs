//! Game engine - owns the snake body, fruit, score, and direction buffer
//!
//! The engine is a two-state machine: `Alive` until a step walks the head out
//! of bounds or into the body, then `Dead` until the next reset. All
//! mutation happens inside [`GameState::advance`] and [`GameState::reset`];
//! callers schedule steps, the engine never keeps time itself.

use crate::render::BoardRenderer;
use crate::rng::SimpleRng;
use tui_snake_types::{Cell, Direction, FRUIT_SPAWN_COL, SPAWN_COL};

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether the step ran at all (false when the game is already dead)
    pub stepped: bool,
    /// Whether the head landed on the fruit this step
    pub ate_fruit: bool,
    /// Whether this step hit a wall or the body, ending the game
    pub died: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    rows: i16,
    cols: i16,
    /// Body cells, head first, tail last; never empty
    segments: Vec<Cell>,
    /// Travel direction of the head
    heading: Direction,
    /// One-step buffer: the latest accepted direction request
    pending: Option<Direction>,
    fruit: Cell,
    score: u32,
    alive: bool,
    rng: SimpleRng,
}

impl GameState {
    /// Create a game in the initial configuration.
    ///
    /// The snake starts as a single segment at column 5 on the center row,
    /// heading right; the fruit sits two cells to its left.
    pub fn new(rows: i16, cols: i16, seed: u32) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        let center_row = rows / 2;

        Self {
            rows,
            cols,
            segments: vec![Cell::new(SPAWN_COL, center_row)],
            heading: Direction::Right,
            pending: None,
            fruit: Cell::new(FRUIT_SPAWN_COL, center_row),
            score: 0,
            alive: true,
            rng: SimpleRng::new(seed),
        }
    }

    /// Rebuild the initial configuration, continuing the RNG stream so a new
    /// run sees a fresh fruit sequence.
    pub fn reset(&mut self) {
        let seed = self.rng.state();
        *self = Self::new(self.rows, self.cols, seed);
    }

    pub fn alive(&self) -> bool {
        self.alive
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn fruit(&self) -> Cell {
        self.fruit
    }

    /// Body cells, head first
    pub fn segments(&self) -> &[Cell] {
        &self.segments
    }

    pub fn rows(&self) -> i16 {
        self.rows
    }

    pub fn cols(&self) -> i16 {
        self.cols
    }

    /// Buffer a direction change for the next step.
    ///
    /// Rejected while dead, and rejected when the request would reverse the
    /// current heading outright (instant self-collision for any snake longer
    /// than one cell). An accepted request overwrites any buffered one; only
    /// the latest request before a step matters.
    pub fn request_direction(&mut self, dir: Direction) -> bool {
        if !self.alive {
            return false;
        }
        if dir == self.heading.opposite() {
            return false;
        }
        self.pending = Some(dir);
        true
    }

    /// Run one simulation step.
    ///
    /// Applies the buffered direction, shifts the body, moves the head, and
    /// handles fruit growth. On a fatal collision the head cell is left
    /// uncommitted: the body keeps its post-shift layout and the state flips
    /// to dead. Calling this while dead is a no-op.
    pub fn advance(&mut self) -> StepOutcome {
        if !self.alive {
            return StepOutcome::default();
        }

        if let Some(dir) = self.pending.take() {
            self.heading = dir;
        }

        let vacated = *self.segments.last().expect("body is never empty");

        // Each segment takes its predecessor's pre-shift cell, so walk from
        // the tail toward the head.
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }

        let next = self.segments[0].step(self.heading);

        if self.out_of_bounds(next) || self.hits_body(next) {
            self.alive = false;
            return StepOutcome {
                stepped: true,
                ate_fruit: false,
                died: true,
            };
        }

        self.segments[0] = next;

        let mut ate_fruit = false;
        if next == self.fruit {
            self.score += 1;
            // Grow first: the re-placed fruit must avoid the new tail too.
            self.segments.push(vacated);
            self.fruit = self.place_fruit();
            ate_fruit = true;
        }

        StepOutcome {
            stepped: true,
            ate_fruit,
            died: false,
        }
    }

    /// Paint the current state through the renderer contract.
    ///
    /// Always the same order: clear, head, fruit, then the body without the
    /// head.
    pub fn draw<R: BoardRenderer>(&self, renderer: &mut R) {
        renderer.clear();
        renderer.draw_head(self.segments[0], self.heading);
        renderer.draw_fruit(self.fruit);
        for &cell in &self.segments[1..] {
            renderer.draw_body(cell);
        }
    }

    fn out_of_bounds(&self, cell: Cell) -> bool {
        cell.col < 0 || cell.col >= self.cols || cell.row < 0 || cell.row >= self.rows
    }

    fn hits_body(&self, cell: Cell) -> bool {
        // The head slot still holds its pre-step cell here; a head may move
        // through where it just was, so only the rest of the body counts.
        self.segments[1..].contains(&cell)
    }

    /// Uniform rejection sampling over unoccupied cells.
    ///
    /// Unbounded on purpose: a board completely full of snake is unreachable
    /// at these grid dimensions.
    fn place_fruit(&mut self) -> Cell {
        loop {
            let cell = Cell::new(
                self.rng.next_range(self.cols as u32) as i16,
                self.rng.next_range(self.rows as u32) as i16,
            );
            if !self.segments.contains(&cell) {
                return cell;
            }
        }
    }
}
