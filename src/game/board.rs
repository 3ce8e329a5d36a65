use anyhow::{Result, ensure};
use log::{debug, info};
use rand::rngs::StdRng;

use crate::config::MIN_BOARD_W;

use super::grid::{Cell, Grid};
use super::piece::Piece;
use super::rng::{self, RandomSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver,
}

/// The game engine: grid, falling piece, score and play state.
///
/// Commands are not blocked once the game is over, except for locking.
/// Drivers should check [`Board::can_accept_commands`] before issuing moves.
pub struct Board<R = StdRng> {
    grid: Grid,
    current: Option<Piece>,
    score: u64,
    lines_cleared: u64,
    state: GameState,
    source: R,
}

impl Board<StdRng> {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_source(width, height, rng::from_entropy())
    }

    pub fn seeded(width: usize, height: usize, seed: u64) -> Result<Self> {
        Self::with_source(width, height, rng::seeded(seed))
    }
}

impl<R: RandomSource> Board<R> {
    pub fn with_source(width: usize, height: usize, source: R) -> Result<Self> {
        Self::with_grid(Grid::new(width, height), source)
    }

    /// Starts play over a prefilled grid.
    pub fn with_grid(grid: Grid, source: R) -> Result<Self> {
        ensure!(grid.height() >= 1, "board height must be at least 1, got {}", grid.height());
        ensure!(
            grid.width() >= MIN_BOARD_W,
            "board width must be at least {MIN_BOARD_W}, got {}",
            grid.width()
        );
        Ok(Self {
            grid,
            current: None,
            score: 0,
            lines_cleared: 0,
            state: GameState::Playing,
            source,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn current_piece(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lines_cleared(&self) -> u64 {
        self.lines_cleared
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn can_accept_commands(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn spawn_position(&self) -> (i32, i32) {
        (self.width() as i32 / 2 - 2, 0)
    }

    /// Replaces the current piece with a fresh random one at the spawn
    /// position. Collision is not checked here.
    pub fn spawn(&mut self) {
        let (x, y) = self.spawn_position();
        let piece = Piece::random(&mut self.source).at(x, y);
        debug!("spawned {:?} color {} at ({x}, {y})", piece.shape, piece.color.get());
        self.current = Some(piece);
    }

    /// True when any occupied cell of the current piece is below the floor,
    /// outside the side walls or on a filled cell. False without a piece.
    pub fn check_collision(&self) -> bool {
        let Some(piece) = &self.current else {
            return false;
        };
        piece
            .cells()
            .any(|(x, y)| !matches!(self.grid.cell_at(x, y), Some(Cell::Empty)))
    }

    pub fn move_horizontal(&mut self, dx: i32) {
        let Some(piece) = self.current.as_mut() else {
            return;
        };
        let saved = *piece;
        piece.x += dx;
        if self.check_collision() {
            self.current = Some(saved);
        }
    }

    /// Rotation is rejected in place when it would collide; no kicks.
    pub fn rotate(&mut self) {
        let Some(piece) = self.current.as_mut() else {
            return;
        };
        let saved = *piece;
        piece.rotate();
        if self.check_collision() {
            self.current = Some(saved);
        }
    }

    /// Moves down one row, or locks the piece where it is if it has landed.
    pub fn soft_drop(&mut self) {
        let Some(piece) = self.current.as_mut() else {
            return;
        };
        let saved = *piece;
        piece.y += 1;
        if self.check_collision() {
            self.current = Some(saved);
            self.lock();
        }
    }

    /// Locks the piece at its current row, however far above the floor.
    pub fn hard_drop(&mut self) {
        self.lock();
    }

    /// Writes the piece into the grid, clears lines and spawns the next
    /// piece. Ends the game when the new piece already collides.
    pub fn lock(&mut self) {
        if self.state == GameState::GameOver {
            debug!("lock ignored after game over");
            return;
        }
        let Some(piece) = self.current.take() else {
            return;
        };
        for (x, y) in piece.cells() {
            if let (Ok(xu), Ok(yu)) = (usize::try_from(x), usize::try_from(y)) {
                if xu < self.grid.width() && yu < self.grid.height() {
                    self.grid.set(xu, yu, Cell::Filled(piece.color));
                }
            }
        }
        debug!("locked {:?} at ({}, {})", piece.shape, piece.x, piece.y);

        self.clear_lines();
        self.spawn();
        if self.check_collision() {
            self.state = GameState::GameOver;
            info!("game over, score {}", self.score);
        }
    }

    /// Removes full rows below row 0 and scores the square of their count.
    pub fn clear_lines(&mut self) -> usize {
        let cleared = self.grid.clear_full_rows(1);
        if cleared > 0 {
            let k = cleared as u64;
            self.score += k * k;
            self.lines_cleared += k;
            info!("cleared {cleared} lines, score {}", self.score);
        }
        cleared
    }

    pub fn reset_game(&mut self) {
        self.grid = Grid::new(self.grid.width(), self.grid.height());
        self.current = None;
        self.score = 0;
        self.lines_cleared = 0;
        self.state = GameState::Playing;
        info!("game reset");
    }
}
