pub mod board;
pub mod grid;
pub mod piece;
pub mod rng;

pub use board::{Board, GameState};
pub use grid::{Cell, Grid};
pub use piece::{PaletteIndex, Piece, SHAPE_CATALOG, Shape};
pub use rng::RandomSource;
