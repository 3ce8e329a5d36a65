pub mod config;
pub mod game;

pub use config::{BOARD_H, BOARD_W, GAME_FPS, PALETTE};
pub use game::{
    Board, Cell, GameState, Grid, PaletteIndex, Piece, RandomSource, SHAPE_CATALOG, Shape,
};
