// Shared game/UI constants.
pub const BOARD_W: usize = 10;
pub const BOARD_H: usize = 20;
pub const MIN_BOARD_W: usize = 4; // every shape fits inside a 4-wide box
// Largest board the terminal front-end accepts.
pub const MAX_BOARD_W: usize = 100;
pub const MAX_BOARD_H: usize = 100;
pub const GAME_FPS: u32 = 25;
pub const FRAME_COUNTER_WRAP: u32 = 100_000;
// Terminals rarely report key release, so a held soft drop expires on its own.
pub const SOFT_DROP_GRACE_MS: u64 = 150;
pub const CELL_W: usize = 2; // render each block as two characters wide
pub const SIDEBAR_W: u16 = 20;

/// RGB colors; index 0 marks an empty cell and is never drawn as a block.
pub const PALETTE: [(u8, u8, u8); 7] = [
    (10, 10, 10),
    (130, 45, 175),
    (105, 175, 175),
    (75, 35, 30),
    (75, 130, 25),
    (175, 35, 25),
    (175, 45, 115),
];

pub const fn play_w(board_w: usize) -> usize {
    board_w * CELL_W + 2 // inner width plus side walls
}

pub const fn play_h(board_h: usize) -> usize {
    board_h + 2 // inner height plus ceiling/floor
}
