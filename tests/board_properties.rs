//! Invariants checked over generated grids and command sequences.

mod common;

use blocktris::{Board, Cell, GameState, Grid, Piece};
use common::{Script, filled};
use proptest::prelude::*;

const W: usize = 10;
const H: usize = 20;

/// Random fill that leaves the 4x4 spawn box empty.
fn grid_from(mask: &[bool]) -> Grid {
    let mut grid = Grid::new(W, H);
    for (i, &on) in mask.iter().enumerate() {
        let (x, y) = (i % W, i / W);
        let in_spawn_box = (3..7).contains(&x) && y < 4;
        if on && !in_spawn_box {
            grid.set(x, y, filled(1 + (i % 6) as u8));
        }
    }
    grid
}

fn fits(grid: &Grid, piece: &Piece) -> bool {
    piece
        .cells()
        .all(|(x, y)| matches!(grid.cell_at(x, y), Some(Cell::Empty)))
}

proptest! {
    #[test]
    fn moves_and_rotations_never_leave_an_illegal_piece(
        mask in prop::collection::vec(any::<bool>(), W * H),
        shape in 0usize..7,
        ops in prop::collection::vec(0u8..4, 0..80),
    ) {
        let mut board = Board::with_grid(grid_from(&mask), Script::new(&[shape, 1])).unwrap();
        board.spawn();
        prop_assert!(!board.check_collision());

        for op in ops {
            let before = *board.current_piece().unwrap();
            let mut probe = before;
            match op {
                0 | 1 | 2 => {
                    let dx = i32::from(op) - 1;
                    probe.x += dx;
                    board.move_horizontal(dx);
                }
                _ => {
                    probe.rotate();
                    board.rotate();
                }
            }
            let after = *board.current_piece().unwrap();
            let expected = if fits(board.grid(), &probe) { probe } else { before };
            prop_assert_eq!(after, expected);
            prop_assert!(!board.check_collision());
            prop_assert!(fits(board.grid(), &after));
        }
    }

    #[test]
    fn clear_lines_removes_full_rows_and_scores_their_square(
        rows in prop::collection::vec((any::<bool>(), prop::collection::vec(any::<bool>(), W)), H),
    ) {
        let mut grid = Grid::new(W, H);
        for (y, (full, mask)) in rows.iter().enumerate() {
            for (x, on) in mask.iter().enumerate() {
                if *full || *on {
                    grid.set(x, y, filled(1 + (y % 6) as u8));
                }
            }
        }
        let expected = (1..H).filter(|&y| grid.is_row_full(y)).count();
        let kept: Vec<Vec<Cell>> = (0..H)
            .filter(|&y| y == 0 || !grid.is_row_full(y))
            .map(|y| grid.row(y).to_vec())
            .collect();

        let mut board = Board::with_grid(grid, Script::new(&[0])).unwrap();
        let cleared = board.clear_lines();

        prop_assert_eq!(cleared, expected);
        prop_assert_eq!(board.score(), (cleared * cleared) as u64);
        for y in 0..cleared {
            prop_assert!(board.grid().row(y).iter().all(|c| *c == Cell::Empty));
        }
        for (i, row) in kept.iter().enumerate() {
            prop_assert_eq!(board.grid().row(cleared + i), row.as_slice());
        }
    }

    #[test]
    fn spawn_fits_any_empty_board(width in 4usize..24, height in 4usize..32, shape in 0usize..7) {
        let mut board = Board::with_source(width, height, Script::new(&[shape, 1])).unwrap();
        board.spawn();
        prop_assert!(!board.check_collision());
    }

    #[test]
    fn score_never_decreases_during_play(
        seed in any::<u64>(),
        ops in prop::collection::vec(0u8..5, 0..300),
    ) {
        let mut board = Board::seeded(W, H, seed).unwrap();
        board.spawn();
        let mut last = 0;
        for op in ops {
            if !board.can_accept_commands() {
                break;
            }
            match op {
                0 => board.move_horizontal(-1),
                1 => board.move_horizontal(1),
                2 => board.rotate(),
                3 => board.soft_drop(),
                _ => board.hard_drop(),
            }
            prop_assert!(board.score() >= last);
            last = board.score();
            prop_assert!(board.current_piece().is_some());
            prop_assert!(board.state() == GameState::GameOver || !board.check_collision());
        }
    }
}
