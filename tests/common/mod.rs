#![allow(dead_code)]

use blocktris::{Cell, Grid, PaletteIndex, RandomSource};

/// Replays a fixed list of draws, cycling when exhausted.
pub struct Script {
    values: Vec<usize>,
    pos: usize,
}

impl Script {
    pub fn new(values: &[usize]) -> Self {
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }
}

impl RandomSource for Script {
    fn next_in_range(&mut self, low: usize, high: usize) -> usize {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v.clamp(low, high)
    }
}

pub fn color(n: u8) -> PaletteIndex {
    PaletteIndex::new(n).expect("valid palette index")
}

pub fn filled(n: u8) -> Cell {
    Cell::Filled(color(n))
}

pub fn fill_row_except(grid: &mut Grid, y: usize, hole: Option<usize>, value: Cell) {
    for x in 0..grid.width() {
        if Some(x) != hole {
            grid.set(x, y, value);
        }
    }
}

pub fn filled_count(grid: &Grid) -> usize {
    grid.rows().flatten().filter(|c| c.is_filled()).count()
}
