use crate::config::PALETTE;

use super::rng::RandomSource;

/// Shape families in catalog order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    Z,
    S,
    J,
    L,
    T,
    O,
}

/// Rotation variants per family. Each variant lists the occupied cells of a
/// 4x4 box, `index = row * 4 + col`.
pub static SHAPE_CATALOG: [&[[u8; 4]]; 7] = [
    &[[1, 5, 9, 13], [4, 5, 6, 7]],
    &[[4, 5, 9, 10], [2, 6, 5, 9]],
    &[[6, 7, 9, 10], [1, 5, 6, 10]],
    &[[1, 2, 5, 9], [0, 4, 5, 6], [1, 5, 9, 8], [4, 5, 6, 10]],
    &[[1, 2, 6, 10], [5, 6, 7, 9], [2, 6, 10, 11], [3, 5, 6, 7]],
    &[[1, 4, 5, 6], [1, 4, 5, 9], [4, 5, 6, 9], [1, 5, 6, 9]],
    &[[1, 2, 5, 6]],
];

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::Z,
        Shape::S,
        Shape::J,
        Shape::L,
        Shape::T,
        Shape::O,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn variants(self) -> &'static [[u8; 4]] {
        SHAPE_CATALOG[self.index()]
    }
}

/// A non-empty palette slot, `1..PALETTE.len()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PaletteIndex(u8);

impl PaletteIndex {
    pub const FIRST: PaletteIndex = PaletteIndex(1);

    pub fn new(index: u8) -> Option<Self> {
        (1..PALETTE.len()).contains(&(index as usize)).then_some(Self(index))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        PALETTE[self.0 as usize]
    }
}

/// The falling piece. `x`/`y` place the top-left corner of its 4x4 box and may
/// sit outside the grid; legality is decided by the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub shape: Shape,
    pub color: PaletteIndex,
    rotation: usize,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    pub fn new(shape: Shape, color: PaletteIndex) -> Self {
        Self {
            shape,
            color,
            rotation: 0,
            x: 0,
            y: 0,
        }
    }

    /// Draws the shape first, then the color. A source that answers outside
    /// the requested range trips a debug assertion.
    pub fn random<R: RandomSource + ?Sized>(source: &mut R) -> Self {
        let shape_idx = source.next_in_range(0, Shape::ALL.len() - 1);
        let shape = Shape::from_index(shape_idx);
        debug_assert!(shape.is_some(), "shape draw {shape_idx} out of range");
        let color_idx = source.next_in_range(1, PALETTE.len() - 1);
        let color = u8::try_from(color_idx).ok().and_then(PaletteIndex::new);
        debug_assert!(color.is_some(), "color draw {color_idx} out of range");
        Self::new(
            shape.unwrap_or(Shape::I),
            color.unwrap_or(PaletteIndex::FIRST),
        )
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn variant_count(&self) -> usize {
        self.shape.variants().len()
    }

    /// Occupied 4x4-relative indices for the current rotation.
    pub fn current_cells(&self) -> &'static [u8; 4] {
        &self.shape.variants()[self.rotation]
    }

    /// Occupied cells in board coordinates, as `(x, y)`.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.current_cells().iter().map(move |&idx| {
            let (row, col) = (i32::from(idx / 4), i32::from(idx % 4));
            (self.x + col, self.y + row)
        })
    }

    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % self.variant_count();
    }
}
