use super::piece::PaletteIndex;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Filled(PaletteIndex),
}

impl Cell {
    /// Palette index of the cell; 0 when empty.
    pub fn palette_index(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled(color) => color.get(),
        }
    }

    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

/// Row-major store of `height` rows by `width` columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.idx(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: Cell) {
        let idx = self.idx(x, y);
        self.cells[idx] = value;
    }

    /// Cell at signed coordinates, `None` when outside the grid.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        let xu = usize::try_from(x).ok()?;
        let yu = usize::try_from(y).ok()?;
        (xu < self.width && yu < self.height).then(|| self.get(xu, yu))
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        let start = self.idx(0, y);
        &self.cells[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics; a zero-width grid has no cells to yield anyway.
        self.cells.chunks(self.width.max(1))
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).iter().all(|c| c.is_filled())
    }

    /// Removes every full row in `first_row..height` and pads the top with as
    /// many empty rows. Rows above `first_row` are never removed. Returns the
    /// number of rows removed.
    pub fn clear_full_rows(&mut self, first_row: usize) -> usize {
        let full: Vec<bool> = (0..self.height)
            .map(|y| y >= first_row && self.is_row_full(y))
            .collect();
        let cleared = full.iter().filter(|&&f| f).count();
        if cleared == 0 {
            return 0;
        }
        let mut new_cells = vec![Cell::Empty; cleared * self.width];
        new_cells.reserve(self.cells.len() - new_cells.len());
        for (y, _) in full.iter().enumerate().filter(|(_, f)| !**f) {
            new_cells.extend_from_slice(self.row(y));
        }
        self.cells = new_cells;
        cleared
    }
}
