// grid.rs - Cell storage for the ant's world

use egui::Color32;

/// One grid square: a marked/unmarked flag plus its cached display color.
///
/// The color is derived from the flag, not independent state. Simulation
/// code must go through [`Cell::set_marked`] so the two stay in sync; only
/// [`Grid::set_cell_color`] writes the color on its own (ant placement).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    marked: bool,
    color: Color32,
}

impl Cell {
    pub const UNMARKED_COLOR: Color32 = Color32::BLACK;
    pub const MARKED_COLOR: Color32 = Color32::WHITE;

    #[inline]
    pub fn marked(&self) -> bool {
        self.marked
    }

    #[inline]
    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Set the flag and re-derive the display color from it
    pub fn set_marked(&mut self, marked: bool) {
        self.marked = marked;
        self.color = if marked {
            Self::MARKED_COLOR
        } else {
            Self::UNMARKED_COLOR
        };
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            marked: false,
            color: Self::UNMARKED_COLOR,
        }
    }
}

/// Fixed-size 2D cell array, row-major. Dimensions never change after
/// construction. Coordinates are `i32` so positions outside the grid are
/// representable; all accessors bounds-check and out-of-range lookups
/// return `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell unmarked and black
    pub fn new(rows: i32, cols: i32) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); (rows as usize) * (cols as usize)],
        }
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[inline]
    pub fn is_valid(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    #[inline]
    fn index(&self, row: i32, col: i32) -> usize {
        (row * self.cols + col) as usize
    }

    pub fn cell(&self, row: i32, col: i32) -> Option<&Cell> {
        self.is_valid(row, col)
            .then(|| &self.cells[self.index(row, col)])
    }

    pub fn cell_mut(&mut self, row: i32, col: i32) -> Option<&mut Cell> {
        if self.is_valid(row, col) {
            let idx = self.index(row, col);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Overwrite a cell's display color, leaving its flag untouched.
    /// Silently ignores out-of-bounds coordinates. This can desynchronize
    /// color from flag; only ant placement uses it.
    pub fn set_cell_color(&mut self, row: i32, col: i32, color: Color32) {
        if self.is_valid(row, col) {
            let idx = self.index(row, col);
            self.cells[idx].color = color;
        }
    }

    /// Number of marked cells
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.marked).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_grid_is_unmarked_and_black() {
        let grid = Grid::new(8, 8);

        for row in 0..8 {
            for col in 0..8 {
                let cell = grid.cell(row, col).unwrap();
                assert!(!cell.marked());
                assert_eq!(cell.color(), Cell::UNMARKED_COLOR);
            }
        }
        assert_eq!(grid.marked_count(), 0);
    }

    #[test]
    fn bounds_checking() {
        let grid = Grid::new(4, 6);

        assert!(grid.is_valid(0, 0));
        assert!(grid.is_valid(3, 5));
        assert!(!grid.is_valid(4, 0));
        assert!(!grid.is_valid(0, 6));
        assert!(!grid.is_valid(-1, 0));
        assert!(!grid.is_valid(0, -1));

        assert!(grid.cell(3, 5).is_some());
        assert!(grid.cell(4, 0).is_none());
        assert!(grid.cell(-1, 2).is_none());
    }

    #[test]
    fn set_marked_keeps_color_in_sync() {
        let mut cell = Cell::default();

        cell.set_marked(true);
        assert!(cell.marked());
        assert_eq!(cell.color(), Cell::MARKED_COLOR);

        cell.set_marked(false);
        assert!(!cell.marked());
        assert_eq!(cell.color(), Cell::UNMARKED_COLOR);
    }

    #[test]
    fn set_cell_color_writes_color_only() {
        let mut grid = Grid::new(4, 4);

        grid.set_cell_color(1, 2, Color32::RED);
        let cell = grid.cell(1, 2).unwrap();
        assert_eq!(cell.color(), Color32::RED);
        assert!(!cell.marked(), "flag must be untouched");
    }

    #[test]
    fn set_cell_color_out_of_bounds_is_noop() {
        let mut grid = Grid::new(4, 4);
        let before = grid.clone();

        grid.set_cell_color(4, 0, Color32::RED);
        grid.set_cell_color(0, 4, Color32::RED);
        grid.set_cell_color(-1, -1, Color32::RED);

        assert_eq!(grid, before);
    }

    #[test]
    fn marked_count_tracks_flags() {
        let mut grid = Grid::new(4, 4);

        grid.cell_mut(0, 0).unwrap().set_marked(true);
        grid.cell_mut(3, 3).unwrap().set_marked(true);
        assert_eq!(grid.marked_count(), 2);

        grid.cell_mut(0, 0).unwrap().set_marked(false);
        assert_eq!(grid.marked_count(), 1);
    }
}
