// ant.rs - The automaton agent and its step rule

use egui::Color32;

use crate::error::{Result, SimError};
use crate::grid::Grid;

/// 4 fixed headings, cyclic under quarter turns
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub enum Heading {
    Up = 0,
    Right = 90,
    Down = 180,
    Left = 270,
}

impl Heading {
    /// Heading as degrees, for display
    #[inline]
    pub const fn degrees(self) -> u16 {
        self as u16
    }

    /// Rotate +90 degrees
    #[inline]
    pub const fn turn_right(self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    /// Rotate -90 degrees
    #[inline]
    pub const fn turn_left(self) -> Self {
        match self {
            Heading::Up => Heading::Left,
            Heading::Left => Heading::Down,
            Heading::Down => Heading::Right,
            Heading::Right => Heading::Up,
        }
    }

    /// Row change when advancing one cell along this heading
    #[inline]
    pub const fn row_delta(self) -> i32 {
        match self {
            Heading::Up => -1,
            Heading::Down => 1,
            _ => 0,
        }
    }

    /// Column change when advancing one cell along this heading
    #[inline]
    pub const fn col_delta(self) -> i32 {
        match self {
            Heading::Right => 1,
            Heading::Left => -1,
            _ => 0,
        }
    }
}

/// The ant: a single-cell mover with a discrete heading.
///
/// The ant holds no reference to its grid; callers lend it one per
/// operation, which keeps ownership with whoever built the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Ant {
    pub row: i32,
    pub col: i32,
    pub heading: Heading,
    pub color: Color32,
    /// Steps per second, adjustable from the settings window
    pub speed: f32,
}

impl Default for Ant {
    fn default() -> Self {
        Self {
            row: 0,
            col: 0,
            heading: Heading::Up,
            color: Color32::RED,
            speed: 10.0,
        }
    }
}

impl Ant {
    /// Advance the automaton by one step.
    ///
    /// Marked cell: turn right and clear it. Unmarked: turn left and mark
    /// it. Either way the cell's color is re-derived from the new flag and
    /// the ant moves one cell along its new heading. The move itself is
    /// not bounds-checked; a later step from outside the grid reports
    /// [`SimError::AntOutOfBounds`] and leaves all state unchanged.
    pub fn step(&mut self, grid: &mut Grid) -> Result<()> {
        let cell = grid
            .cell_mut(self.row, self.col)
            .ok_or(SimError::AntOutOfBounds {
                row: self.row,
                col: self.col,
            })?;

        if cell.marked() {
            self.heading = self.heading.turn_right();
            cell.set_marked(false);
        } else {
            self.heading = self.heading.turn_left();
            cell.set_marked(true);
        }

        self.row += self.heading.row_delta();
        self.col += self.heading.col_delta();
        Ok(())
    }

    /// Bounds-checked placement. Out-of-bounds coordinates leave the ant
    /// where it was. The target cell is painted in the ant's color either
    /// way (a no-op when out of bounds) - a cosmetic quirk, not simulation
    /// state.
    pub fn place(&mut self, grid: &mut Grid, row: i32, col: i32) {
        if grid.is_valid(row, col) {
            self.row = row;
            self.col = col;
        }
        grid.set_cell_color(row, col, self.color);
    }
}
