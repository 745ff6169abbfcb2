use std::fmt;

/// Errors the simulation can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// The ant's position left the grid, so its current cell cannot be read
    AntOutOfBounds { row: i32, col: i32 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::AntOutOfBounds { row, col } => {
                write!(f, "ant left the grid at ({}, {})", row, col)
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimError>;
