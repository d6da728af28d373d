//! Cell label matrix
//!
//! Pure storage: a height x width matrix of integer labels with checked
//! access. Cell meaning: 0 empty, 1 corridor, >= 2 the interior of the
//! room with that id.

use serde::{Deserialize, Serialize};

use crate::error::DungeonError;

/// Label of an unused cell
pub const EMPTY: u32 = 0;

/// Label of a corridor cell
pub const CORRIDOR: u32 = 1;

/// Lowest label assigned to a room interior
pub const FIRST_ROOM_ID: u32 = 2;

/// Row-major matrix of cell labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<u32>>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Allocate a grid with every cell set to [`EMPTY`]
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            cells: vec![vec![EMPTY; width]; height],
            height,
            width,
        }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Check whether (y, x) lies inside the matrix
    pub fn in_bounds(&self, y: usize, x: usize) -> bool {
        y < self.height && x < self.width
    }

    /// Read the label at (y, x)
    pub fn get(&self, y: usize, x: usize) -> Result<u32, DungeonError> {
        if !self.in_bounds(y, x) {
            return Err(self.out_of_range(y, x));
        }
        Ok(self.cells[y][x])
    }

    /// Write the label at (y, x)
    pub fn set(&mut self, y: usize, x: usize, value: u32) -> Result<(), DungeonError> {
        if !self.in_bounds(y, x) {
            return Err(self.out_of_range(y, x));
        }
        self.cells[y][x] = value;
        Ok(())
    }

    fn out_of_range(&self, y: usize, x: usize) -> DungeonError {
        DungeonError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}
