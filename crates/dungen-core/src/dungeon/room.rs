//! Room record

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangular room stamped into the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Grid label of the room interior (>= 2, assigned in placement order)
    pub id: u32,
    /// X coordinate of the left edge
    pub x: usize,
    /// Y coordinate of the top edge
    pub y: usize,
    /// Width of the interior
    pub width: usize,
    /// Height of the interior
    pub height: usize,
    /// X coordinate of the center cell
    pub cx: usize,
    /// Y coordinate of the center cell
    pub cy: usize,
}

impl Room {
    /// Create a room at (x, y), computing its center
    pub fn new(id: u32, x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            cx: x + width / 2,
            cy: y + height / 2,
        }
    }

    /// Center cell as (cx, cy)
    pub fn center(&self) -> (usize, usize) {
        (self.cx, self.cy)
    }
}
