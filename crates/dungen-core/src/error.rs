//! Error types for dungeon construction and grid access.

use thiserror::Error;

/// Errors surfaced by dungeon construction and grid access
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DungeonError {
    /// A construction parameter was outside its valid range
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A grid access landed outside the allocated matrix
    #[error("grid access ({x}, {y}) out of range for {width}x{height} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}
