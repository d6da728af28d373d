//! Dungeon orchestration
//!
//! Drives the full construction pipeline and owns the finished layout:
//! place rooms, connect them, re-stamp interiors, pick the spawn. Grid
//! and room list are immutable once construction returns; only the spawn
//! and the object list can be recomputed afterwards.

use dungen_rng::GameRng;
use serde::{Deserialize, Serialize};

use crate::error::DungeonError;

use super::corridor::connect_rooms;
use super::grid::Grid;
use super::placement::{place_rooms, stamp_room};
use super::room::Room;
use super::spawn::{Point, Spawn, choose_spawn, place_objects};

/// A fully constructed dungeon layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dungeon {
    grid: Grid,
    rooms: Vec<Room>,
    spawn: Option<Spawn>,
    objects: Vec<Point>,
}

impl Dungeon {
    /// Construct a dungeon layout.
    ///
    /// Attempts to place up to `room_count` rooms sized by `room_size`,
    /// connects them into one reachable network, restores room interiors
    /// that corridor carving wrote over, and picks a spawn room. The
    /// realized room count may be below the target.
    pub fn generate(
        height: usize,
        width: usize,
        room_count: usize,
        room_size: f64,
        rng: &mut GameRng,
    ) -> Result<Self, DungeonError> {
        if height == 0 {
            return Err(DungeonError::InvalidParameter {
                name: "height",
                value: height as f64,
            });
        }
        if width == 0 {
            return Err(DungeonError::InvalidParameter {
                name: "width",
                value: width as f64,
            });
        }
        if room_size.is_nan() || room_size <= 0.0 {
            return Err(DungeonError::InvalidParameter {
                name: "room_size",
                value: room_size,
            });
        }

        let mut grid = Grid::new(height, width);
        let rooms = place_rooms(&mut grid, room_count, room_size, rng)?;

        connect_rooms(&mut grid, &rooms)?;

        // corridors may have carved through room rectangles; restore them
        for room in &rooms {
            stamp_room(&mut grid, room)?;
        }

        let mut dungeon = Self {
            grid,
            rooms,
            spawn: None,
            objects: Vec::new(),
        };
        dungeon.reset_spawn(rng);

        Ok(dungeon)
    }

    /// The cell label matrix
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Placed rooms in creation order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The spawn location, `None` when no room could be placed
    pub fn spawn(&self) -> Option<&Spawn> {
        self.spawn.as_ref()
    }

    /// The object points from the most recent [`Self::spawn_objects`] call
    pub fn objects(&self) -> &[Point] {
        &self.objects
    }

    /// Re-pick the spawn room uniformly at random
    pub fn reset_spawn(&mut self, rng: &mut GameRng) {
        self.spawn = choose_spawn(&self.rooms, rng);
    }

    /// Pick up to `count` object points in distinct non-spawn rooms.
    ///
    /// Replaces any previously computed list.
    pub fn spawn_objects(&mut self, count: usize, rng: &mut GameRng) -> &[Point] {
        self.objects = match &self.spawn {
            Some(spawn) => place_objects(count, &self.rooms, spawn, rng),
            None => Vec::new(),
        };
        &self.objects
    }
}
