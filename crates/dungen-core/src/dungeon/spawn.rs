//! Spawn and object placement
//!
//! Picks the starting room and, on demand, a set of object placement
//! points in distinct non-spawn rooms.

use dungen_rng::GameRng;
use serde::{Deserialize, Serialize};

use super::room::Room;

/// The designated starting room and coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    /// Room the playthrough starts in
    pub room: Room,
    /// X coordinate, equal to the room's center
    pub x: usize,
    /// Y coordinate, equal to the room's center
    pub y: usize,
}

/// An object placement coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

/// Pick the spawn room uniformly at random.
///
/// `None` when no room was placed.
pub fn choose_spawn(rooms: &[Room], rng: &mut GameRng) -> Option<Spawn> {
    let room = *rng.choose(rooms)?;
    Some(Spawn {
        room,
        x: room.cx,
        y: room.cy,
    })
}

/// Pick up to `count` object points, one per distinct non-spawn room.
///
/// `count` is clamped to `rooms.len() - 1`, so with fewer than two rooms
/// the result is empty. Rooms are drawn uniformly and redrawn while
/// already used; each accepted room contributes its center pushed by a
/// bounded jitter, x from the room width and y from the room height.
pub fn place_objects(
    count: usize,
    rooms: &[Room],
    spawn: &Spawn,
    rng: &mut GameRng,
) -> Vec<Point> {
    let count = count.min(rooms.len().saturating_sub(1));

    let mut used = vec![spawn.room.id];
    let mut points = Vec::with_capacity(count);

    for _ in 0..count {
        let room = loop {
            let candidate = &rooms[rng.rn2(rooms.len() as u32) as usize];
            if !used.contains(&candidate.id) {
                break candidate;
            }
        };
        used.push(room.id);

        let jx = jitter(room.width, rng);
        let jy = jitter(room.height, rng);
        points.push(Point {
            x: (room.cx as i64 + jx) as usize,
            y: (room.cy as i64 + jy) as usize,
        });
    }

    points
}

/// Integer jitter in the symmetric quarter-dimension band, rounded toward
/// positive infinity: ceil of a uniform draw over [-dim/4, dim/4).
fn jitter(dim: usize, rng: &mut GameRng) -> i64 {
    let quarter = dim as f64 / 4.0;
    (rng.uniform() * 2.0 * quarter - quarter).ceil() as i64
}
