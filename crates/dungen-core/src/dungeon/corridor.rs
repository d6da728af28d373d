//! Corridor connection
//!
//! Links every room, in creation order, to its nearest not-yet-processed
//! neighbor by center distance, carving an L-shaped corridor between the
//! two centers. Each room except the last links forward to an unprocessed
//! one, so the result is a chain/tree covering all rooms. Carving is
//! oblivious to what it crosses; the orchestrator re-stamps room
//! interiors afterwards.

use crate::error::DungeonError;

use super::grid::{CORRIDOR, Grid};
use super::room::Room;

/// Connect all rooms into one reachable network.
///
/// Deterministic: the linkage depends only on room centers and list order.
pub fn connect_rooms(grid: &mut Grid, rooms: &[Room]) -> Result<(), DungeonError> {
    let mut processed: Vec<u32> = Vec::with_capacity(rooms.len());

    for room in rooms {
        // excluded before its own search, so a room never links to itself
        // or back to an earlier room
        processed.push(room.id);
        if let Some(nearest) = find_nearest(room, rooms, &processed) {
            carve_link(grid, room, &nearest)?;
        }
    }

    Ok(())
}

/// Nearest room by Euclidean center distance, skipping excluded ids.
///
/// Ties keep the first room in list order: only a strictly smaller
/// distance replaces the running minimum.
fn find_nearest(room: &Room, rooms: &[Room], except: &[u32]) -> Option<Room> {
    let mut nearest = None;
    let mut min_dist = f64::INFINITY;

    for candidate in rooms {
        if except.contains(&candidate.id) {
            continue;
        }

        let dx = room.cx as f64 - candidate.cx as f64;
        let dy = room.cy as f64 - candidate.cy as f64;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist < min_dist {
            nearest = Some(*candidate);
            min_dist = dist;
        }
    }

    nearest
}

/// Carve an L-shaped corridor from `from`'s center to `to`'s center:
/// vertical leg first, then horizontal.
///
/// Each entered cell is written to [`CORRIDOR`] as soon as it is stepped
/// into, including cells inside other rooms' rectangles.
fn carve_link(grid: &mut Grid, from: &Room, to: &Room) -> Result<(), DungeonError> {
    let dx: i64 = if from.cx > to.cx { -1 } else { 1 };
    let dy: i64 = if from.cy > to.cy { -1 } else { 1 };
    let tx = to.cx as i64;
    let ty = to.cy as i64;

    let mut x = from.cx as i64;
    let mut y = from.cy as i64;

    loop {
        if grid.get(y as usize, x as usize)? == to.id {
            break;
        }

        if y != ty {
            y += dy;
        } else if x != tx {
            x += dx;
        } else {
            break;
        }

        grid.set(y as usize, x as usize, CORRIDOR)?;
    }

    Ok(())
}
