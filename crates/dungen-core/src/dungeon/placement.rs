//! Room placement
//!
//! Samples room dimensions from the size parameter, then sweeps the grid
//! for a non-colliding position. Rooms keep a one-cell margin from all
//! existing content; a room that cannot be placed before the sweep runs
//! off the bottom of the grid is silently dropped.

use dungen_rng::GameRng;

use crate::error::DungeonError;

use super::grid::{EMPTY, FIRST_ROOM_ID, Grid};
use super::room::Room;

/// Attempt to place up to `target_count` rooms, stamping each success
/// into the grid.
///
/// Each attempt samples height and width independently in
/// `[room_size / 2, room_size)`. The realized room count may be smaller
/// than requested; failed attempts consume an id-free slot and are not
/// retried.
pub fn place_rooms(
    grid: &mut Grid,
    target_count: usize,
    room_size: f64,
    rng: &mut GameRng,
) -> Result<Vec<Room>, DungeonError> {
    let mut rooms = Vec::new();
    let mut next_id = FIRST_ROOM_ID;

    for _ in 0..target_count {
        if let Some(room) = try_place_room(grid, next_id, room_size, rng)? {
            stamp_room(grid, &room)?;
            rooms.push(room);
            next_id += 1;
        }
    }

    Ok(rooms)
}

/// Search for a non-colliding position for one freshly sized room.
///
/// The sweep starts at (1, 1) and advances x by a random step of 1..=4
/// while the candidate collides, wrapping to the next row when the
/// rectangle would touch the right border. Running past the bottom border
/// abandons the attempt.
fn try_place_room(
    grid: &Grid,
    id: u32,
    room_size: f64,
    rng: &mut GameRng,
) -> Result<Option<Room>, DungeonError> {
    let height = (rng.uniform() * room_size / 2.0 + room_size / 2.0).floor() as usize;
    let width = (rng.uniform() * room_size / 2.0 + room_size / 2.0).floor() as usize;

    let mut x = 1;
    let mut y = 1;

    while is_colliding(grid, x, y, width, height)? {
        x += rng.rnd(4) as usize;
        if x + width + 1 >= grid.width() {
            x = 1;
            y += 1;
            if y + height + 1 >= grid.height() {
                return Ok(None);
            }
        }
    }

    Ok(Some(Room::new(id, x, y, width, height)))
}

/// Check the candidate rectangle, inflated by one cell on each side and
/// clipped to the grid, against existing content.
fn is_colliding(
    grid: &Grid,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> Result<bool, DungeonError> {
    for yy in y.saturating_sub(1)..(y + height + 1).min(grid.height()) {
        for xx in x.saturating_sub(1)..(x + width + 1).min(grid.width()) {
            if grid.get(yy, xx)? != EMPTY {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Write the room's id over its rectangle.
///
/// Also used as the final pass of construction to restore interiors that
/// corridor carving wrote over.
pub fn stamp_room(grid: &mut Grid, room: &Room) -> Result<(), DungeonError> {
    for y in room.y..room.y + room.height {
        for x in room.x..room.x + room.width {
            grid.set(y, x, room.id)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooms_stay_inside_border() {
        let mut grid = Grid::new(20, 20);
        let mut rng = GameRng::new(7);

        let rooms = place_rooms(&mut grid, 5, 6.0, &mut rng).unwrap();
        assert!(!rooms.is_empty());

        for room in &rooms {
            assert!(room.x >= 1 && room.y >= 1);
            assert!(room.x + room.width < 20);
            assert!(room.y + room.height < 20);
            assert!(room.width >= 3 && room.width < 6);
            assert!(room.height >= 3 && room.height < 6);
        }
    }

    #[test]
    fn test_ids_start_at_two_and_increase() {
        let mut grid = Grid::new(30, 30);
        let mut rng = GameRng::new(1);

        let rooms = place_rooms(&mut grid, 4, 5.0, &mut rng).unwrap();
        for (i, room) in rooms.iter().enumerate() {
            assert_eq!(room.id, FIRST_ROOM_ID + i as u32);
        }
    }

    #[test]
    fn test_rooms_keep_one_cell_margin() {
        let mut grid = Grid::new(24, 24);
        let mut rng = GameRng::new(99);

        let rooms = place_rooms(&mut grid, 8, 5.0, &mut rng).unwrap();
        assert!(rooms.len() >= 2);

        // at least one empty column or row between any two rectangles: no
        // room's collision margin contains another room's cells
        for (i, a) in rooms.iter().enumerate() {
            for b in rooms.iter().skip(i + 1) {
                let separated = a.x + a.width + 1 <= b.x
                    || b.x + b.width + 1 <= a.x
                    || a.y + a.height + 1 <= b.y
                    || b.y + b.height + 1 <= a.y;
                assert!(separated, "rooms {} and {} touch", a.id, b.id);
            }
        }
    }

    #[test]
    fn test_stamped_cells_match_room_ids() {
        let mut grid = Grid::new(20, 20);
        let mut rng = GameRng::new(3);

        let rooms = place_rooms(&mut grid, 3, 6.0, &mut rng).unwrap();
        for room in &rooms {
            for y in room.y..room.y + room.height {
                for x in room.x..room.x + room.width {
                    assert_eq!(grid.get(y, x).unwrap(), room.id);
                }
            }
        }
    }

    #[test]
    fn test_cramped_grid_places_fewer_rooms() {
        let mut grid = Grid::new(8, 8);
        let mut rng = GameRng::new(5);

        // 8x8 with 1-cell margins fits one size-3..5 room, maybe two
        let rooms = place_rooms(&mut grid, 10, 6.0, &mut rng).unwrap();
        assert!(rooms.len() < 10);
    }

    #[test]
    fn test_same_seed_same_rooms() {
        let mut grid_a = Grid::new(20, 20);
        let mut grid_b = Grid::new(20, 20);
        let rooms_a = place_rooms(&mut grid_a, 5, 6.0, &mut GameRng::new(42)).unwrap();
        let rooms_b = place_rooms(&mut grid_b, 5, 6.0, &mut GameRng::new(42)).unwrap();
        assert_eq!(rooms_a, rooms_b);
        assert_eq!(grid_a, grid_b);
    }

    #[test]
    fn test_stamp_out_of_range() {
        let mut grid = Grid::new(4, 4);
        let room = Room::new(2, 2, 2, 5, 5);
        assert!(stamp_room(&mut grid, &room).is_err());
    }
}
