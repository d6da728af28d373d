//! Dungeon generation
//!
//! Grid storage, room placement, corridor connection, and spawn planning,
//! orchestrated by [`Dungeon::generate`].

mod corridor;
mod grid;
mod level;
mod placement;
mod room;
mod spawn;

pub use corridor::connect_rooms;
pub use grid::{CORRIDOR, EMPTY, FIRST_ROOM_ID, Grid};
pub use level::Dungeon;
pub use placement::{place_rooms, stamp_room};
pub use room::Room;
pub use spawn::{Point, Spawn, choose_spawn, place_objects};
