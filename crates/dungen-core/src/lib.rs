//! dungen-core: procedural 2D dungeon layout generation
//!
//! Builds an in-memory level description: a grid of cell labels, a set of
//! non-overlapping rooms connected into one reachable network, a spawn
//! location, and on-demand object placement points. The crate has no I/O;
//! a host consumes the finished [`Dungeon`] value programmatically.
//!
//! All randomness is drawn from an injected [`GameRng`], so a host can
//! reproduce a layout exactly from its seed.

pub mod dungeon;
pub mod error;

pub use dungeon::{CORRIDOR, Dungeon, EMPTY, FIRST_ROOM_ID, Grid, Point, Room, Spawn};
pub use dungen_rng::GameRng;
pub use error::DungeonError;
