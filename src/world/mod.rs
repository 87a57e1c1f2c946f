mod builder;
mod direction;
mod model;
mod validator;

pub use builder::{WorldBuilder, build_rooms};
pub use direction::{Direction, opposite_code};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Item, Room, RoomId, World};
pub use validator::{ValidationError, validate_world};
