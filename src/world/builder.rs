use tracing::debug;

use super::model::{Item, Room, RoomId, World, link_code_in};
use super::validator::validate_world;
use crate::error::WorldError;

/// Assembles a `World` room by room, then validates the graph once.
#[derive(Debug, Default)]
pub struct WorldBuilder {
    rooms: Vec<Room>,
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_room(&mut self, short_desc: impl Into<String>, long_desc: impl Into<String>) -> RoomId {
        self.rooms.push(Room::new(short_desc, long_desc));
        RoomId(self.rooms.len() - 1)
    }

    pub fn add_item(&mut self, room: RoomId, item: Item) -> Result<(), WorldError> {
        let room = self
            .rooms
            .get_mut(room.0)
            .ok_or(WorldError::UnknownRoom(room))?;
        room.items.insert(item.name.clone(), item);
        Ok(())
    }

    pub fn link(&mut self, a: RoomId, b: RoomId, dir_code: &str) -> Result<(), WorldError> {
        link_code_in(&mut self.rooms, a, b, dir_code)
    }

    pub fn build(self, start: RoomId) -> Result<World, WorldError> {
        let world = World {
            rooms: self.rooms,
            start,
        };

        let errors = validate_world(&world);
        if !errors.is_empty() {
            return Err(WorldError::Invalid(errors));
        }

        debug!(rooms = world.rooms.len(), start = %start, "world built");
        Ok(world)
    }
}

/// The stock two-room world: a field with a manhole beneath it.
pub fn build_rooms() -> Result<World, WorldError> {
    let mut builder = WorldBuilder::new();

    let large_field = builder.add_room(
        "large field",
        "You are standing in a large field. \nRows of tall trees \
         block your view to the north, east, and south.",
    );
    let manhole = builder.add_room(
        "a manhole with a ladder leads into darkness",
        "Graffiti lines the wall around the manhole ladder.",
    );

    builder.add_item(large_field, Item::new("hammer", "This hammer has seen better days"))?;
    builder.link(large_field, manhole, "d")?;

    builder.build(large_field)
}
