use std::collections::BTreeMap;
use std::fmt;

use super::direction::Direction;
use crate::error::WorldError;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Index of a room inside its `World`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(pub(crate) usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub desc: String,
}

impl Item {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Item {
            name: name.into(),
            desc: desc.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    pub short_desc: String,
    pub long_desc: String,
    pub exits: BTreeMap<Direction, RoomId>,
    pub items: BTreeMap<String, Item>, // keyed by item name
    pub visits: u32,
}

impl Room {
    pub fn new(short_desc: impl Into<String>, long_desc: impl Into<String>) -> Self {
        Room {
            short_desc: short_desc.into(),
            long_desc: long_desc.into(),
            exits: BTreeMap::new(),
            items: BTreeMap::new(),
            visits: 0,
        }
    }
}

/// The room graph. Rooms refer to each other by `RoomId`, so cycles need no
/// shared ownership.
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) rooms: Vec<Room>,
    pub(crate) start: RoomId,
}

impl World {
    pub fn start(&self) -> RoomId {
        self.start
    }

    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    pub fn exit(&self, from: RoomId, dir: Direction) -> Option<RoomId> {
        self.room(from)?.exits.get(&dir).copied()
    }

    /// Link `a` to `b` through `dir_code`, and `b` back to `a` through the
    /// opposite direction.
    pub fn link_rooms(&mut self, a: RoomId, b: RoomId, dir_code: &str) -> Result<(), WorldError> {
        link_code_in(&mut self.rooms, a, b, dir_code)
    }

    pub fn link(&mut self, a: RoomId, b: RoomId, dir: Direction) -> Result<(), WorldError> {
        link_in(&mut self.rooms, a, b, dir)
    }
}

/// Parse `dir_code` and link `a` and `b` inside a room arena.
pub(crate) fn link_code_in(
    rooms: &mut [Room],
    a: RoomId,
    b: RoomId,
    dir_code: &str,
) -> Result<(), WorldError> {
    let dir = Direction::from_code(dir_code)
        .ok_or_else(|| WorldError::UnknownDirection(dir_code.to_string()))?;
    link_in(rooms, a, b, dir)
}

/// Link `a` to `b` through `dir` and `b` back to `a`, inside a room arena.
pub(crate) fn link_in(
    rooms: &mut [Room],
    a: RoomId,
    b: RoomId,
    dir: Direction,
) -> Result<(), WorldError> {
    for id in [a, b] {
        if rooms.get(id.0).is_none() {
            return Err(WorldError::UnknownRoom(id));
        }
    }

    // Overwriting an exit orphans the old neighbour's return edge.
    if let Some(old) = rooms[a.0].exits.insert(dir, b) {
        if old != b {
            unlink_back(rooms, old, dir.opposite(), a);
        }
    }
    if let Some(old) = rooms[b.0].exits.insert(dir.opposite(), a) {
        if old != a {
            unlink_back(rooms, old, dir, b);
        }
    }
    Ok(())
}

fn unlink_back(rooms: &mut [Room], room: RoomId, dir: Direction, target: RoomId) {
    if let Some(r) = rooms.get_mut(room.0) {
        if r.exits.get(&dir) == Some(&target) {
            r.exits.remove(&dir);
        }
    }
}
