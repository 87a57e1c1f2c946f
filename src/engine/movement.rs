use std::collections::BTreeMap;

use tracing::debug;

use crate::engine::output::Output;
use crate::engine::render::render_room;
use crate::world::{self, Direction, RoomId};

/// Follow the exit in `dir`. Returns whether the player changed rooms.
pub fn try_handle_movement(
    out: &mut Output,
    world: &mut world::World,
    current_room: &mut RoomId,
    inventory: &BTreeMap<String, world::Item>,
    dir: Direction,
) -> bool {
    let Some(next) = world.exit(*current_room, dir) else {
        debug!(from = %current_room, %dir, "no exit");
        out.event("You can't go that way");
        return false;
    };

    debug!(from = %current_room, to = %next, %dir, "moved");
    *current_room = next;
    if let Some(room) = world.room_mut(next) {
        room.visits += 1;
    }

    render_room(out, world, next, inventory);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_down_and_back_up() {
        let mut world = world::build_rooms().unwrap();
        let field = world.start();
        let mut here = field;
        let inventory = BTreeMap::new();

        let mut out = Output::new();
        assert!(try_handle_movement(&mut out, &mut world, &mut here, &inventory, Direction::Down));
        assert_ne!(here, field);
        assert!(out.contains("Graffiti lines the wall around the manhole ladder."));
        assert!(out.contains("Above you, you see large field"));
        assert_eq!(world.room(here).unwrap().visits, 1);

        let mut out = Output::new();
        assert!(try_handle_movement(&mut out, &mut world, &mut here, &inventory, Direction::Up));
        assert_eq!(here, field);
        assert!(out.contains("You are standing in a large field."));
    }

    #[test]
    fn missing_exit_leaves_room_unchanged() {
        let mut world = world::build_rooms().unwrap();
        let field = world.start();
        let mut here = field;

        let mut out = Output::new();
        let moved =
            try_handle_movement(&mut out, &mut world, &mut here, &BTreeMap::new(), Direction::North);

        assert!(!moved);
        assert_eq!(here, field);
        assert_eq!(out.lines().collect::<Vec<_>>(), vec!["You can't go that way"]);
        assert_eq!(world.room(field).unwrap().visits, 0);
    }
}
