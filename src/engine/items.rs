use std::collections::BTreeMap;

use tracing::debug;

use crate::engine::output::Output;
use crate::world::{self, RoomId};

/// `take <name>`: move a named item from the current room into the inventory.
pub fn handle_take(
    out: &mut Output,
    world: &mut world::World,
    current_room: RoomId,
    inventory: &mut BTreeMap<String, world::Item>,
    target_name: Option<&str>,
) {
    let name = match target_name {
        Some(n) if !n.is_empty() => n,
        _ => {
            out.event("Take what?");
            return;
        }
    };

    if inventory.contains_key(name) {
        out.event(format!("You already have the {name}"));
        return;
    }

    let Some(item) = world
        .room_mut(current_room)
        .and_then(|room| room.items.remove(name))
    else {
        out.event(format!("You can't take the {name}"));
        return;
    };

    debug!(item = %item.name, room = %current_room, "took item");
    out.event(format!("You take the {}", item.name));
    inventory.insert(item.name.clone(), item);
}
