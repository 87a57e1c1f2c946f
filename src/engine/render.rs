use std::collections::BTreeMap;

use crate::engine::output::Output;
use crate::world::{self, Direction, RoomId};

pub fn render_room(
    out: &mut Output,
    world: &world::World,
    room_id: RoomId,
    inventory: &BTreeMap<String, world::Item>,
) {
    let Some(room) = world.room(room_id) else {
        out.event(format!("You are nowhere ({room_id})."));
        return;
    };

    out.say(room.long_desc.clone());

    for dir in Direction::ALL {
        let Some(target) = room.exits.get(&dir).and_then(|id| world.room(*id)) else {
            continue;
        };
        out.hint(exit_hint(dir, &target.short_desc));
    }

    // Carried items are hidden even if the room still lists them.
    let visible: Vec<&world::Item> = room
        .items
        .values()
        .filter(|item| !inventory.contains_key(&item.name))
        .collect();

    if !visible.is_empty() {
        out.say("You see the following items before you:");
        for item in visible {
            out.say(format!("  {}", item.name));
        }
    }
}

fn exit_hint(dir: Direction, target: &str) -> String {
    if dir.is_cardinal() {
        return format!("To the {} you see {target}", dir.name());
    }
    let side = if dir == Direction::Up { "Above" } else { "Below" };
    format!("{side} you, you see {target}")
}
