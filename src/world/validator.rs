use super::model::World;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    // start room must exist
    if world.room(world.start).is_none() {
        errors.push(ValidationError::new(format!(
            "start room {} not found among rooms",
            world.start
        )));
    }

    // Validate exits
    for (room_id, room) in world.rooms() {
        for (dir, target) in &room.exits {
            let Some(target_room) = world.room(*target) else {
                errors.push(ValidationError::new(format!(
                    "room {} ('{}') exit {} targets missing room {}",
                    room_id, room.short_desc, dir, target
                )));
                continue;
            };

            if target_room.exits.get(&dir.opposite()) != Some(&room_id) {
                errors.push(ValidationError::new(format!(
                    "room {} ('{}') exit {} has no matching {} exit back from room {}",
                    room_id,
                    room.short_desc,
                    dir,
                    dir.opposite(),
                    target
                )));
            }
        }
    }

    errors
}
