mod items;
mod movement;
mod output;
mod render;
mod verbs;

pub use items::handle_take;
pub use movement::try_handle_movement;
pub use output::{Output, OutputBlock};
pub use render::render_room;
pub use verbs::{Verb, lookup_verb};
