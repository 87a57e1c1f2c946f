pub mod config;
pub mod engine;
pub mod error;
pub mod world;

use std::collections::BTreeMap;

use tracing::debug;

use engine::{Output, Verb, handle_take, lookup_verb, render_room, try_handle_movement};
use world::{Item, RoomId, World};

pub use config::{Config, load_config_from_file, load_config_from_str};
pub use error::{ConfigError, WorldError};
pub use world::build_rooms;

/// One player's session: the world it owns plus where the player stands.
pub struct Game {
    pub world: World,
    pub current_room: RoomId,
    pub inventory: BTreeMap<String, Item>,
    pub moves: u64,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        prompt: String,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        game: Game,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game over the stock world. Call `init()` to get the initial render.
        #[wasm_bindgen(constructor)]
        pub fn new() -> Result<WasmGame, JsValue> {
            let world = build_rooms().map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                game: Game::new(world),
            })
        }

        /// Return the initial render output.
        #[wasm_bindgen]
        pub fn init(&self) -> JsValue {
            let out = self.game.initialize();
            self.result(out)
        }

        /// Process a player command and return the resulting output blocks and next prompt.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let out = self.game.step(input);
            self.result(out)
        }

        #[wasm_bindgen]
        pub fn prompt(&self) -> String {
            self.game.prompt()
        }
    }

    impl WasmGame {
        fn result(&self, out: Output) -> JsValue {
            to_value(&WasmStepResult {
                blocks: out.blocks,
                prompt: self.game.prompt(),
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}

impl Game {
    /// Place the player in the start room; that first placement counts as a visit.
    pub fn new(mut world: World) -> Self {
        let current_room = world.start();
        if let Some(room) = world.room_mut(current_room) {
            room.visits += 1;
        }
        Game {
            world,
            current_room,
            inventory: BTreeMap::new(),
            moves: 0,
        }
    }

    /// Describe where the player stands. Safe to call more than once.
    pub fn initialize(&self) -> Output {
        let mut out = Output::new();
        render_room(&mut out, &self.world, self.current_room, &self.inventory);
        out
    }

    pub fn prompt(&self) -> String {
        format!("{}> ", self.moves)
    }

    /// Process a single line of player input.
    pub fn step(&mut self, input: &str) -> Output {
        let mut out = Output::new();
        let line = input.trim_end_matches(['\r', '\n']);
        let mut tokens = line.split(' ');
        let first = tokens.next().unwrap_or_default();

        let Some(verb) = lookup_verb(first) else {
            debug!(input = line, "unrecognised command");
            out.event("Hm?");
            return out;
        };

        debug!(?verb, moves = self.moves, "dispatch");
        match verb {
            Verb::Look => {
                render_room(&mut out, &self.world, self.current_room, &self.inventory);
            }
            Verb::Move(dir) => {
                try_handle_movement(
                    &mut out,
                    &mut self.world,
                    &mut self.current_room,
                    &self.inventory,
                    dir,
                );
            }
            Verb::Take => {
                handle_take(
                    &mut out,
                    &mut self.world,
                    self.current_room,
                    &mut self.inventory,
                    tokens.next(),
                );
            }
            Verb::Unimplemented => out.event("Nothing happens"),
        }

        self.moves = self.moves.saturating_add(1);
        out
    }

    pub fn current_room(&self) -> Option<&world::Room> {
        self.world.room(self.current_room)
    }
}
