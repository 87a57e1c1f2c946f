use crate::world::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Look,
    Move(Direction),
    Take,
    /// Recognised word with no behaviour yet; still costs a move.
    Unimplemented,
}

const VERBS: &[(&str, Verb)] = &[
    ("look", Verb::Look),
    ("examine", Verb::Unimplemented),
    ("n", Verb::Move(Direction::North)),
    ("e", Verb::Move(Direction::East)),
    ("s", Verb::Move(Direction::South)),
    ("w", Verb::Move(Direction::West)),
    ("u", Verb::Move(Direction::Up)),
    ("d", Verb::Move(Direction::Down)),
    ("jump", Verb::Unimplemented),
    ("run", Verb::Unimplemented),
    ("take", Verb::Take),
];

/// Case-sensitive lookup of a command's first token.
pub fn lookup_verb(token: &str) -> Option<Verb> {
    VERBS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, verb)| *verb)
}
