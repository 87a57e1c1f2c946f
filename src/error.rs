use std::io;

use thiserror::Error;

use crate::world::{RoomId, ValidationError};

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("unknown direction code '{0}'")]
    UnknownDirection(String),

    #[error("room {0} does not exist")]
    UnknownRoom(RoomId),

    #[error("world failed validation: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<&str>>()
        .join("; ")
}
