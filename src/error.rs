use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::map::ValidationError;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("failed to read map file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed map file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("map.{0} may not be empty")]
    EmptyField(&'static str),

    #[error("room '{0}' has an empty name")]
    EmptyName(String),

    #[error("duplicate room id: {0}")]
    DuplicateRoom(String),

    #[error("invalid map layout: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type MapResult<T> = Result<T, MapError>;

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
