use alloc::string::String;
use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {mines} mines do not fit a {width}x{height} board")]
    InvalidConfiguration {
        width: Coord,
        height: Coord,
        mines: CellCount,
    },
    #[error("Coordinates {coords:?} are outside the {size:?} board")]
    OutOfBounds { coords: Coord2, size: Coord2 },
    #[error("Game already ended, no new moves are accepted")]
    GameOver,
    #[error("Malformed configuration: {0}")]
    MalformedConfig(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
