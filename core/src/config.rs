use alloc::string::ToString;
use serde::{Deserialize, Serialize};

use crate::*;

/// Board dimensions and mine count for one game.
///
/// Deserialising fills missing fields from [`GameConfig::default`], which is the
/// 30x16 board with 99 mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const DEFAULT_WIDTH: Coord = 30;
    pub const DEFAULT_HEIGHT: Coord = 16;
    pub const DEFAULT_MINES: CellCount = 99;

    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// Builds a config, rejecting mine counts that leave no safe cell.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(width, height, mines).validate()
    }

    /// Parses a JSON document such as `{"width": 9, "height": 9, "mines": 10}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| GameError::MalformedConfig(err.to_string()))?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self> {
        if self.mines < self.total_cells() {
            Ok(self)
        } else {
            Err(GameError::InvalidConfiguration {
                width: self.width,
                height: self.height,
                mines: self.mines,
            })
        }
    }

    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_HEIGHT,
            Self::DEFAULT_MINES,
        )
    }
}
