use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a renderer needs to draw a game, without hidden mine positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub mine_count: CellCount,
    pub mines_left: i32,
    pub status: GameStatus,
    pub cells: Grid<CellView>,
}

impl BoardView {
    pub fn from_game(game: &Game) -> Self {
        Self {
            size: game.size(),
            mine_count: game.total_mines(),
            mines_left: game.mines_left(),
            status: game.status(),
            cells: game.cell_views(),
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords).copied()
    }
}
