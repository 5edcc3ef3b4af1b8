use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Derives the status of a game from what has been revealed so far.
///
/// A revealed mine loses regardless of how many safe cells are open.
pub fn evaluate(game: &Game) -> GameStatus {
    if game.triggered_mine().is_some() {
        GameStatus::Lost
    } else if game.revealed_count() == game.layout().safe_cell_count() {
        GameStatus::Won
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: Coord2, mines: &[Coord2]) -> Game {
        Game::new(MineLayout::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn fresh_game_is_in_progress() {
        assert_eq!(evaluate(&game((3, 3), &[(1, 1)])), GameStatus::InProgress);
    }

    #[test]
    fn revealing_every_safe_cell_wins() {
        let mut game = game((2, 1), &[(0, 0)]);
        game.reveal((1, 0)).unwrap();
        assert_eq!(evaluate(&game), GameStatus::Won);
    }

    #[test]
    fn revealed_mine_loses() {
        let mut game = game((3, 3), &[(1, 1)]);
        game.reveal((1, 1)).unwrap();
        assert_eq!(evaluate(&game), GameStatus::Lost);
        assert!(evaluate(&game).is_finished());
    }
}
