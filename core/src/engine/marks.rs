use core::ops::BitOr;

use crate::*;

impl Game {
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;
        use Visibility::*;

        let coords = self.check_move(coords)?;

        Ok(match self.visibility[coords] {
            Hidden => {
                self.visibility[coords] = Flagged;
                self.flagged_count += 1;
                Changed
            }
            Flagged => {
                self.visibility[coords] = Hidden;
                self.flagged_count -= 1;
                Changed
            }
            Revealed => NoChange,
        })
    }

    /// Whether chording at `coords` would reveal anything: a revealed numbered cell
    /// with exactly as many flagged neighbours as its count.
    pub fn can_chord_at(&self, coords: Coord2) -> bool {
        if self.status.is_finished() || self.layout.validate_coords(coords).is_err() {
            return false;
        }

        match (self.visibility[coords], self.layout[coords]) {
            (Visibility::Revealed, CellContent::AdjacentCount(count)) if count > 0 => {
                count == self.count_flagged_neighbors(coords)
            }
            _ => false,
        }
    }

    /// Reveals every unflagged neighbour of a satisfied numbered cell.
    ///
    /// Misplaced flags are trusted; a wrong flag with the right count reveals a mine.
    pub fn chord(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.check_move(coords)?;

        if !self.can_chord_at(coords) {
            return Ok(RevealOutcome::NoChange);
        }

        log::debug!("Chording at {:?}", coords);
        let outcome = self
            .layout
            .iter_neighbors(coords)
            .map(|neighbor_coords| self.reveal_cell(neighbor_coords))
            .fold(RevealOutcome::NoChange, BitOr::bitor);
        Ok(self.settle(outcome))
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        self.layout
            .iter_neighbors(coords)
            .filter(|&pos| matches!(self.visibility[pos], Visibility::Flagged))
            .count() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::game;
    use crate::*;

    #[test]
    fn toggle_flag_twice_restores_hidden() {
        let mut game = game((3, 3), &[(1, 1)]);
        let before = game.clone();

        assert_eq!(game.toggle_flag((2, 0)), Ok(MarkOutcome::Changed));
        assert_eq!(game.visibility_at((2, 0)), Ok(Visibility::Flagged));
        assert_eq!(game.flagged_count(), 1);
        assert_eq!(game.mines_left(), 0);

        assert_eq!(game.toggle_flag((2, 0)), Ok(MarkOutcome::Changed));
        assert_eq!(game, before);
    }

    #[test]
    fn flag_on_revealed_cell_is_noop() {
        let mut game = game((3, 3), &[(1, 1)]);
        game.reveal((0, 0)).unwrap();

        assert_eq!(game.toggle_flag((0, 0)), Ok(MarkOutcome::NoChange));
        assert_eq!(game.flagged_count(), 0);
    }

    #[test]
    fn over_flagging_goes_negative() {
        let mut game = game((3, 3), &[(1, 1)]);
        game.toggle_flag((0, 0)).unwrap();
        game.toggle_flag((0, 1)).unwrap();
        assert_eq!(game.mines_left(), -1);
    }

    #[test]
    fn flag_is_bounds_and_state_checked() {
        let mut game = game((3, 3), &[(1, 1)]);
        assert!(matches!(
            game.toggle_flag((0, 3)),
            Err(GameError::OutOfBounds { .. })
        ));

        game.reveal((1, 1)).unwrap();
        assert_eq!(game.toggle_flag((0, 0)), Err(GameError::GameOver));
    }

    #[test]
    fn chord_reveal_uses_flagged_neighbors() {
        let mut game = game((3, 3), &[(0, 1), (2, 1)]);

        game.reveal((1, 1)).unwrap();
        game.toggle_flag((0, 1)).unwrap();
        game.toggle_flag((2, 1)).unwrap();
        assert!(game.can_chord_at((1, 1)));

        let outcome = game.chord((1, 1)).unwrap();

        assert_eq!(outcome, RevealOutcome::Won);
        assert_eq!(
            game.view_at((1, 0)),
            Ok(CellView::Revealed(CellContent::AdjacentCount(2)))
        );
        assert_eq!(
            game.view_at((1, 2)),
            Ok(CellView::Revealed(CellContent::AdjacentCount(2)))
        );
        assert_eq!(game.visibility_at((0, 1)), Ok(Visibility::Flagged));
    }

    #[test]
    fn chord_with_wrong_flag_count_changes_nothing() {
        let mut game = game((3, 3), &[(0, 1), (2, 1)]);
        game.reveal((1, 1)).unwrap();
        game.toggle_flag((0, 1)).unwrap();
        let before = game.clone();

        assert!(!game.can_chord_at((1, 1)));
        assert_eq!(game.chord((1, 1)), Ok(RevealOutcome::NoChange));
        assert_eq!(game, before);

        game.toggle_flag((2, 1)).unwrap();
        game.toggle_flag((0, 0)).unwrap();
        let before = game.clone();
        assert_eq!(game.chord((1, 1)), Ok(RevealOutcome::NoChange));
        assert_eq!(game, before);
    }

    #[test]
    fn chord_with_misplaced_flag_hits_mine() {
        let mut game = game((3, 3), &[(0, 0)]);
        game.reveal((1, 1)).unwrap();
        game.toggle_flag((2, 2)).unwrap();

        assert_eq!(game.chord((1, 1)), Ok(RevealOutcome::HitMine));
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.triggered_mine(), Some((0, 0)));
        // the rest of the neighbourhood was still opened
        assert_eq!(game.visibility_at((2, 0)), Ok(Visibility::Revealed));
        assert_eq!(game.visibility_at((2, 2)), Ok(Visibility::Flagged));
    }

    #[test]
    fn chord_floods_zero_neighbors() {
        // only mine in the corner, so (1, 1) shows 1 and (2, 2) onwards is empty
        let mut game = game((5, 5), &[(0, 0)]);
        game.reveal((1, 1)).unwrap();
        game.toggle_flag((0, 0)).unwrap();

        assert_eq!(game.chord((1, 1)), Ok(RevealOutcome::Won));
        assert_eq!(game.revealed_count(), 24);
    }

    #[test]
    fn chord_on_hidden_or_zero_cell_is_noop() {
        let mut game = game((3, 3), &[(1, 1)]);
        assert_eq!(game.chord((0, 0)), Ok(RevealOutcome::NoChange));
        assert_eq!(game.visibility_at((0, 0)), Ok(Visibility::Hidden));

        let mut empty = game_without_mines();
        empty.toggle_flag((2, 2)).unwrap();
        empty.reveal((0, 0)).unwrap();
        assert!(!empty.can_chord_at((0, 0)));
        assert_eq!(empty.chord((0, 0)), Ok(RevealOutcome::NoChange));
    }

    #[test]
    fn chord_rejects_out_of_bounds() {
        let mut game = game((3, 3), &[(1, 1)]);
        assert!(!game.can_chord_at((7, 7)));
        assert!(matches!(
            game.chord((7, 7)),
            Err(GameError::OutOfBounds { .. })
        ));
    }

    fn game_without_mines() -> Game {
        game((3, 3), &[])
    }
}
