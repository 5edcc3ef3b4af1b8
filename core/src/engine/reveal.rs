use alloc::collections::{BTreeSet, VecDeque};

use crate::*;

impl Game {
    /// Reveals a hidden cell, flooding outward from zero-count cells.
    ///
    /// Flagged and already revealed cells are left untouched.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.check_move(coords)?;

        if !matches!(self.visibility[coords], Visibility::Hidden) {
            return Ok(RevealOutcome::NoChange);
        }

        let outcome = self.reveal_cell(coords);
        Ok(self.settle(outcome))
    }

    /// Reveals a single hidden cell without re-evaluating the status.
    pub(super) fn reveal_cell(&mut self, coords: Coord2) -> RevealOutcome {
        if !matches!(self.visibility[coords], Visibility::Hidden) {
            return RevealOutcome::NoChange;
        }
        self.visibility[coords] = Visibility::Revealed;

        match self.layout[coords] {
            CellContent::Mine => {
                log::debug!("Revealed mine at {:?}", coords);
                self.triggered_mine.get_or_insert(coords);
                RevealOutcome::HitMine
            }
            CellContent::AdjacentCount(count) => {
                self.revealed_count += 1;
                log::debug!("Revealed cell at {:?}, mine count: {}", coords, count);
                if count == 0 {
                    self.flood_fill(coords);
                }
                RevealOutcome::Revealed
            }
        }
    }

    /// Opens the zero-count region around an already revealed zero cell, plus its
    /// numbered border. Each cell is visited at most once.
    fn flood_fill(&mut self, origin: Coord2) {
        let mut visited = BTreeSet::from([origin]);
        let mut to_visit: VecDeque<_> = self
            .layout
            .iter_neighbors(origin)
            .filter(|&pos| matches!(self.visibility[pos], Visibility::Hidden))
            .collect();
        log::trace!(
            "Starting flood-fill from {:?}, initial neighbors: {:?}",
            origin,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop_front() {
            if !visited.insert(visit_coords) {
                continue;
            }

            // flags stay in place, revealed cells were already counted
            if !matches!(self.visibility[visit_coords], Visibility::Hidden) {
                log::trace!("Skipping cell at {:?}", visit_coords);
                continue;
            }

            // neighbours of a zero cell are never mines
            let CellContent::AdjacentCount(count) = self.layout[visit_coords] else {
                continue;
            };
            self.visibility[visit_coords] = Visibility::Revealed;
            self.revealed_count += 1;
            log::trace!("Flood revealed cell at {:?}, mine count: {}", visit_coords, count);

            if count == 0 {
                to_visit.extend(
                    self.layout
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| matches!(self.visibility[pos], Visibility::Hidden))
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }
}
