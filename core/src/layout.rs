use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable board content: where the mines are and every safe cell's count.
///
/// Serialises as the bare mine mask; counts are rebuilt and checked on the way in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Grid<bool>", into = "Grid<bool>")]
pub struct MineLayout {
    contents: Grid<CellContent>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Builds a layout from a mine mask, deriving the adjacent counts.
    pub fn from_mine_mask(mine_mask: &Grid<bool>) -> Result<Self> {
        let mut contents = mine_mask.map(|&is_mine| {
            if is_mine {
                CellContent::Mine
            } else {
                CellContent::AdjacentCount(0)
            }
        });

        let mut mine_count: CellCount = 0;
        for coords in mine_mask.positions() {
            if mine_mask[coords] {
                mine_count += 1;
                continue;
            }
            let adjacent = mine_mask
                .iter_neighbors(coords)
                .filter(|&pos| mine_mask[pos])
                .count() as u8;
            contents[coords] = CellContent::AdjacentCount(adjacent);
        }

        let (width, height) = mine_mask.size();
        GameConfig::new(width, height, mine_count)?;

        Ok(Self {
            contents,
            mine_count,
        })
    }

    /// Builds a layout with mines at the given coordinates; duplicates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask = Grid::from_elem(size, false);

        for &coords in mine_coords {
            mine_mask.validate_coords(coords)?;
            mine_mask[coords] = true;
        }

        Self::from_mine_mask(&mine_mask)
    }

    pub fn game_config(&self) -> GameConfig {
        let (width, height) = self.size();
        GameConfig::new_unchecked(width, height, self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.contents.validate_coords(coords)
    }

    pub fn size(&self) -> Coord2 {
        self.contents.size()
    }

    pub fn total_cells(&self) -> CellCount {
        self.contents.total_cells()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn content_at(&self, coords: Coord2) -> Result<CellContent> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.contents.get(coords).is_some_and(|content| content.is_mine())
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.contents
            .indexed_iter()
            .filter(|(_, content)| content.is_mine())
            .map(|(coords, _)| coords)
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.contents.iter_neighbors(coords)
    }
}

impl TryFrom<Grid<bool>> for MineLayout {
    type Error = GameError;

    fn try_from(mine_mask: Grid<bool>) -> Result<Self> {
        Self::from_mine_mask(&mine_mask)
    }
}

impl From<MineLayout> for Grid<bool> {
    fn from(layout: MineLayout) -> Self {
        layout.contents.map(|content| content.is_mine())
    }
}

impl Index<Coord2> for MineLayout {
    type Output = CellContent;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.contents[coords]
    }
}
