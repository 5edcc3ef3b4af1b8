use alloc::format;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::*;

/// Fixed-size 2D storage addressed by `(x, y)` cell coordinates.
///
/// The first array axis is the column, so `dim()` is `(width, height)`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid<T> {
    cells: Array2<T>,
}

impl<T> Grid<T> {
    pub fn from_elem(size: Coord2, elem: T) -> Self
    where
        T: Clone,
    {
        Self {
            cells: Array2::from_elem(size.to_nd_index(), elem),
        }
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.cells.dim();
        // dimensions always come from a `Coord2`
        (x as Coord, y as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (x, y) = self.size();
        mult(x, y)
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        let (width, height) = self.size();
        x < width && y < height
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds {
                coords,
                size: self.size(),
            })
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<&T> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn get_mut(&mut self, coords: Coord2) -> Option<&mut T> {
        self.cells.get_mut(coords.to_nd_index())
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// All coordinates in column-major order, matching the storage layout.
    pub fn positions(&self) -> impl Iterator<Item = Coord2> + use<T> {
        let (width, height) = self.size();
        (0..width).flat_map(move |x| (0..height).map(move |y| (x, y)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn indexed_iter(&self) -> impl Iterator<Item = (Coord2, &T)> {
        self.cells
            .indexed_iter()
            .map(|((x, y), cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.map(f),
        }
    }
}

impl<T: Default> Grid<T> {
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }
}

/// Rejects arrays whose axes do not fit a `Coord`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Grid<T> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawGrid<U> {
            cells: Array2<U>,
        }

        let RawGrid { cells } = RawGrid::deserialize(deserializer)?;
        let (x, y) = cells.dim();
        if x > usize::from(Coord::MAX) || y > usize::from(Coord::MAX) {
            return Err(D::Error::custom(format!(
                "grid of {x}x{y} cells exceeds {0}x{0}",
                Coord::MAX
            )));
        }
        Ok(Self { cells })
    }
}

impl<T> Index<Coord2> for Grid<T> {
    type Output = T;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl<T> IndexMut<Coord2> for Grid<T> {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
