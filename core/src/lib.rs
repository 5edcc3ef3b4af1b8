//! Headless Minesweeper board engine.
//!
//! A [`MineLayout`] is generated once per game, then a [`Game`] tracks what the player
//! has revealed or flagged on top of it. Presentation layers drive the game with cell
//! coordinates and read back [`CellView`]s, which never expose unrevealed content.
//!
//! ```
//! use mineboard_core::*;
//!
//! let layout = MineLayout::from_mine_coords((3, 3), &[(1, 1)])?;
//! let mut game = Game::new(layout);
//!
//! assert_eq!(game.reveal((0, 0))?, RevealOutcome::Revealed);
//! assert_eq!(game.view_at((0, 0))?, CellView::Revealed(CellContent::AdjacentCount(1)));
//! assert_eq!(game.view_at((1, 1))?, CellView::Hidden);
//! # Ok::<(), GameError>(())
//! ```
#![no_std]

extern crate alloc;

use core::ops::BitOr;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use evaluator::*;
pub use generator::*;
pub use grid::*;
pub use layout::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod config;
mod engine;
mod error;
mod evaluator;
mod generator;
mod grid;
mod layout;
mod tile;
mod types;
mod view;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Merges outcomes of multi-cell reveals, a hit mine dominates.
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}
