use serde::{Deserialize, Serialize};

/// What a cell holds. Fixed once the layout is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Mine,
    AdjacentCount(u8),
}

impl CellContent {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// The adjacent mine count, `None` for mines.
    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::AdjacentCount(count) => Some(count),
        }
    }
}

/// Player-facing state of a cell, the only thing that mutates during play.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
    Flagged,
}

impl Visibility {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

/// What a renderer is allowed to see of a cell: content only once revealed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Revealed(CellContent),
}

impl CellView {
    pub const fn new(visibility: Visibility, content: CellContent) -> Self {
        match visibility {
            Visibility::Hidden => Self::Hidden,
            Visibility::Flagged => Self::Flagged,
            Visibility::Revealed => Self::Revealed(content),
        }
    }

    pub const fn visibility(self) -> Visibility {
        match self {
            Self::Hidden => Visibility::Hidden,
            Self::Flagged => Visibility::Flagged,
            Self::Revealed(_) => Visibility::Revealed,
        }
    }
}
