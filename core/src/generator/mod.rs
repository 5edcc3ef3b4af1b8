use crate::*;
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}

/// How mine coordinates are drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    /// Draw uniform coordinates, retrying on duplicates.
    #[default]
    Rejection,
    /// Draw distinct cell indices directly; bounded time even on dense boards.
    IndexSample,
}
