use crate::*;

mod marks;
mod reveal;

/// One game from first move to win or loss, on top of a fixed [`MineLayout`].
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    layout: MineLayout,
    visibility: Grid<Visibility>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
    seed: Option<u64>,
}

impl Game {
    pub fn new(layout: MineLayout) -> Self {
        let size = layout.size();
        Self {
            layout,
            visibility: Grid::new(size),
            revealed_count: 0,
            flagged_count: 0,
            status: Default::default(),
            triggered_mine: None,
            seed: None,
        }
    }

    /// Generates a fresh layout from `seed`; the same seed gives the same board.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        let layout = RandomMinefieldGenerator::new(seed).generate(config)?;
        log::debug!(
            "New {}x{} game with {} mines, seed {}",
            config.width,
            config.height,
            config.mines,
            seed
        );
        Ok(Self {
            seed: Some(seed),
            ..Self::new(layout)
        })
    }

    /// Starts a game seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn new_random(config: GameConfig) -> Result<Self> {
        use rand::Rng;

        Self::with_seed(config, rand::rng().random())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.layout.game_config()
    }

    pub fn size(&self) -> Coord2 {
        self.layout.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.layout.mine_count()
    }

    /// Number of safe cells revealed so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mines minus flags placed; negative once the player over-flags.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.layout.mine_count()) - i32::from(self.flagged_count)
    }

    /// The first mine revealed, which ended the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Seed the layout was generated from, if it was generated here.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn visibility_at(&self, coords: Coord2) -> Result<Visibility> {
        let coords = self.layout.validate_coords(coords)?;
        Ok(self.visibility[coords])
    }

    /// The renderer-safe view of a cell, content is only exposed once revealed.
    pub fn view_at(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.layout.validate_coords(coords)?;
        Ok(CellView::new(self.visibility[coords], self.layout[coords]))
    }

    /// Click routing: hidden cells are revealed, revealed cells are chorded.
    pub fn open(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        match self.visibility_at(coords)? {
            Visibility::Revealed => self.chord(coords),
            Visibility::Hidden | Visibility::Flagged => self.reveal(coords),
        }
    }

    /// Views of every cell, in the same shape as the board.
    pub(crate) fn cell_views(&self) -> Grid<CellView> {
        let mut views = Grid::new(self.size());
        for coords in self.visibility.positions() {
            views[coords] = CellView::new(self.visibility[coords], self.layout[coords]);
        }
        views
    }

    pub(crate) fn layout(&self) -> &MineLayout {
        &self.layout
    }

    /// Rejections shared by every mutating move, checked before anything changes.
    fn check_move(&self, coords: Coord2) -> Result<Coord2> {
        let coords = self.layout.validate_coords(coords)?;
        if self.status.is_finished() {
            return Err(GameError::GameOver);
        }
        Ok(coords)
    }

    /// Re-evaluates the status after a move and folds it into the move's outcome.
    fn settle(&mut self, outcome: RevealOutcome) -> RevealOutcome {
        self.status = evaluate(self);
        match self.status {
            GameStatus::Lost => {
                log::debug!("Game lost, mine at {:?}", self.triggered_mine);
                RevealOutcome::HitMine
            }
            GameStatus::Won => {
                log::debug!("Game won, {} cells revealed", self.revealed_count);
                RevealOutcome::Won
            }
            GameStatus::InProgress => outcome,
        }
    }
}
