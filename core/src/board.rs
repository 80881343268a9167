use std::collections::VecDeque;

use chrono::prelude::*;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    /// Game accepts moves
    InProgress,
    /// Game ended and the player won
    Won,
    /// Game ended and the player lost
    Lost,
}

impl GameState {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// The game-state engine: owns the grid, the mine layout, and the clock.
///
/// The engine never ends the game on its own when a mine is revealed; the
/// session loop checks [`Board::is_mine`] before revealing and calls
/// [`Board::record_loss`] when the check hits.
#[derive(Clone, Debug)]
pub struct Board {
    layout: MineLayout,
    grid: Array2<Cell>,
    state: GameState,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl Board {
    /// Validates the config, places mines, and computes the adjacency numbers.
    pub fn new(config: GameConfig, generator: impl LayoutGenerator) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_layout(generator.generate(config)))
    }

    /// Builds a board over an explicit mine layout.
    pub fn from_layout(layout: MineLayout) -> Self {
        let mut grid: Array2<Cell> = Array2::default(layout.size().to_nd_index());

        for &mine in layout.mine_coords() {
            grid[mine.to_nd_index()].content = CellContent::Mine;
        }
        // Each mine bumps the count of its in-bounds non-mine neighbors.
        for &mine in layout.mine_coords() {
            for pos in grid.iter_neighbors(mine) {
                if let CellContent::Clear(count) = &mut grid[pos.to_nd_index()].content {
                    *count += 1;
                }
            }
        }

        Self {
            layout,
            grid,
            state: Default::default(),
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.layout.size()
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_mines(&self) -> CellCount {
        self.layout.mine_count()
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[coords.to_nd_index()]
    }

    pub fn in_bounds(&self, coords: Coord2) -> bool {
        let (rows, cols) = self.size();
        coords.0 < rows && coords.1 < cols
    }

    /// True iff `coords` is in bounds and holds a mine. The session loop must
    /// check this before [`Board::reveal`] and report a loss on a hit.
    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.in_bounds(coords) && self.cell_at(coords).content.is_mine()
    }

    /// True iff every mine cell is flagged. Flags on safe cells and hidden
    /// safe cells do not count against the player (the classic "all safe
    /// cells revealed" rule is intentionally not applied here).
    pub fn is_game_won(&self) -> bool {
        self.layout
            .mine_coords()
            .iter()
            .all(|&mine| self.grid[mine.to_nd_index()].state == CellState::Flagged)
    }

    /// Whole seconds since construction, frozen once the game ends.
    pub fn elapsed_secs(&self) -> u32 {
        (self.ended_at.unwrap_or_else(Utc::now) - self.started_at)
            .num_seconds()
            .max(0) as u32
    }

    /// Reveals a cell, flood-filling outwards from zero-count cells.
    ///
    /// No-op when the game is finished, `coords` is out of bounds, or the
    /// cell is already revealed. A flagged cell is revealed like a hidden
    /// one. Mine content is not inspected and the game state never changes
    /// here.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.state.is_finished() || !self.in_bounds(coords) {
            return RevealOutcome::NoChange;
        }
        if self.grid[coords.to_nd_index()].state.is_revealed() {
            return RevealOutcome::NoChange;
        }

        let mut revealed = 0u32;
        let mut to_visit = VecDeque::from([coords]);
        while let Some(visit) = to_visit.pop_front() {
            let index = visit.to_nd_index();
            if self.grid[index].state.is_revealed() {
                continue;
            }

            self.grid[index].state = CellState::Revealed;
            revealed += 1;

            // Zero-count cells expand through the whole 3x3 block, center
            // included; the revealed guard above cuts the re-visit.
            if self.grid[index].content == CellContent::Clear(0) {
                to_visit.extend(self.grid.iter_block(visit));
            }
        }

        log::debug!("revealed {} cells starting at {:?}", revealed, coords);
        RevealOutcome::Revealed
    }

    /// Toggles a flag between hidden and flagged.
    ///
    /// No-op when the game is finished, `coords` is out of bounds, or the
    /// cell is revealed. Completing the mine set ends the game as won.
    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        if self.state.is_finished() || !self.in_bounds(coords) {
            return FlagOutcome::NoChange;
        }

        let index = coords.to_nd_index();
        match self.grid[index].state {
            CellState::Hidden => {
                self.grid[index].state = CellState::Flagged;
                if self.is_game_won() {
                    self.end_game(GameState::Won);
                }
                FlagOutcome::Changed
            }
            CellState::Flagged => {
                self.grid[index].state = CellState::Hidden;
                FlagOutcome::Changed
            }
            CellState::Revealed => FlagOutcome::NoChange,
        }
    }

    /// Records the loss after the session loop revealed a mine.
    pub fn record_loss(&mut self) {
        self.end_game(GameState::Lost);
    }

    fn end_game(&mut self, outcome: GameState) {
        if self.state.is_finished() {
            return;
        }

        self.state = outcome;
        self.ended_at.replace(Utc::now());
        log::debug!("game ended after {}s: {:?}", self.elapsed_secs(), outcome);
    }
}
