use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Board dimensions and mine count for one game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const EASY: Self = Self::new_unchecked(10, 10, 10);
    pub const INTERMEDIATE: Self = Self::new_unchecked(20, 20, 40);
    pub const ADVANCED: Self = Self::new_unchecked(30, 30, 99);

    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines);
        config.validate()?;
        Ok(config)
    }

    /// Rejects configs that would make mine placement loop forever.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::EmptyBoard);
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::TooManyMines {
                mines: self.mines,
                cells: self.total_cells(),
            });
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

/// Where the mines are: a boolean mask over the grid plus the placement order.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_coords: Vec<Coord2>,
}

impl MineLayout {
    pub(crate) fn from_parts(mine_mask: Array2<bool>, mine_coords: Vec<Coord2>) -> Self {
        Self {
            mine_mask,
            mine_coords,
        }
    }

    /// Builds a layout from explicit mine positions; duplicates collapse to one mine.
    pub fn from_mine_coords(size: Coord2, coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        let mut mine_coords = Vec::with_capacity(coords.len());

        for &pos in coords {
            if pos.0 >= size.0 || pos.1 >= size.1 {
                return Err(GameError::MineOutOfBounds);
            }
            if !mine_mask[pos.to_nd_index()] {
                mine_mask[pos.to_nd_index()] = true;
                mine_coords.push(pos);
            }
        }

        Ok(Self::from_parts(mine_mask, mine_coords))
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mine_mask.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_coords.len().try_into().unwrap()
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask[coords.to_nd_index()]
    }

    pub fn mine_coords(&self) -> &[Coord2] {
        &self.mine_coords
    }
}

/// Outcome of a reveal action.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Revealed => true,
        }
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_by_one_board_with_a_mine_is_rejected() {
        assert_eq!(
            GameConfig::new(1, 1, 1),
            Err(GameError::TooManyMines { mines: 1, cells: 1 })
        );
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(GameConfig::new(0, 5, 0), Err(GameError::EmptyBoard));
        assert_eq!(GameConfig::new(5, 0, 0), Err(GameError::EmptyBoard));
    }

    #[test]
    fn mine_count_must_leave_a_safe_cell() {
        assert!(GameConfig::new(3, 3, 9).is_err());
        assert!(GameConfig::new(3, 3, 8).is_ok());
        assert!(GameConfig::new(3, 3, 0).is_ok());
    }

    #[test]
    fn presets_are_valid() {
        for config in [
            GameConfig::EASY,
            GameConfig::INTERMEDIATE,
            GameConfig::ADVANCED,
        ] {
            assert!(config.validate().is_ok());
        }
        assert_eq!(GameConfig::ADVANCED.total_cells(), 900);
    }

    #[test]
    fn layout_rejects_out_of_bounds_mines() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::MineOutOfBounds)
        );
    }

    #[test]
    fn layout_collapses_duplicate_mines() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(0, 0), (0, 0), (1, 1)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert!(layout.contains_mine((0, 0)));
        assert!(layout.contains_mine((1, 1)));
        assert!(!layout.contains_mine((0, 1)));
    }
}
