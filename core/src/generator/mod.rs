use crate::*;
pub use random::*;

mod random;

/// Strategy for choosing mine positions for an already-validated config.
pub trait LayoutGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}
