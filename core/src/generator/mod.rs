use crate::*;
pub use random::*;

mod random;

/// Strategy for laying mines onto a fresh board.
pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}
