use serde::{Deserialize, Serialize};

/// One grid position as owned by the [`Board`](crate::Board).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Mines among the up-to-8 neighbors, fixed once the board is built.
    pub adjacent_mine_count: u8,
}

impl Cell {
    pub const fn is_hidden(self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    /// What a front-end may draw for this cell.
    ///
    /// With `show_mines` unset, a mine is indistinguishable from any other hidden cell until it is revealed.
    pub const fn view(self, show_mines: bool) -> CellView {
        use CellView::*;

        match (self.is_mine, self.is_revealed, self.is_flagged) {
            (true, true, _) => Exploded,
            (false, true, _) => Revealed(self.adjacent_mine_count),
            (false, false, true) if show_mines => WrongFlag,
            (_, false, true) => Flagged,
            (true, false, false) if show_mines => Mine,
            (_, false, false) => Hidden,
        }
    }
}

/// Player-visible state of a cell, used for rendering snapshots.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
    /// Unrevealed mine, only shown once the game is lost or in a debug view
    Mine,
    /// The mine that was revealed
    Exploded,
    /// Flag placed on a safe cell, only shown once the game is lost or in a debug view
    WrongFlag,
}

impl CellView {
    // whether the cell is visually closed
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged | Self::Mine | Self::WrongFlag)
    }
}
