use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Ongoing -> Won
/// - Ongoing -> Lost
///
/// Both `Won` and `Lost` are final. The state is never stored, it is read off the board each time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Ongoing,
    Won,
    Lost,
}

impl GameState {
    /// Classifies `board`: lost once any mine is revealed, won once every safe cell is revealed.
    pub fn of(board: &Board) -> Self {
        let mut hidden_safe = false;
        for (_, cell) in board.iter_cells() {
            match (cell.is_mine, cell.is_revealed) {
                (true, true) => return Self::Lost,
                (false, false) => hidden_safe = true,
                _ => {}
            }
        }

        if hidden_safe { Self::Ongoing } else { Self::Won }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: Coord2, mines: &[Coord2], revealed: &[Coord2]) -> Board {
        let mut board = Board::with_mines(size, mines).unwrap();
        for &coords in revealed {
            board.cell_mut(coords).is_revealed = true;
        }
        board
    }

    #[test]
    fn revealed_mine_is_lost() {
        let board = board_with((2, 2), &[(1, 0)], &[(0, 1), (1, 0)]);
        assert_eq!(GameState::of(&board), GameState::Lost);
    }

    #[test]
    fn lost_wins_over_won() {
        let board = board_with((2, 2), &[(1, 1)], &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(GameState::of(&board), GameState::Lost);
    }

    #[test]
    fn all_safe_revealed_is_won() {
        let board = board_with((2, 2), &[(0, 0)], &[(0, 1), (1, 0), (1, 1)]);
        assert_eq!(GameState::of(&board), GameState::Won);
    }

    #[test]
    fn won_ignores_flags() {
        let mut board = board_with((2, 1), &[(0, 0)], &[(1, 0)]);
        assert_eq!(GameState::of(&board), GameState::Won);
        board.flag((0, 0)).unwrap();
        assert_eq!(GameState::of(&board), GameState::Won);
    }

    #[test]
    fn hidden_safe_cell_is_ongoing() {
        let board = board_with((2, 2), &[(1, 0)], &[(0, 0), (1, 1)]);
        assert_eq!(GameState::of(&board), GameState::Ongoing);
        assert!(!GameState::Ongoing.is_finished());
    }
}
