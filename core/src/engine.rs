use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// How the mines of a new game are laid out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MinePlacement {
    Random { count: CellCount, seed: u64 },
    Explicit(Vec<Coord2>),
}

/// Starts a game on a `rows × cols` board.
pub fn new_game(rows: Coord, cols: Coord, placement: MinePlacement) -> Result<Game> {
    Game::new((rows, cols), placement)
}

/// One game session from first move to win or loss.
///
/// Moves after the game has finished are rejected with [`GameError::GameAlreadyFinished`], except revealing an
/// already revealed cell, which stays a no-op.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Game {
    board: Board,
}

impl Game {
    pub fn new(size: Coord2, placement: MinePlacement) -> Result<Self> {
        let board = match placement {
            MinePlacement::Random { count, seed } => {
                RandomMineGenerator::new(seed).generate(GameConfig::new(size, count)?)?
            }
            MinePlacement::Explicit(mines) => Board::with_mines(size, &mines)?,
        };
        Ok(Self::from_board(board))
    }

    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// How many mines have not been flagged yet, negative when there are more flags than mines
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.board.flagged_count() as isize)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.board.revealed_count()
    }

    pub fn check_game_state(&self) -> GameState {
        GameState::of(&self.board)
    }

    pub fn is_finished(&self) -> bool {
        self.check_game_state().is_finished()
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        self.board.cell_at(coords)
    }

    pub fn neighbors_of(&self, coords: Coord2) -> Result<BTreeSet<Coord2>> {
        self.board.neighbors_of(coords)
    }

    pub fn locate(&self, row: i64, col: i64) -> Result<Coord2> {
        self.board.locate(row, col)
    }

    /// Player snapshot, mines only become visible once the game is lost.
    pub fn view(&self) -> Array2<CellView> {
        let show_mines = matches!(self.check_game_state(), GameState::Lost);
        self.board.snapshot(show_mines)
    }

    /// Snapshot with every mine visible regardless of the game state.
    pub fn debug_view(&self) -> Array2<CellView> {
        self.board.snapshot(true)
    }

    pub fn flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;
        self.board.flag(coords)
    }

    pub fn unflag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;
        self.board.unflag(coords)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;
        self.board.toggle_flag(coords)
    }

    /// Reveals the cell at `coords`, cascading through connected zero-count cells.
    ///
    /// Returns every position revealed by this call. Revealed and flagged cells are left alone and yield an empty
    /// set; a flag has to be removed before the cell underneath can be revealed.
    pub fn reveal(&mut self, coords: Coord2) -> Result<BTreeSet<Coord2>> {
        let coords = self.board.validate_coords(coords)?;
        if self.board[coords].is_revealed {
            return Ok(BTreeSet::new());
        }
        self.check_not_finished()?;
        if self.board[coords].is_flagged {
            return Ok(BTreeSet::new());
        }

        let revealed = self.reveal_cascade(coords);
        let state = self.check_game_state();
        if state.is_finished() {
            log::debug!("Game ended: {:?}", state);
        }
        Ok(revealed)
    }

    fn reveal_cascade(&mut self, coords: Coord2) -> BTreeSet<Coord2> {
        let cell = self.board.cell_mut(coords);
        cell.is_revealed = true;
        let mut revealed = BTreeSet::from([coords]);

        if cell.is_mine {
            log::debug!("Revealed mine at {:?}", coords);
            return revealed;
        }
        log::debug!("Revealed cell at {:?}, mine count: {}", coords, cell.adjacent_mine_count);
        if cell.adjacent_mine_count != 0 {
            return revealed;
        }

        let mut visited = BTreeSet::from([coords]);
        let mut to_visit: VecDeque<_> = self.hidden_neighbors(coords).collect();
        log::trace!("Starting flood-fill from {:?}, initial neighbors: {:?}", coords, to_visit);

        while let Some(visit_coords) = to_visit.pop_front() {
            if !visited.insert(visit_coords) {
                continue;
            }

            let cell = self.board.cell_mut(visit_coords);
            // zero-count cells never border a mine, but flags may have been placed anywhere
            if !cell.is_hidden() || cell.is_mine {
                log::trace!("Skipping cell at {:?}", visit_coords);
                continue;
            }

            cell.is_revealed = true;
            let count = cell.adjacent_mine_count;
            revealed.insert(visit_coords);
            log::trace!("Flood revealed cell at {:?}, mine count: {}", visit_coords, count);

            if count == 0 {
                to_visit.extend(
                    self.hidden_neighbors(visit_coords)
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }

        revealed
    }

    fn hidden_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        self.board
            .iter_neighbors(coords)
            .filter(|&pos| self.board[pos].is_hidden())
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::GameAlreadyFinished)
        } else {
            Ok(())
        }
    }
}
