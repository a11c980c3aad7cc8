use alloc::collections::BTreeSet;
use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Fixed `rows × cols` grid of cells together with the positions of its mines.
///
/// Mine placement and adjacency counts are settled at construction; afterwards only the revealed and flagged
/// bits of each cell change.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<Cell>,
    mines: BTreeSet<Coord2>,
}

impl Board {
    /// Builds a board with mines at exactly the given positions.
    ///
    /// Fails on the first position that is off the board or repeats an earlier one.
    pub fn with_mines(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        check_size(size)?;

        let mut mines = BTreeSet::new();
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 || !mines.insert(coords) {
                return Err(GameError::InvalidMinePlacement(coords.0, coords.1));
            }
        }

        Ok(Self::from_mine_set(size, mines))
    }

    /// Builds a board from an already validated set of mine positions.
    pub(crate) fn from_mine_set(size: Coord2, mines: BTreeSet<Coord2>) -> Self {
        let mut cells: Array2<Cell> = Array2::default(size.to_nd_index());
        for &coords in &mines {
            cells[coords.to_nd_index()].is_mine = true;
        }

        let (rows, cols) = size;
        for row in 0..rows {
            for col in 0..cols {
                let count = NeighborIter::new((row, col), size)
                    .filter(|pos| mines.contains(pos))
                    .count();
                // at most 8 neighbors
                cells[(row, col).to_nd_index()].adjacent_mine_count = count as u8;
            }
        }

        log::debug!("Board {:?} built with {} mines", size, mines.len());
        Self { cells, mines }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // dimensions always come from a Coord2
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds(coords.0.into(), coords.1.into()))
        }
    }

    /// Checks a signed position against this board, see [`locate`].
    pub fn locate(&self, row: i64, col: i64) -> Result<Coord2> {
        locate(self.size(), row, col)
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    /// The up-to-8 cells sharing an edge or corner with `coords`.
    pub fn neighbors_of(&self, coords: Coord2) -> Result<BTreeSet<Coord2>> {
        let coords = self.validate_coords(coords)?;
        Ok(self.iter_neighbors(coords).collect())
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn revealed_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_revealed).count() as CellCount
    }

    pub fn flagged_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_flagged).count() as CellCount
    }

    pub fn flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.set_flag(coords, true)
    }

    pub fn unflag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.set_flag(coords, false)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let flagged = self.cell_at(coords)?.is_flagged;
        self.set_flag(coords, !flagged)
    }

    fn set_flag(&mut self, coords: Coord2, flagged: bool) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        let cell = self.cell_mut(coords);

        if cell.is_revealed {
            return Err(GameError::AlreadyRevealed);
        }
        if cell.is_flagged == flagged {
            return Ok(MarkOutcome::NoChange);
        }

        cell.is_flagged = flagged;
        log::debug!("Flag at {:?} set to {}", coords, flagged);
        Ok(MarkOutcome::Changed)
    }

    /// Snapshot of every cell for rendering, mines stay masked unless `show_mines` is set.
    pub fn snapshot(&self, show_mines: bool) -> Array2<CellView> {
        self.cells.map(|&cell| cell.view(show_mines))
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

pub(crate) fn check_size(size: Coord2) -> Result<()> {
    if size.0 == 0 || size.1 == 0 {
        Err(GameError::InvalidSize)
    } else {
        Ok(())
    }
}
