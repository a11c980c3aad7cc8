use std::fmt;

use mineclicker_core::CellView;
use ndarray::Array2;

pub const LEGEND: &str = ".: unexplored, F: flag, *: mine, X: detonated mine, !: wrong flag";

fn symbol(cell: CellView) -> char {
    use CellView::*;
    match cell {
        Hidden => '.',
        Flagged => 'F',
        Revealed(0) => ' ',
        Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        Mine => '*',
        Exploded => 'X',
        WrongFlag => '!',
    }
}

/// A snapshot drawn as text with row and column labels.
pub struct Grid<'a>(&'a Array2<CellView>);

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.0.dim();

        write!(f, "    ")?;
        for col in 0..cols {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        writeln!(f, "    {}", "-".repeat(cols * 3 + 1))?;

        for row in 0..rows {
            write!(f, "{row:>3} |")?;
            for col in 0..cols {
                write!(f, "{:>3}", symbol(self.0[[row, col]]))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn render(view: &Array2<CellView>) -> Grid<'_> {
    Grid(view)
}
