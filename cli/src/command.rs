use std::str::FromStr;

use anyhow::{Context, bail};
use mineclicker_core::{Coord, Coord2};

/// One line of interactive input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Reveal(i64, i64),
    ToggleFlag(i64, i64),
    Quit,
    Help,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();
        match line {
            "q" | "Q" => return Ok(Self::Quit),
            "h" | "H" | "?" => return Ok(Self::Help),
            _ => {}
        }

        if let Some(rest) = line.strip_prefix(['f', 'F']) {
            let (row, col) = parse_pair(rest)?;
            Ok(Self::ToggleFlag(row, col))
        } else {
            let (row, col) = parse_pair(line)?;
            Ok(Self::Reveal(row, col))
        }
    }
}

/// Parses `ROW COL`, coordinates may be negative so the board can report them as out of bounds.
fn parse_pair(text: &str) -> anyhow::Result<(i64, i64)> {
    let parts: Vec<_> = text.split_whitespace().collect();
    let &[row, col] = parts.as_slice() else {
        bail!("expected two coordinates like `3 4`");
    };
    let row = row.parse::<i64>().with_context(|| format!("bad row `{row}`"))?;
    let col = col.parse::<i64>().with_context(|| format!("bad column `{col}`"))?;
    Ok((row, col))
}

/// Parses a `ROW,COL` mine position given on the command line.
pub fn parse_mine_position(token: &str) -> anyhow::Result<Coord2> {
    let Some((row, col)) = token.split_once(',') else {
        bail!("expected ROW,COL");
    };
    let row: Coord = row
        .trim()
        .parse()
        .with_context(|| format!("bad row `{row}`"))?;
    let col: Coord = col
        .trim()
        .parse()
        .with_context(|| format!("bad column `{col}`"))?;
    Ok((row, col))
}

/// Reads a yes/no answer, `None` when the answer is unclear.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

pub const HELP: &str = "\
to reveal a cell, enter its coordinates ROW COL like `3 4`, 0 0 is top left
to flag/unflag a cell, enter f ROW COL like `f3 4`
to quit to the menu, enter q";
