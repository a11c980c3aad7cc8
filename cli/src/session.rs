use std::io::{self, BufRead, Write};

use mineclicker_core::{CellCount, Coord2, Game, GameConfig, GameState, MinePlacement};

use crate::command::{Command, HELP, parse_yes_no};
use crate::render::{LEGEND, render};

/// Where the mines of each new game come from.
#[derive(Clone, Debug, PartialEq)]
pub enum Placement {
    /// The first game uses `seed` when given, every later game draws a fresh one
    Random { count: CellCount, seed: Option<u64> },
    /// Replayed unchanged for every game
    Fixed(MinePlacement),
}

/// Everything needed to start games, checked once up front.
#[derive(Clone, Debug)]
pub struct Setup {
    size: Coord2,
    placement: Placement,
    debug: bool,
}

impl Setup {
    pub fn new(
        size: Coord2,
        placement: Placement,
        debug: bool,
    ) -> mineclicker_core::Result<Self> {
        match &placement {
            Placement::Random { count, .. } => {
                GameConfig::new(size, *count)?;
            }
            Placement::Fixed(fixed) => {
                Game::new(size, fixed.clone())?;
            }
        }
        Ok(Self {
            size,
            placement,
            debug,
        })
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    fn next_game(&mut self) -> mineclicker_core::Result<Game> {
        let placement = match &mut self.placement {
            Placement::Random { count, seed } => {
                let seed = seed.take().unwrap_or_else(rand::random);
                log::debug!("seed: {}", seed);
                MinePlacement::Random {
                    count: *count,
                    seed,
                }
            }
            Placement::Fixed(fixed) => fixed.clone(),
        };
        Game::new(self.size, placement)
    }
}

enum Ending {
    Finished(GameState),
    Quit,
    Eof,
}

/// Plays games until the player declines another one or input runs out.
pub fn run(mut setup: Setup, input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
    loop {
        let mut game = setup.next_game()?;
        writeln!(out, "\nStarting game!\n{HELP}")?;

        match play(&mut game, setup.debug, input, out)? {
            Ending::Finished(state) => {
                writeln!(out, "\n{}{LEGEND}", render(&game.debug_view()))?;
                let message = match state {
                    GameState::Won => "You won!!!",
                    _ => "You lost :(",
                };
                writeln!(out, "\n{message}")?;
            }
            Ending::Quit => writeln!(out, "\nYou quit.")?,
            Ending::Eof => return Ok(()),
        }

        if ask_again(input, out)? != Some(true) {
            writeln!(out, "\nThanks for playing :)")?;
            return Ok(());
        }
    }
}

fn play(
    game: &mut Game,
    debug: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Ending> {
    loop {
        let state = game.check_game_state();
        if state.is_finished() {
            return Ok(Ending::Finished(state));
        }

        let view = if debug { game.debug_view() } else { game.view() };
        writeln!(out, "\n{}{LEGEND}", render(&view))?;
        writeln!(
            out,
            "there are {} mines in the grid, {} not flagged",
            game.total_mines(),
            game.mines_left()
        )?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(Ending::Eof);
        };

        match line.parse::<Command>() {
            Ok(Command::Quit) => return Ok(Ending::Quit),
            Ok(Command::Help) => writeln!(out, "{HELP}")?,
            Ok(command) => match apply(game, command) {
                Ok(Some(note)) => writeln!(out, "{note}")?,
                Ok(None) => {}
                Err(err) => writeln!(out, "\n!!! {err}")?,
            },
            Err(err) => writeln!(out, "\n!!! No action taken, command not understood: {err:#}")?,
        }
    }
}

/// Carries out a move, returning a note for the player when nothing changed.
fn apply(game: &mut Game, command: Command) -> mineclicker_core::Result<Option<String>> {
    match command {
        Command::Reveal(row, col) => {
            let coords = game.locate(row, col)?;
            if game.cell_at(coords)?.is_flagged {
                return Ok(Some(format!("({row}, {col}) is flagged, unflag it first")));
            }
            let revealed = game.reveal(coords)?;
            log::debug!("{} cells revealed", revealed.len());
            Ok(revealed
                .is_empty()
                .then(|| format!("({row}, {col}) is already revealed")))
        }
        Command::ToggleFlag(row, col) => {
            let coords = game.locate(row, col)?;
            game.toggle_flag(coords)?;
            Ok(None)
        }
        Command::Quit | Command::Help => Ok(None),
    }
}

fn ask_again(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Option<bool>> {
    write!(out, "\nWould you like to play again? (Yes/No)\n> ")?;
    loop {
        out.flush()?;
        let Some(answer) = read_line(input)? else {
            return Ok(None);
        };
        if let Some(again) = parse_yes_no(&answer) {
            return Ok(Some(again));
        }
        write!(out, "\nYour answer was not clear, would you like to start a new game? (Yes/No)\n> ")?;
    }
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}
