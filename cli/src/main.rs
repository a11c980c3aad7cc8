use anyhow::Context;
use clap::{Parser, ValueEnum};
use mineclicker_core::{CellCount, Coord, Coord2, Difficulty, GameConfig, MinePlacement};

mod command;
mod render;
mod session;

use session::Setup;

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum DifficultyArg {
    Beginner,
    Intermediate,
    Expert,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Beginner => Difficulty::Beginner,
            DifficultyArg::Intermediate => Difficulty::Intermediate,
            DifficultyArg::Expert => Difficulty::Expert,
        }
    }
}

/// Play minesweeper in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Place mines at these positions instead of randomly, 0,0 is the top-left cell
    #[arg(value_name = "ROW,COL", value_parser = command::parse_mine_position)]
    mines: Vec<Coord2>,

    /// Board preset, individual values can be overridden with --rows, --cols and --mines
    #[arg(short, long, value_enum, default_value_t = DifficultyArg::Beginner)]
    difficulty: DifficultyArg,

    #[arg(long)]
    rows: Option<Coord>,

    #[arg(long)]
    cols: Option<Coord>,

    /// Number of random mines, ignored when mine positions are given
    #[arg(short = 'n', long = "mines", value_name = "COUNT")]
    mine_count: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Show every mine on the board
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn setup(&self) -> anyhow::Result<Setup> {
        let preset = Difficulty::from(self.difficulty).config();
        let size = (
            self.rows.unwrap_or(preset.size.0),
            self.cols.unwrap_or(preset.size.1),
        );

        let placement = if self.mines.is_empty() {
            let count = self.mine_count.unwrap_or(preset.mines);
            let config = GameConfig::new(size, count).context("invalid board settings")?;
            session::Placement::Random {
                count: config.mines,
                seed: self.seed,
            }
        } else {
            session::Placement::Fixed(MinePlacement::Explicit(self.mines.clone()))
        };

        Setup::new(size, placement, self.debug).context("invalid mine positions")
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(std::io::stderr)
        .init();
    log::debug!("{:?}", args);

    let setup = args.setup()?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session::run(setup, &mut stdin.lock(), &mut stdout.lock())
}
