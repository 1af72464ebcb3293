#![warn(clippy::all)]

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use conway_console::{App, CellAssignment, Config, Parallelism, Pattern, Seed};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "conway_console", version)]
#[command(about = "Conway's Game of Life on a bounded square grid, drawn in the terminal")]
struct Cli {
    /// Side length of the square world
    #[arg(long, default_value_t = Config::SIZE)]
    size: usize,

    /// Milliseconds between generations
    #[arg(long, default_value_t = Config::INTERVAL_MS)]
    interval_ms: u64,

    /// Generations to simulate, 0 runs until interrupted
    #[arg(long, default_value_t = Config::GENERATIONS)]
    generations: u64,

    /// Seed of the random first generation
    #[arg(long, conflicts_with_all = ["pattern", "cell"])]
    seed: Option<u64>,

    /// Probability of a cell being alive in the random first generation
    #[arg(long, default_value_t = Config::FILL_RATE, conflicts_with_all = ["pattern", "cell"])]
    fill_rate: f64,

    /// Start from a built-in pattern instead of random cells
    #[arg(long, conflicts_with = "cell")]
    pattern: Option<String>,

    /// Start from explicit alive cells given as ROW,COL (repeatable)
    #[arg(long, value_parser = parse_cell)]
    cell: Vec<CellAssignment>,

    /// Glyph of alive cells
    #[arg(long, default_value_t = Config::ALIVE_GLYPH)]
    alive: char,

    /// Glyph of dead cells
    #[arg(long, default_value_t = Config::DEAD_GLYPH)]
    dead: char,

    /// Do not clear the terminal between frames
    #[arg(long)]
    no_clear: bool,

    /// Do not print the generation/population line
    #[arg(long)]
    no_status: bool,

    /// Worker threads for parallel updates (defaults to the number of CPUs)
    #[arg(long)]
    threads: Option<usize>,

    /// Whether rows are updated on the thread pool
    #[arg(long, value_enum, default_value_t = ParallelismArg::Auto)]
    parallelism: ParallelismArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ParallelismArg {
    Auto,
    Always,
    Never,
}

impl From<ParallelismArg> for Parallelism {
    fn from(value: ParallelismArg) -> Self {
        match value {
            ParallelismArg::Auto => Parallelism::Auto,
            ParallelismArg::Always => Parallelism::Always,
            ParallelismArg::Never => Parallelism::Never,
        }
    }
}

fn parse_cell(s: &str) -> Result<CellAssignment> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected ROW,COL, got '{}'", s))?;
    Ok(CellAssignment::alive(
        x.trim().parse().context("invalid row")?,
        y.trim().parse().context("invalid column")?,
    ))
}

impl Cli {
    fn into_config(self) -> Result<Config> {
        let seed = if let Some(name) = &self.pattern {
            let pattern = Pattern::by_name(name).ok_or_else(|| {
                anyhow!(
                    "unknown pattern '{}', available: {}",
                    name,
                    Pattern::names().collect::<Vec<_>>().join(", ")
                )
            })?;
            Seed::Pattern(pattern)
        } else if !self.cell.is_empty() {
            Seed::Cells(self.cell)
        } else {
            Seed::Random {
                fill_rate: self.fill_rate,
                seed: self.seed,
            }
        };
        Ok(Config {
            size: self.size,
            interval: Duration::from_millis(self.interval_ms),
            generations: (self.generations != 0).then_some(self.generations),
            seed,
            parallelism: self.parallelism.into(),
            alive_glyph: self.alive,
            dead_glyph: self.dead,
            clear_screen: !self.no_clear,
            show_status: !self.no_status,
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the thread pool")?;
    }

    let config = cli.into_config()?;
    let stdout = std::io::stdout().lock();
    App::new(config, stdout)?.run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{error::ErrorKind, CommandFactory};

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("conway_console").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_random_options_conflict_with_explicit_start() {
        for args in [
            ["--pattern", "glider", "--seed", "7"],
            ["--pattern", "glider", "--fill-rate", "0.5"],
            ["--cell", "1,2", "--seed", "7"],
            ["--cell", "1,2", "--fill-rate", "0.5"],
        ] {
            let err = parse(&args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentConflict, "args={:?}", args);
        }
    }

    #[test]
    fn test_seed_selection() {
        let config = parse(&["--seed", "7", "--fill-rate", "0.5"])
            .unwrap()
            .into_config()
            .unwrap();
        assert!(matches!(
            config.seed,
            Seed::Random {
                seed: Some(7),
                fill_rate
            } if fill_rate == 0.5
        ));

        let config = parse(&["--cell", "1,2", "--cell", "3, 4"])
            .unwrap()
            .into_config()
            .unwrap();
        match config.seed {
            Seed::Cells(cells) => assert_eq!(
                cells,
                vec![CellAssignment::alive(1, 2), CellAssignment::alive(3, 4)]
            ),
            _ => panic!("expected explicit cells"),
        }

        let config = parse(&["--pattern", "Blinker"]).unwrap().into_config().unwrap();
        assert!(matches!(config.seed, Seed::Pattern(p) if p.name == "blinker"));
        assert!(parse(&["--pattern", "gun"]).unwrap().into_config().is_err());
        assert!(parse(&["--cell", "1"]).is_err());
    }
}
