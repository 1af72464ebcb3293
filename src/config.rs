use crate::{Grid, Parallelism, Seed};
use anyhow::{bail, Result};
use std::time::Duration;

/// Settings of a console run.
pub struct Config {
    pub size: usize,
    pub interval: Duration,
    /// Number of generations to simulate, `None` to run until interrupted.
    pub generations: Option<u64>,
    pub seed: Seed,
    pub parallelism: Parallelism,
    pub alive_glyph: char,
    pub dead_glyph: char,
    pub clear_screen: bool,
    pub show_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: Self::SIZE,
            interval: Duration::from_millis(Self::INTERVAL_MS),
            generations: Some(Self::GENERATIONS),
            seed: Seed::default(),
            parallelism: Parallelism::default(),
            alive_glyph: Self::ALIVE_GLYPH,
            dead_glyph: Self::DEAD_GLYPH,
            clear_screen: true,
            show_status: true,
        }
    }
}

impl Config {
    pub const SIZE: usize = 20;
    pub const INTERVAL_MS: u64 = 100;
    pub const GENERATIONS: u64 = 1000;
    pub const FILL_RATE: f64 = Grid::FILL_RATE;
    pub const ALIVE_GLYPH: char = '#';
    pub const DEAD_GLYPH: char = ' ';

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            bail!("world size must be greater than zero");
        }
        if self.size.checked_mul(self.size).is_none() {
            bail!("{0}x{0} world is too large", self.size);
        }
        if let Seed::Random { fill_rate, .. } = self.seed {
            if !(0.0..=1.0).contains(&fill_rate) {
                bail!("fill rate must be within [0, 1], got {}", fill_rate);
            }
        }
        if self.alive_glyph == self.dead_glyph {
            bail!("alive and dead glyphs must differ");
        }
        if self.alive_glyph.is_control() || self.dead_glyph.is_control() {
            bail!("glyphs must be printable characters");
        }
        Ok(())
    }
}
