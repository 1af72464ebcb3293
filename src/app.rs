use crate::{utils::Pacer, Config, ConsoleRenderer, LifeEngine};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::Write;

/// Console driver: seeds the world, then steps and redraws it at a fixed interval.
pub struct App<W: Write> {
    engine: LifeEngine,           // Conway's GoL engine.
    renderer: ConsoleRenderer<W>, // Draws every generation.
    pacer: Pacer,                 // Keeps the interval between frames.
    config: Config,
}

impl<W: Write> App<W> {
    pub fn new(config: Config, out: W) -> Result<Self> {
        config.validate()?;
        let engine = LifeEngine::new(config.size)
            .context("failed to create the engine")?
            .with_parallelism(config.parallelism);
        let renderer = ConsoleRenderer::new(out)
            .glyphs(config.alive_glyph, config.dead_glyph)
            .clear_screen(config.clear_screen)
            .show_status(config.show_status);
        Ok(Self {
            engine,
            renderer,
            pacer: Pacer::new(config.interval),
            config,
        })
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    pub fn into_output(self) -> W {
        self.renderer.into_inner()
    }

    /// Run the simulation, returns the number of generations computed.
    pub fn run(&mut self) -> Result<u64> {
        info!(
            "starting {0}x{0} world, seed: {1}, interval: {2:?}",
            self.config.size,
            self.config.seed.describe(),
            self.pacer.interval()
        );
        self.config
            .seed
            .apply(&mut self.engine)
            .context("failed to seed the world")?;
        self.render()?;

        let mut steps = 0;
        while self.config.generations.map_or(true, |n| steps < n) {
            self.pacer.wait();
            self.engine.step().context("failed to advance the world")?;
            self.render()?;
            steps += 1;
            debug!(
                "generation {}, population {:?}, frame {:?}",
                self.engine.generation(),
                self.engine.population(),
                self.pacer.last_frame()
            );
            if self.pacer.is_behind() {
                warn!(
                    "frame took {:?}, longer than the {:?} interval",
                    self.pacer.last_frame(),
                    self.pacer.interval()
                );
            }
        }

        info!(
            "finished after {} generations, population {:?}",
            steps,
            self.engine.population()
        );
        Ok(steps)
    }

    fn render(&mut self) -> Result<()> {
        self.renderer
            .render(&self.engine)
            .context("failed to render the world")
    }
}
