use crate::{Error, LifeEngine};
use std::io::{self, Write};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Draws the current generation as text, one grid row per line.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    alive: char,
    dead: char,
    clear_screen: bool,
    show_status: bool,
    line: String,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            alive: '#',
            dead: ' ',
            clear_screen: true,
            show_status: true,
            line: String::new(),
        }
    }

    pub fn glyphs(mut self, alive: char, dead: char) -> Self {
        self.alive = alive;
        self.dead = dead;
        self
    }

    pub fn clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    pub fn show_status(mut self, enabled: bool) -> Self {
        self.show_status = enabled;
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one frame.
    pub fn render(&mut self, engine: &LifeEngine) -> io::Result<()> {
        let grid = engine
            .grid()
            .ok_or_else(|| io::Error::other(Error::NotInitialized))?;

        if self.clear_screen {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        let (alive, dead) = (self.alive, self.dead);
        for row in grid.rows_iter() {
            self.line.clear();
            self.line
                .extend(row.iter().map(|&c| if c { alive } else { dead }));
            self.line.push('\n');
            self.out.write_all(self.line.as_bytes())?;
        }
        if self.show_status {
            writeln!(
                self.out,
                "generation {}, population {}",
                engine.generation(),
                grid.population()
            )?;
        }
        self.out.flush()
    }
}
