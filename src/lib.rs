#![warn(clippy::all)]

mod app;
mod config;
mod engine;
mod patterns;
mod render;
mod seed;
mod utils;

pub use app::App;
pub use config::Config;
pub use engine::{
    count_neighbors, next_state, CellAssignment, Error, Grid, LifeEngine, Parallelism, Result,
    NEIGHBOR_OFFSETS, PARALLEL_MIN_SIDE,
};
pub use patterns::{Pattern, PATTERNS};
pub use render::ConsoleRenderer;
pub use seed::Seed;
pub use utils::Pacer;
