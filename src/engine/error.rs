/// Errors reported by the grid engine and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The engine cannot be built with this configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Supplied data does not fit the engine.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// No grid has been installed with `set_grid` yet.
    #[error("grid has not been initialized")]
    NotInitialized,
    #[error("cell ({x}, {y}) is outside of the {size}x{size} grid")]
    IndexOutOfRange { x: usize, y: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
