use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("grid must have at least one row and one column (got {rows}x{columns})")]
    EmptyGrid { rows: usize, columns: usize },

    #[error("grid of {rows}x{columns} cells is too large")]
    GridTooLarge { rows: usize, columns: usize },

    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    OutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("no cell with id {id} (grid holds {len} cells)")]
    UnknownCell { id: usize, len: usize },

    #[error("cells can only be toggled before the simulation starts")]
    SimulationStarted,

    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
