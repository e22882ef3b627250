use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("coordinates outside the grid")]
    OutOfBounds,
    #[error("dimensions must be non-zero and mine count below the cell count")]
    InvalidConfig,
}

pub type Result<T> = core::result::Result<T, BoardError>;
