use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SimulatorError {
    #[error("Number of frames must be at least 1, got {0}")]
    InvalidFrameCount(i64),
    #[error("Number of pages must be at least 1, got {0}")]
    InvalidPageCount(i64),
    #[error("Number of frames {requested} exceeds capacity of {capacity}")]
    FrameCapacityExceeded { requested: usize, capacity: usize },
    #[error("Number of pages {requested} exceeds capacity of {capacity}")]
    PageCapacityExceeded { requested: usize, capacity: usize },
}
