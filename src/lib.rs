// LRU page replacement simulator

pub mod common;
pub mod input;
pub mod sim;

// Re-export key items for convenient access
pub use common::types::{Frame, FrameId, PageId, Timestamp};
pub use input::{read_session, InputError, SimulationInput, TokenReader};
pub use sim::{
    find_lru, AccessOutcome, LRUReplacer, PageReplacementSimulator, SimulationReport,
    SimulatorConfig, SimulatorError, Step,
};
