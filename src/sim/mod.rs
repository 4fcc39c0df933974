pub mod config;
pub mod error;
pub mod manager;
pub mod report;
mod replacer;

pub use config::SimulatorConfig;
pub use error::SimulatorError;
pub use manager::{AccessOutcome, PageReplacementSimulator};
pub use replacer::{find_lru, LRUReplacer};
pub use report::{SimulationReport, Step};
