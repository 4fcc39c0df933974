use crate::sim::error::SimulatorError;

/// Default upper bound on the reference string length
pub const DEFAULT_MAX_PAGES: usize = 100;

/// Default upper bound on the frame pool size
pub const DEFAULT_MAX_FRAMES: usize = 10;

/// Capacity limits applied to simulator input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Longest reference string accepted
    pub max_pages: usize,
    /// Largest frame pool accepted
    pub max_frames: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }
}

impl SimulatorConfig {
    /// Check a page count read from input, returning it as a length
    pub fn validate_pages(&self, pages: i64) -> Result<usize, SimulatorError> {
        if pages < 1 {
            return Err(SimulatorError::InvalidPageCount(pages));
        }
        let requested = usize::try_from(pages).unwrap_or(usize::MAX);
        if requested > self.max_pages {
            return Err(SimulatorError::PageCapacityExceeded {
                requested,
                capacity: self.max_pages,
            });
        }
        Ok(requested)
    }

    /// Check a frame count read from input, returning it as a length
    pub fn validate_frames(&self, frames: i64) -> Result<usize, SimulatorError> {
        if frames < 1 {
            return Err(SimulatorError::InvalidFrameCount(frames));
        }
        let requested = usize::try_from(frames).unwrap_or(usize::MAX);
        if requested > self.max_frames {
            return Err(SimulatorError::FrameCapacityExceeded {
                requested,
                capacity: self.max_frames,
            });
        }
        Ok(requested)
    }
}
