mod frame_management;

use log::{debug, info, trace};
use serde::Serialize;

use crate::common::types::{Frame, FrameId, PageId, Timestamp};
use crate::sim::config::SimulatorConfig;
use crate::sim::error::SimulatorError;
use crate::sim::replacer::LRUReplacer;
use crate::sim::report::{SimulationReport, Step};

use frame_management::{allocate_frame, Allocation};

/// Result of a single page access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccessOutcome {
    /// The page was already resident in `frame`
    Hit { frame: FrameId },
    /// The page was loaded into `frame`, displacing `evicted` if the pool was full
    Fault { frame: FrameId, evicted: Option<PageId> },
}

impl AccessOutcome {
    pub fn is_fault(&self) -> bool {
        matches!(self, AccessOutcome::Fault { .. })
    }

    pub fn frame(&self) -> FrameId {
        match *self {
            AccessOutcome::Hit { frame } | AccessOutcome::Fault { frame, .. } => frame,
        }
    }
}

/// Simulates LRU page replacement over a fixed pool of frames
///
/// All accesses share one logical clock, advanced exactly once per access
/// whether it hits or faults. Each frame records the clock value of its last
/// hit or load, and a fault with no empty frame evicts the frame holding the
/// smallest value.
#[derive(Debug, Clone)]
pub struct PageReplacementSimulator {
    frames: Vec<Frame>,
    replacer: LRUReplacer,
    clock: Timestamp,
    faults: usize,
    hits: usize,
}

impl PageReplacementSimulator {
    /// Create a simulator with `frame_count` empty frames and default capacities
    pub fn new(frame_count: usize) -> Result<Self, SimulatorError> {
        Self::with_config(frame_count, &SimulatorConfig::default())
    }

    /// Create a simulator, checking `frame_count` against `config`
    pub fn with_config(frame_count: usize, config: &SimulatorConfig) -> Result<Self, SimulatorError> {
        let frame_count = config.validate_frames(i64::try_from(frame_count).unwrap_or(i64::MAX))?;

        Ok(Self {
            frames: (0..frame_count).map(Frame::new).collect(),
            replacer: LRUReplacer::new(),
            clock: 0,
            faults: 0,
            hits: 0,
        })
    }

    /// Process one page reference
    pub fn access(&mut self, page: PageId) -> AccessOutcome {
        self.clock += 1;
        let now = self.clock;

        // Check if page is already resident
        if let Some(frame) = self.frames.iter_mut().find(|f| f.holds(page)) {
            frame.touch(now);
            self.hits += 1;
            trace!("Hit on page {} in frame {} at t={}", page, frame.frame_id, now);
            return AccessOutcome::Hit { frame: frame.frame_id };
        }

        self.faults += 1;

        match allocate_frame(&self.frames, &self.replacer) {
            Allocation::Free(frame_id) => {
                self.frames[frame_id].load(page, now);
                debug!("Fault on page {}: loaded into empty frame {} at t={}", page, frame_id, now);
                AccessOutcome::Fault { frame: frame_id, evicted: None }
            }
            Allocation::Evict(frame_id) => {
                let evicted = self.frames[frame_id].load(page, now);
                debug!(
                    "Fault on page {}: evicted page {:?} from frame {} at t={}",
                    page, evicted, frame_id, now
                );
                AccessOutcome::Fault { frame: frame_id, evicted }
            }
        }
    }

    /// Process one page reference and capture the resulting frame contents
    pub fn step(&mut self, page: PageId) -> Step {
        let outcome = self.access(page);
        Step {
            page,
            outcome,
            frames: self.snapshot(),
        }
    }

    /// Run a whole reference string from the current state
    pub fn run(&mut self, reference: &[PageId]) -> SimulationReport {
        let faults_before = self.faults;
        let hits_before = self.hits;
        let steps: Vec<Step> = reference.iter().map(|&page| self.step(page)).collect();

        let report = SimulationReport {
            frame_count: self.frame_count(),
            steps,
            faults: self.faults - faults_before,
            hits: self.hits - hits_before,
        };
        info!(
            "Simulated {} accesses over {} frames: {} faults, {} hits",
            reference.len(),
            report.frame_count,
            report.faults,
            report.hits
        );
        report
    }

    /// Frame contents in index order
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.frames.iter().map(|f| f.page).collect()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn fault_count(&self) -> usize {
        self.faults
    }

    pub fn hit_count(&self) -> usize {
        self.hits
    }

    pub fn access_count(&self) -> usize {
        self.faults + self.hits
    }

    /// Current value of the logical clock
    pub fn clock(&self) -> Timestamp {
        self.clock
    }

    /// Pages currently resident, in frame order
    pub fn resident_pages(&self) -> Vec<PageId> {
        self.frames.iter().filter_map(|f| f.page).collect()
    }

    /// Frame currently holding `page`, if any
    pub fn frame_of(&self, page: PageId) -> Option<FrameId> {
        self.frames.iter().find(|f| f.holds(page)).map(|f| f.frame_id)
    }

    /// Empty every frame and zero the clock and counters
    pub fn reset(&mut self) {
        for frame in &mut self.frames {
            *frame = Frame::new(frame.frame_id);
        }
        self.clock = 0;
        self.faults = 0;
        self.hits = 0;
    }
}
