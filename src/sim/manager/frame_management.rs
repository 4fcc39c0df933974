use crate::common::types::{Frame, FrameId};
use crate::sim::replacer::LRUReplacer;

/// Where a faulting page will be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Allocation {
    /// An empty frame was available
    Free(FrameId),
    /// Every frame is occupied; this one holds the victim
    Evict(FrameId),
}

/// Pick a frame for a page that missed
///
/// `frames` must not be empty; the simulator validates its frame count on construction.
pub(crate) fn allocate_frame(frames: &[Frame], replacer: &LRUReplacer) -> Allocation {
    // Try the first empty frame in index order
    if let Some(frame) = frames.iter().find(|f| f.is_empty()) {
        return Allocation::Free(frame.frame_id);
    }

    // No empty frame, need to evict a page
    Allocation::Evict(replacer.victim(frames).unwrap_or(0))
}
