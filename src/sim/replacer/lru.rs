use crate::common::types::{Frame, FrameId, Timestamp};

/// Index of the smallest recency value. Ties go to the lowest index.
///
/// Returns `None` only for an empty table.
pub fn find_lru(times: &[Timestamp]) -> Option<FrameId> {
    let mut iter = times.iter().enumerate();
    let (mut pos, mut min) = iter.next()?;

    for (i, time) in iter {
        // strict comparison keeps the first minimum
        if time < min {
            min = time;
            pos = i;
        }
    }

    Some(pos)
}

/// Least Recently Used page replacement policy
///
/// Victims are chosen by a linear scan over the frame recency table; frame
/// pools are small, so no ordered structure is kept alongside the frames.
#[derive(Debug, Default, Clone, Copy)]
pub struct LRUReplacer;

impl LRUReplacer {
    pub fn new() -> Self {
        Self
    }

    /// Victim selection: the frame whose last access is oldest
    pub fn victim(&self, frames: &[Frame]) -> Option<FrameId> {
        // min_by_key keeps the first of equal minimums
        frames
            .iter()
            .min_by_key(|f| f.last_access)
            .map(|f| f.frame_id)
    }
}
