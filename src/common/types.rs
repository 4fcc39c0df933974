use serde::Serialize;

/// Page identifier type
pub type PageId = i32;

/// Frame index type
pub type FrameId = usize;

/// Logical clock value, bumped once per page access
pub type Timestamp = u64;

/// Recency value of a frame that has never been touched
pub const NEVER_ACCESSED: Timestamp = 0;

/// Rendering used for an empty frame in traces
pub const EMPTY_FRAME_MARKER: &str = "-";

/// A single memory frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub frame_id: FrameId,
    pub page: Option<PageId>,
    pub last_access: Timestamp,
}

impl Frame {
    pub fn new(frame_id: FrameId) -> Self {
        Self {
            frame_id,
            page: None,
            last_access: NEVER_ACCESSED,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_none()
    }

    pub fn holds(&self, page: PageId) -> bool {
        self.page == Some(page)
    }

    /// Place `page` in this frame, returning whatever was resident before
    pub fn load(&mut self, page: PageId, now: Timestamp) -> Option<PageId> {
        self.last_access = now;
        self.page.replace(page)
    }

    pub fn touch(&mut self, now: Timestamp) {
        self.last_access = now;
    }
}
