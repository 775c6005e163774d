use std::collections::VecDeque;

/// Token for one requested animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Host-provided "next animation frame" primitive.
///
/// A requested frame fires at most once, on a later refresh. A cancelled frame never fires.
pub trait FrameHost {
    /// Request a callback on the next refresh.
    fn request_frame(&mut self) -> FrameHandle;
    /// Withdraw a request. Unknown or already-fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
    /// Advance one refresh and return the handles due on it, in request order.
    ///
    /// Frames requested while the returned handles run are due on the following refresh.
    fn poll_due(&mut self) -> Vec<FrameHandle>;
}

/// Counters kept by [`FrameQueue`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameQueueStats {
    /// Frames requested.
    pub requested: u64,
    /// Requests withdrawn before firing.
    pub cancelled: u64,
    /// Frames handed out by `poll_due`.
    pub fired: u64,
    /// Calls to `poll_due`.
    pub refreshes: u64,
}

/// In-process [`FrameHost`]: every live request is due on the next `poll_due`.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    live: VecDeque<FrameHandle>,
    stats: FrameQueueStats,
}

impl FrameQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests still waiting to fire.
    pub fn live(&self) -> usize {
        self.live.len()
    }

    /// Running counters.
    pub fn stats(&self) -> FrameQueueStats {
        self.stats
    }
}

impl FrameHost for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.live.push_back(handle);
        self.stats.requested += 1;
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.live.len();
        self.live.retain(|h| *h != handle);
        if self.live.len() != before {
            self.stats.cancelled += 1;
        }
    }

    fn poll_due(&mut self) -> Vec<FrameHandle> {
        self.stats.refreshes += 1;
        let due: Vec<FrameHandle> = self.live.drain(..).collect();
        self.stats.fired += due.len() as u64;
        due
    }
}

/// The single pending-frame slot of one plot.
///
/// Scheduling always cancels the previous request first, so at most one frame is live.
#[derive(Debug, Default)]
pub struct RenderLoop {
    pending: Option<FrameHandle>,
}

impl RenderLoop {
    /// Loop with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is pending with a fresh request.
    pub fn schedule(&mut self, host: &mut dyn FrameHost) -> FrameHandle {
        if let Some(old) = self.pending.take() {
            host.cancel_frame(old);
            tracing::debug!(handle = old.0, "cancelled pending frame");
        }
        let handle = host.request_frame();
        self.pending = Some(handle);
        handle
    }

    /// Take ownership of a fired frame. Returns `false` for stale handles.
    pub fn claim(&mut self, handle: FrameHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Currently pending request, if any.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plot/scheduler.rs"]
mod tests;
