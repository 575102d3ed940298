//! Render-loop counters.
//!
//! Shared atomics updated by the render thread, readable from anywhere.
//! Under load the externally observable behavior of the pipeline is
//! "drawing silently pauses, then resumes with a full redraw"; these
//! counters make that visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters owned by a [`Renderer`](crate::renderer::Renderer).
#[derive(Debug, Default)]
pub struct RenderStats {
    frames_drawn: AtomicU64,
    frames_skipped: AtomicU64,
    coalesced_wakeups: AtomicU64,
    full_redraws: AtomicU64,
}

impl RenderStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_drawn(&self) {
        self.frames_drawn.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_skipped(&self) {
        self.frames_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_coalesced(&self) {
        self.coalesced_wakeups.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_full_redraw(&self) {
        self.full_redraws.fetch_add(1, Ordering::Relaxed);
    }

    /// Consistent-enough point-in-time copy of all counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            frames_drawn: self.frames_drawn.load(Ordering::Relaxed),
            frames_skipped: self.frames_skipped.load(Ordering::Relaxed),
            coalesced_wakeups: self.coalesced_wakeups.load(Ordering::Relaxed),
            full_redraws: self.full_redraws.load(Ordering::Relaxed),
        }
    }
}

/// Plain copy of the counters at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Cycles that ended in draw + present.
    pub frames_drawn: u64,
    /// Cycles dropped because a newer frame arrived mid-cycle.
    pub frames_skipped: u64,
    /// Wakeups that observed a sequence gap > 1.
    pub coalesced_wakeups: u64,
    /// Cycles whose cell copy was a full overwrite.
    pub full_redraws: u64,
}
