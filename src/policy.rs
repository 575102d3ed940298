//! Full-vs-delta redraw decision policy.
//!
//! Render-loop-local state carried across cycles. Anything that invalidates
//! the backend's notion of "what is currently on screen" forces the next
//! cell copy to be a full one: a coalesced sequence gap, an actual resize,
//! or a cycle that was skipped because its frame went stale mid-flight.

/// How the next cell copy transfers frame content into the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawMode {
    /// Overwrite every cell. Always safe.
    Full,
    /// Copy only changed cells. Safe only when the previous cycle's frame
    /// is what the screen actually shows.
    Delta,
}

/// Decision state for the redraw mode.
///
/// Starts at [`RedrawMode::Full`]: before anything was drawn there is no
/// valid base for a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawPolicy {
    mode: RedrawMode,
}

impl RedrawPolicy {
    pub fn new() -> Self {
        Self {
            mode: RedrawMode::Full,
        }
    }

    /// Mode the current cycle must copy with.
    #[inline]
    pub fn mode(&self) -> RedrawMode {
        self.mode
    }

    #[inline]
    pub fn is_delta(&self) -> bool {
        self.mode == RedrawMode::Delta
    }

    /// At least one submitted frame was overwritten since the last
    /// snapshot: the screen may show content no surviving frame knows
    /// about, so a delta has no valid base.
    pub fn note_coalesced(&mut self, coalesced: bool) {
        if coalesced {
            self.mode = RedrawMode::Full;
        }
    }

    /// The backend's buffer changed dimensions; accumulated incremental
    /// state is invalid across a resize.
    pub fn note_resized(&mut self, resized: bool) {
        if resized {
            self.mode = RedrawMode::Full;
        }
    }

    /// Outcome of the present decision. A drawn frame is a valid base for
    /// the next delta; a skipped one leaves an older frame on screen, so
    /// the next cycle must redraw fully.
    pub fn note_present(&mut self, drawn: bool) {
        self.mode = if drawn {
            RedrawMode::Delta
        } else {
            RedrawMode::Full
        };
    }
}

impl Default for RedrawPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_full() {
        assert_eq!(RedrawPolicy::new().mode(), RedrawMode::Full);
    }

    #[test]
    fn drawn_frame_enables_delta() {
        let mut policy = RedrawPolicy::new();
        policy.note_present(true);
        assert!(policy.is_delta());
    }

    #[test]
    fn skipped_frame_revokes_delta() {
        let mut policy = RedrawPolicy::new();
        policy.note_present(true);
        policy.note_present(false);
        assert_eq!(policy.mode(), RedrawMode::Full);
    }

    #[test]
    fn coalescing_revokes_delta() {
        let mut policy = RedrawPolicy::new();
        policy.note_present(true);
        policy.note_coalesced(true);
        assert_eq!(policy.mode(), RedrawMode::Full);
    }

    #[test]
    fn resize_revokes_delta() {
        let mut policy = RedrawPolicy::new();
        policy.note_present(true);
        policy.note_resized(true);
        assert_eq!(policy.mode(), RedrawMode::Full);
    }

    #[test]
    fn uneventful_cycle_keeps_delta() {
        let mut policy = RedrawPolicy::new();
        policy.note_present(true);
        policy.note_coalesced(false);
        policy.note_resized(false);
        assert!(policy.is_delta());
    }
}
