//! Versioned single-slot frame mailbox.
//!
//! Latest-value-wins exchange point between the producer and the render
//! thread. Submitting while a frame is still pending overwrites it; the
//! render loop always eventually sees the newest frame, never necessarily
//! every frame. `submit` never blocks on the consumer, so a slow render
//! loop cannot stall the producer.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Condvar, Mutex};

use crate::frame::Frame;

/// What the render loop was woken for.
#[derive(Debug)]
pub enum Wakeup<F> {
    /// The pipeline is tearing down. Takes priority over any pending frame.
    Shutdown,
    /// A newer frame is available.
    Frame {
        /// Private copy of the pending frame.
        frame: F,
        /// Sequence the frame was submitted at.
        seq: u64,
        /// True when at least one intermediate submission was overwritten
        /// since the consumer's last snapshot.
        coalesced: bool,
    },
}

struct Slot<F> {
    pending: F,
    seq: u64,
    shutdown: bool,
}

/// Single-slot mailbox versioned by a monotonic sequence number.
///
/// The mutex guards exactly {pending frame, sequence, shutdown flag}. The
/// sequence is mirrored into an atomic so the render loop's mid-cycle
/// staleness check ([`latest_seq`](Self::latest_seq)) needs no lock.
pub struct FrameMailbox<F> {
    slot: Mutex<Slot<F>>,
    new_frame: Condvar,
    // Written with Release while holding the mutex, read with Acquire
    // without it. Lags the slot only within a submit critical section,
    // which the consumer can never observe.
    seq: AtomicU64,
}

impl<F: Frame> FrameMailbox<F> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot {
                pending: F::default(),
                seq: 0,
                shutdown: false,
            }),
            new_frame: Condvar::new(),
            seq: AtomicU64::new(0),
        }
    }

    /// Replaces the pending frame and wakes the render loop.
    ///
    /// The frame is stamped with the next sequence number. Whatever was
    /// pending is discarded; there is no queueing.
    pub fn submit(&self, frame: F) {
        let mut slot = self.slot.lock();
        slot.pending = frame;
        slot.seq += 1;
        self.seq.store(slot.seq, Ordering::Release);
        drop(slot);
        self.new_frame.notify_one();
    }

    /// Signals teardown and wakes the render loop.
    ///
    /// Bumps the sequence so the consumer's wait predicate turns true even
    /// when no new frame was submitted. Joining the render thread is the
    /// caller's job.
    pub fn shutdown(&self) {
        let mut slot = self.slot.lock();
        slot.shutdown = true;
        slot.seq += 1;
        self.seq.store(slot.seq, Ordering::Release);
        drop(slot);
        self.new_frame.notify_one();
    }

    /// Blocks until the pending sequence differs from `last_seq`, then
    /// snapshots the slot.
    ///
    /// This is the render loop's only suspension point. The predicate is
    /// re-checked on every wake, so spurious wakeups are harmless. A set
    /// shutdown flag wins over any pending frame.
    pub fn wait_newer(&self, last_seq: u64) -> Wakeup<F> {
        let mut slot = self.slot.lock();
        self.new_frame.wait_while(&mut slot, |s| s.seq == last_seq);

        if slot.shutdown {
            return Wakeup::Shutdown;
        }

        Wakeup::Frame {
            frame: slot.pending.clone(),
            seq: slot.seq,
            coalesced: last_seq + 1 != slot.seq,
        }
    }

    /// Current sequence number, without taking the lock.
    ///
    /// Used by the render loop's present decision: if the sequence moved
    /// past the snapshot taken this cycle, the frame about to be drawn is
    /// already stale.
    #[inline]
    pub fn latest_seq(&self) -> u64 {
        self.seq.load(Ordering::Acquire)
    }
}

impl<F: Frame> Default for FrameMailbox<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::CursorState;
    use crate::frame::{Cell, FrameDimensions};
    use crate::selection::SnappedSelection;

    #[derive(Clone, Default)]
    struct TagFrame(u64);

    impl Frame for TagFrame {
        fn dimensions(&self) -> FrameDimensions {
            FrameDimensions::default()
        }
        fn full_copy_cells(&self, _cells: &mut [Cell]) {}
        fn delta_copy_cells(&self, _cells: &mut [Cell]) {}
        fn cursor(&self) -> CursorState {
            CursorState::default()
        }
        fn snapped_selection(&self) -> Option<SnappedSelection> {
            None
        }
    }

    #[test]
    fn submit_bumps_sequence_monotonically() {
        let mailbox = FrameMailbox::new();
        assert_eq!(mailbox.latest_seq(), 0);
        for expected in 1..=5 {
            mailbox.submit(TagFrame(expected));
            assert_eq!(mailbox.latest_seq(), expected);
        }
    }

    #[test]
    fn latest_submission_wins() {
        let mailbox = FrameMailbox::new();
        mailbox.submit(TagFrame(1));
        mailbox.submit(TagFrame(2));
        mailbox.submit(TagFrame(3));

        match mailbox.wait_newer(0) {
            Wakeup::Frame { frame, seq, coalesced } => {
                assert_eq!(frame.0, 3);
                assert_eq!(seq, 3);
                assert!(coalesced);
            }
            Wakeup::Shutdown => panic!("unexpected shutdown"),
        }
    }

    #[test]
    fn consecutive_consumption_is_not_coalesced() {
        let mailbox = FrameMailbox::new();
        mailbox.submit(TagFrame(1));
        let seq = match mailbox.wait_newer(0) {
            Wakeup::Frame { seq, coalesced, .. } => {
                assert!(!coalesced);
                seq
            }
            Wakeup::Shutdown => panic!("unexpected shutdown"),
        };

        mailbox.submit(TagFrame(2));
        match mailbox.wait_newer(seq) {
            Wakeup::Frame { frame, coalesced, .. } => {
                assert_eq!(frame.0, 2);
                assert!(!coalesced);
            }
            Wakeup::Shutdown => panic!("unexpected shutdown"),
        }
    }

    #[test]
    fn shutdown_wins_over_pending_frame() {
        let mailbox = FrameMailbox::new();
        mailbox.submit(TagFrame(1));
        mailbox.shutdown();
        assert!(matches!(mailbox.wait_newer(0), Wakeup::Shutdown));
    }

    #[test]
    fn shutdown_wakes_with_no_submissions() {
        let mailbox: FrameMailbox<TagFrame> = FrameMailbox::new();
        mailbox.shutdown();
        // The bump makes the predicate true even though nothing was
        // submitted; a consumer that last saw sequence 0 must not block.
        assert!(matches!(mailbox.wait_newer(0), Wakeup::Shutdown));
    }

    #[test]
    fn wait_blocks_until_submission() {
        use std::sync::Arc;

        let mailbox: Arc<FrameMailbox<TagFrame>> = Arc::new(FrameMailbox::new());
        let consumer = {
            let mailbox = Arc::clone(&mailbox);
            std::thread::spawn(move || match mailbox.wait_newer(0) {
                Wakeup::Frame { frame, .. } => frame.0,
                Wakeup::Shutdown => panic!("unexpected shutdown"),
            })
        };

        std::thread::sleep(std::time::Duration::from_millis(20));
        mailbox.submit(TagFrame(42));
        assert_eq!(consumer.join().unwrap(), 42);
    }
}
