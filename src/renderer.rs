//! Render thread lifecycle and per-cycle state machine.
//!
//! The [`Renderer`] owns a dedicated thread that blocks on the mailbox,
//! snapshots the newest frame, and drives the [`CellVdev`] through one
//! render cycle: resize check, cell copy, cursor/selection propagation,
//! present decision. Dropping the renderer signals shutdown and joins the
//! thread; an in-flight cycle always completes first.

use std::sync::Arc;
use std::thread::{Builder, JoinHandle};

use crate::config::RendererConfig;
use crate::error::RendererError;
use crate::frame::Frame;
use crate::mailbox::{FrameMailbox, Wakeup};
use crate::policy::{RedrawMode, RedrawPolicy};
use crate::stats::{RenderStats, StatsSnapshot};
use crate::vdev::CellVdev;

/// Owns the render thread for its whole life. Restart is not supported;
/// one render thread per `Renderer` instance.
pub struct Renderer<F: Frame> {
    mailbox: Arc<FrameMailbox<F>>,
    stats: Arc<RenderStats>,
    thread: Option<JoinHandle<()>>,
}

impl<F: Frame> Renderer<F> {
    /// Spawns the render thread.
    ///
    /// `init` runs first on the new thread: it establishes the drawing
    /// context and constructs the video device there, since drawing
    /// contexts are typically bound to the thread that created them. No
    /// frame is processed before `init` returns.
    ///
    /// The mailbox is shared with the producer side; submissions through
    /// it and through [`update`](Self::update) are equivalent.
    pub fn spawn<V, I>(
        config: RendererConfig,
        mailbox: Arc<FrameMailbox<F>>,
        init: I,
    ) -> Result<Self, RendererError>
    where
        V: CellVdev,
        I: FnOnce() -> V + Send + 'static,
    {
        let stats = Arc::new(RenderStats::new());

        let thread = {
            let mailbox = Arc::clone(&mailbox);
            let stats = Arc::clone(&stats);
            Builder::new().name(config.thread_name).spawn(move || {
                let vdev = init();
                tracing::debug!("render thread started");
                render_loop(&mailbox, &stats, vdev);
                tracing::debug!("render thread stopped");
            })?
        };

        Ok(Self {
            mailbox,
            stats,
            thread: Some(thread),
        })
    }

    /// Submits a frame for rendering. Never blocks on the render loop.
    pub fn update(&self, frame: F) {
        self.mailbox.submit(frame);
    }

    /// Point-in-time copy of the render-loop counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

impl<F: Frame> Drop for Renderer<F> {
    fn drop(&mut self) {
        self.mailbox.shutdown();
        if let Some(thread) = self.thread.take() {
            // A panic on the render thread (geometry contract breach) has
            // already been reported; nothing to add here.
            let _ = thread.join();
        }
    }
}

/// One wait-render cycle per iteration until shutdown is observed.
fn render_loop<F: Frame, V: CellVdev>(mailbox: &FrameMailbox<F>, stats: &RenderStats, mut vdev: V) {
    let mut working_seq = 0u64;
    let mut policy = RedrawPolicy::new();

    loop {
        let (working, coalesced) = match mailbox.wait_newer(working_seq) {
            Wakeup::Shutdown => return,
            Wakeup::Frame {
                frame,
                seq,
                coalesced,
            } => {
                working_seq = seq;
                (frame, coalesced)
            }
        };

        if coalesced {
            stats.record_coalesced();
            tracing::debug!(seq = working_seq, "coalesced gap, forcing full redraw");
        }
        policy.note_coalesced(coalesced);

        let dims = working.dimensions();
        policy.note_resized(vdev.resize(dims.width_px, dims.height_px));

        {
            let mapping = vdev.mapping();
            assert_eq!(
                mapping.cols, dims.cols,
                "cell mapping columns disagree with frame geometry"
            );
            assert_eq!(
                mapping.rows, dims.rows,
                "cell mapping rows disagree with frame geometry"
            );

            match policy.mode() {
                RedrawMode::Full => {
                    stats.record_full_redraw();
                    working.full_copy_cells(mapping.cells);
                }
                RedrawMode::Delta => working.delta_copy_cells(mapping.cells),
            }
        }

        vdev.set_delta_frame(policy.is_delta());
        vdev.set_cursor(working.cursor());
        vdev.set_selection(working.snapped_selection());

        // If the sequence moved past our snapshot, drawing this frame
        // would put older content on screen than the frame the next cycle
        // diffs against. Drop it and let the next cycle redraw fully.
        let drawn = mailbox.latest_seq() == working_seq;
        if drawn {
            vdev.draw();
            vdev.present();
            stats.record_drawn();
        } else {
            stats.record_skipped();
            tracing::trace!(seq = working_seq, "superseded mid-cycle, skipping draw");
        }
        policy.note_present(drawn);
    }
}
