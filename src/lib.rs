//! mirante - frame hand-off and render-loop synchronization for terminal
//! display pipelines.
//!
//! One producer thread periodically builds a display snapshot ([`Frame`]);
//! a dedicated render thread consumes the latest available frame, decides
//! whether an incremental update is safe or a full redraw is required, and
//! drives the rasterization backend ([`CellVdev`]).
//!
//! ```text
//! producer ──submit──▶ FrameMailbox ──wake──▶ render thread
//!                      (single slot,           │ snapshot under lock
//!                       latest wins,           │ resize check
//!                       seq number)            │ full/delta cell copy
//!                                              │ present decision
//!                                              ▼
//!                                         CellVdev (draw + present)
//! ```
//!
//! The mailbox coalesces: submitting while a frame is still pending simply
//! overwrites it, so a slow render loop can never stall the producer. The
//! render loop pays for that freedom by tracking staleness: a coalesced gap,
//! a resize, or a frame superseded mid-cycle each force the next cell copy
//! to be a full one instead of a delta.
//!
//! The crate owns only the cross-thread protocol. Cell rasterization,
//! frame diffing and buffer presentation live behind the [`Frame`] and
//! [`CellVdev`] seams.

pub mod config;
pub mod cursor;
pub mod error;
pub mod frame;
pub mod mailbox;
pub mod policy;
pub mod renderer;
pub mod selection;
pub mod stats;
pub mod vdev;

pub use config::RendererConfig;
pub use cursor::{CursorShape, CursorState};
pub use error::RendererError;
pub use frame::{Cell, CellFlags, Frame, FrameDimensions};
pub use mailbox::{FrameMailbox, Wakeup};
pub use policy::{RedrawMode, RedrawPolicy};
pub use renderer::Renderer;
pub use selection::{SelectionKind, SnappedSelection};
pub use stats::{RenderStats, StatsSnapshot};
pub use vdev::{CellMapping, CellVdev};
