//! Renderer error types.
//!
//! The protocol itself has no recoverable failures: staleness and
//! coalescing are policy, geometry mismatch is a fatal invariant breach.
//! Only construction can fail.

use std::io;

use thiserror::Error;

/// Failure constructing a [`Renderer`](crate::renderer::Renderer).
#[derive(Debug, Error)]
pub enum RendererError {
    /// The OS refused to spawn the render thread.
    #[error("failed to spawn render thread: {0}")]
    Spawn(#[from] io::Error),
}
