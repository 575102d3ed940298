//! Renderer configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a [`Renderer`](crate::renderer::Renderer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Name given to the render thread.
    #[serde(default = "default_thread_name")]
    pub thread_name: String,
}

fn default_thread_name() -> String {
    String::from("frame-renderer")
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            thread_name: default_thread_name(),
        }
    }
}
