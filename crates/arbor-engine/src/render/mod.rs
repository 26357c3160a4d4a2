//! GPU rendering subsystem.
//!
//! Renderers consume a `scene::GraphFrame` and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - instance positions are object space; WGSL composes `projection · view · model`
//! - node footprints are sized in physical pixels and expanded from a unit quad
//!   using a viewport uniform (wgpu has no point sprites)
//! - output is straight alpha, blended `SrcAlpha, OneMinusSrcAlpha`

mod common;
mod ctx;
mod edges;
mod graph;
mod nodes;

pub use ctx::{RenderCtx, RenderTarget};
pub use edges::EdgeRenderer;
pub use graph::GraphRenderer;
pub use nodes::NodeRenderer;
