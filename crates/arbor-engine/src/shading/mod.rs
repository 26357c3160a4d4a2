//! Backend-independent transform and shading stages.
//!
//! Every function here is a pure function of its inputs. Per-draw state
//! (`CameraTransform`, `GlobalUniforms`) is passed explicitly so the stages can
//! be driven by the CPU rasterizer, mirrored in WGSL, and unit-tested without a
//! device.
//!
//! Stages:
//! - `compose`: object space → clip space (`projection · view · model`)
//! - `node`:    node instance → clip position + footprint size
//! - `disc`:    footprint pixel → discard / border / feathered fill or halo
//! - `edge`:    edge endpoint → clip position + flat color

mod compose;
mod uniforms;

pub mod disc;
pub mod edge;
pub mod node;

pub use compose::{CameraTransform, compose};
pub use disc::{DiscGeometry, DiscZone};
pub use edge::EdgeVarying;
pub use node::NodeVarying;
pub use uniforms::GlobalUniforms;
