//! Color model shared between the shading stages and both backends.
//!
//! Scope:
//! - straight (non-premultiplied) RGBA in `[0, 1]`
//! - the two blend operations the node shader needs (`mix`, alpha scaling)
//! - source-over compositing for the CPU backend
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Rgba;
