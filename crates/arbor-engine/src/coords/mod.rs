//! Screen-space geometry shared by the rasterizers.
//!
//! Canonical window space:
//! - physical pixels
//! - origin top-left
//! - +X right, +Y down
//!
//! Clip space (what the transform composer produces) is converted to window
//! space through a [`Viewport`].

mod rect;
mod viewport;

pub use rect::Rect;
pub use viewport::{Viewport, clip_contains};
