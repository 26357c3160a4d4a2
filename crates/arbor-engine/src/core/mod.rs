//! Contract between the window runtime and applications.
//!
//! An [`App`] is driven once per redraw with a [`FrameCtx`] that knows how to
//! clear, draw and present the window's surface.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
