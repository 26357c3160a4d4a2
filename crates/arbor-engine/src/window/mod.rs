//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and windows, and binds each window to its own
//! `device::Gpu`.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
