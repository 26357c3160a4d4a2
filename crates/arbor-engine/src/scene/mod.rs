//! Per-frame instance streams.
//!
//! Responsibilities:
//! - hold the host's node and edge instances for one draw call
//! - preserve paint order (insertion order; later instances paint on top)
//! - remap layout coordinates into clip space when the host asks for it

mod fit;
mod frame;
mod instances;

pub use fit::Bounds;
pub use frame::GraphFrame;
pub use instances::{EdgeAttributes, EdgeInstance, NodeInstance, NodeStyle};
