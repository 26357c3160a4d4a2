//! Arbor engine crate.
//!
//! Draws game-tree style graphs: nodes as anti-aliased discs with a border
//! ring, edges as flat-colored line segments. The per-pixel rules live in
//! [`shading`] and are shared by two backends:
//!
//! - [`render`]: wgpu pipelines that mirror `shading` in WGSL
//! - [`raster`]: a CPU reference rasterizer for headless output and tests
//!
//! [`window`] and [`core`] provide the platform loop that hosts the GPU path.

pub mod coords;
pub mod paint;
pub mod scene;
pub mod shading;

pub mod raster;
pub mod render;

pub mod core;
pub mod device;
pub mod logging;
pub mod window;
