//! Node transform stage: instance → clip position + point footprint.

use glam::{Vec2, Vec4};

use crate::paint::Rgba;
use crate::scene::NodeInstance;

use super::disc::{self, DiscGeometry};
use super::{CameraTransform, GlobalUniforms, compose};

/// Antialias multiplier used when sizing the rasterized footprint.
///
/// The disc itself is scaled with 1.0× (`DiscGeometry::size`); the footprint
/// keeps an extra half feather of coverage so the halo is never cut off by
/// the bounding square.
pub const FOOTPRINT_ANTIALIAS_FACTOR: f32 = 1.5;

/// Per-node values handed from the transform stage to the shading stage.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NodeVarying {
    pub clip: Vec4,
    /// Side of the square footprint, in pixels.
    pub point_size: f32,
    pub disc: DiscGeometry,
    pub foreground: Rgba,
    pub background: Rgba,
}

impl NodeVarying {
    /// Shades footprint point `p` (`[0, 1]²`). `None` means discard.
    #[inline]
    pub fn shade(&self, p: Vec2) -> Option<Rgba> {
        disc::shade(self.disc, p, self.foreground, self.background)
    }
}

/// `radius' + 2 * (line_width + 1.5 * antialias_width)`.
#[inline]
pub fn footprint_size(scaled_radius: f32, line_width: f32, antialias_width: f32) -> f32 {
    scaled_radius + 2.0 * (line_width + FOOTPRINT_ANTIALIAS_FACTOR * antialias_width)
}

pub fn transform_node(
    node: &NodeInstance,
    camera: &CameraTransform,
    uniforms: &GlobalUniforms,
) -> NodeVarying {
    let radius = node.radius * uniforms.radius_multiplier;
    let line_width = node.line_width;
    let antialias_width = uniforms.antialias_width;

    NodeVarying {
        clip: compose(camera, node.position),
        point_size: footprint_size(radius, line_width, antialias_width),
        disc: DiscGeometry::new(radius, line_width, antialias_width),
        foreground: node.foreground,
        background: node.background,
    }
}
