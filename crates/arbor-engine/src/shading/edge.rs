//! Edge transform stage.
//!
//! Edges carry no per-pixel shading: each endpoint is transformed and its
//! foreground color is emitted flat. Width is left to the rasterizer's line
//! facility.

use glam::Vec4;

use crate::paint::Rgba;
use crate::scene::EdgeInstance;

use super::{CameraTransform, compose};

/// Per-endpoint values handed to the line rasterizer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EdgeVarying {
    pub clip: Vec4,
    pub color: Rgba,
    /// Requested line width in pixels; the rasterizer decides what it supports.
    pub line_width: f32,
}

#[inline]
pub fn transform_edge(edge: &EdgeInstance, camera: &CameraTransform) -> EdgeVarying {
    EdgeVarying {
        clip: compose(camera, edge.object_position()),
        color: edge.foreground,
        line_width: edge.line_width,
    }
}

/// Transforms a line-list segment. Both endpoints share the same camera.
#[inline]
pub fn transform_segment(
    start: &EdgeInstance,
    end: &EdgeInstance,
    camera: &CameraTransform,
) -> (EdgeVarying, EdgeVarying) {
    (transform_edge(start, camera), transform_edge(end, camera))
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};

    use crate::scene::EdgeAttributes;
    use super::*;

    #[test]
    fn simple_variant_uses_implicit_z_one() {
        let e = EdgeInstance::simple(0.25, -0.5, 3.0, Rgba::white());
        assert_eq!(e.attributes, EdgeAttributes::Simple);
        let v = transform_edge(&e, &CameraTransform::identity());
        assert_eq!(v.clip, Vec4::new(0.25, -0.5, 1.0, 1.0));
        assert_eq!(v.color, Rgba::white());
        assert_eq!(v.line_width, 3.0);
    }

    #[test]
    fn simple_variant_ignores_stored_depth() {
        let mut e = EdgeInstance::simple(0.25, -0.5, 1.0, Rgba::white());
        e.position.z = 0.0;
        let v = transform_edge(&e, &CameraTransform::identity());
        assert_eq!(v.clip.z, EdgeInstance::SIMPLE_Z);
    }

    #[test]
    fn rich_variant_goes_through_composer() {
        let p = Vec3::new(1.0, 2.0, 0.0);
        let e = EdgeInstance::rich(p, Rgba::black(), Rgba::white(), 4.0, 1.0);
        let camera = CameraTransform::new(
            Mat4::from_scale(Vec3::splat(0.5)),
            Mat4::IDENTITY,
            Mat4::IDENTITY,
        );
        let v = transform_edge(&e, &camera);
        assert_eq!(v.clip, Vec4::new(0.5, 1.0, 0.0, 1.0));
        assert_eq!(v.color, Rgba::black());
    }

    #[test]
    fn coincident_endpoints_stay_coincident() {
        let e = EdgeInstance::simple(0.1, 0.1, 1.0, Rgba::black());
        let camera = CameraTransform::new(
            Mat4::from_rotation_z(0.7),
            Mat4::from_translation(Vec3::new(0.2, 0.0, 0.0)),
            Mat4::from_scale(Vec3::new(1.0, 2.0, 1.0)),
        );
        let (a, b) = transform_segment(&e, &e, &camera);
        assert_eq!(a.clip, b.clip);
    }
}
