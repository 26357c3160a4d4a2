use glam::Vec2;
use rayon::prelude::*;

use crate::coords::{Rect, clip_contains};
use crate::paint::Rgba;
use crate::scene::NodeInstance;
use crate::shading::node::{NodeVarying, transform_node};
use crate::shading::{CameraTransform, GlobalUniforms};

use super::{Framebuffer, RasterStats};

/// Rasterizes `nodes` as point footprints, in order.
///
/// Nodes whose centre falls outside the clip volume are culled whole, matching
/// point-primitive clipping. Discarded fragments leave the target untouched.
pub fn rasterize_nodes(
    fb: &mut Framebuffer,
    nodes: &[NodeInstance],
    camera: &CameraTransform,
    uniforms: &GlobalUniforms,
) -> RasterStats {
    let mut stats = RasterStats::default();

    for node in nodes {
        let varying = transform_node(node, camera, uniforms);
        if !clip_contains(varying.clip) {
            log::trace!("node at {:?} culled (clip {:?})", node.position, varying.clip);
            continue;
        }

        let fragments = shade_footprint(fb, &varying);
        stats.nodes_drawn += 1;
        for (x, y, color) in fragments {
            if fb.blend(x, y, color) {
                stats.pixels_written += 1;
            }
        }
    }

    stats
}

/// Shades every pixel centre of the node's footprint that survives discard.
fn shade_footprint(fb: &Framebuffer, varying: &NodeVarying) -> Vec<(u32, u32, Rgba)> {
    let size = varying.point_size;
    if size.is_nan() || size <= 0.0 {
        return Vec::new();
    }
    let Some(center) = fb.viewport().clip_to_window(varying.clip) else {
        return Vec::new();
    };

    let footprint = Rect::square_around(center, size);
    let Some(visible) = footprint.intersect(fb.bounds()) else {
        return Vec::new();
    };

    let (xs, ys) = visible.covered_pixels();
    let xs = xs.start..xs.end.min(fb.width());
    let ys = ys.start..ys.end.min(fb.height());
    let origin = footprint.origin;

    ys.into_par_iter()
        .flat_map_iter(|y| {
            let xs = xs.clone();
            xs.filter_map(move |x| {
                let centre = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let p = (centre - origin) / size;
                varying.shade(p).map(|c| (x, y, c))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    const FG: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    const BG: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);

    fn node(x: f32, y: f32, radius: f32, line_width: f32) -> NodeInstance {
        NodeInstance {
            position: Vec3::new(x, y, 0.0),
            foreground: FG,
            background: BG,
            line_width,
            radius,
        }
    }

    fn render(nodes: &[NodeInstance], uniforms: GlobalUniforms) -> (Framebuffer, RasterStats) {
        let mut fb = Framebuffer::new(64, 64).unwrap();
        let stats = rasterize_nodes(&mut fb, nodes, &CameraTransform::identity(), &uniforms);
        (fb, stats)
    }

    #[test]
    fn pixels_outside_footprint_untouched() {
        let (fb, stats) = render(&[node(0.0, 0.0, 20.0, 2.0)], GlobalUniforms::default());
        assert_eq!(stats.nodes_drawn, 1);
        assert!(stats.pixels_written > 0);
        // Footprint is 27 px around (32, 32): corners of the target are never reached.
        assert_eq!(fb.pixel(0, 0), Some(Rgba::transparent()));
        assert_eq!(fb.pixel(63, 63), Some(Rgba::transparent()));
        // Footprint corner pixels are inside the square but outside r_max.
        assert_eq!(fb.pixel(19, 19), Some(Rgba::transparent()));
    }

    #[test]
    fn disc_centre_is_background_and_ring_is_foreground() {
        let (fb, _) = render(&[node(0.0, 0.0, 20.0, 4.0)], GlobalUniforms::default());
        let centre = fb.pixel(32, 32).unwrap();
        assert!(centre.b > 0.99 && centre.r < 0.01);

        // Nominal boundary at radius'/2 = 10 px from the centre along +X
        // (the disc scale is `size / point_size` of the footprint).
        let g = crate::shading::DiscGeometry::new(20.0, 4.0, 1.0);
        let point_size = crate::shading::node::footprint_size(20.0, 4.0, 1.0);
        let boundary_px = 10.0 / g.size() * point_size;
        let x = (32.0 + boundary_px - 0.5).round() as u32;
        let ring = fb.pixel(x, 32).unwrap();
        assert!(ring.r > 0.99 && ring.b < 0.01, "ring pixel {x}: {ring:?}");
    }

    #[test]
    fn centre_outside_clip_volume_is_culled() {
        let (fb, stats) = render(&[node(1.2, 0.0, 20.0, 2.0)], GlobalUniforms::default());
        assert_eq!(stats.nodes_drawn, 0);
        assert_eq!(stats.pixels_written, 0);
        assert_eq!(fb.pixel(63, 32), Some(Rgba::transparent()));
    }

    #[test]
    fn later_nodes_paint_over_earlier() {
        let a = node(0.0, 0.0, 20.0, 2.0);
        let b = NodeInstance { background: Rgba::new(0.0, 1.0, 0.0, 1.0), ..a };
        let (fb, _) = render(&[a, b], GlobalUniforms::default());
        let c = fb.pixel(32, 32).unwrap();
        assert!(c.g > 0.99 && c.b < 0.01);
    }

    #[test]
    fn zero_radius_zero_width_without_antialias_draws_nothing() {
        let (_, stats) = render(&[node(0.0, 0.0, 0.0, 0.0)], GlobalUniforms::new(0.0, 1.0));
        assert_eq!(stats.nodes_drawn, 1);
        assert_eq!(stats.pixels_written, 0);
    }

    #[test]
    fn radius_multiplier_rescales_footprint() {
        let (_, small) = render(&[node(0.0, 0.0, 10.0, 2.0)], GlobalUniforms::new(1.0, 1.0));
        let (_, big) = render(&[node(0.0, 0.0, 10.0, 2.0)], GlobalUniforms::new(1.0, 2.0));
        let (_, same) = render(&[node(0.0, 0.0, 20.0, 2.0)], GlobalUniforms::new(1.0, 1.0));
        assert!(big.pixels_written > small.pixels_written);
        assert_eq!(big.pixels_written, same.pixels_written);
    }
}
