use glam::Vec2;
use rayon::prelude::*;

use crate::coords::Rect;
use crate::paint::Rgba;
use crate::scene::GraphFrame;
use crate::shading::edge::{EdgeVarying, transform_segment};
use crate::shading::CameraTransform;

use super::{Framebuffer, RasterStats};

/// Segments shorter than this (in pixels) have no direction and cover nothing.
const MIN_SEGMENT_LENGTH: f32 = 1e-4;

/// Rasterizes the frame's line-list edges, in order.
///
/// Width is the larger endpoint width, never below one pixel. Coverage is
/// decided at pixel centres: along the segment `0 <= t <= 1`, across it
/// `-w/2 <= d < w/2`. Colors interpolate linearly between endpoints.
pub fn rasterize_edges(
    fb: &mut Framebuffer,
    frame: &GraphFrame,
    camera: &CameraTransform,
) -> RasterStats {
    let mut stats = RasterStats::default();

    for (start, end) in frame.segments() {
        let (a, b) = transform_segment(start, end, camera);
        let Some(fragments) = shade_segment(fb, &a, &b) else {
            log::trace!(
                "degenerate or invisible segment {:?} -> {:?}",
                start.position,
                end.position
            );
            continue;
        };

        stats.edges_drawn += 1;
        for (x, y, color) in fragments {
            if fb.blend(x, y, color) {
                stats.pixels_written += 1;
            }
        }
    }

    stats
}

fn shade_segment(
    fb: &Framebuffer,
    a: &EdgeVarying,
    b: &EdgeVarying,
) -> Option<Vec<(u32, u32, Rgba)>> {
    let viewport = fb.viewport();
    let pa = viewport.clip_to_window(a.clip)?;
    let pb = viewport.clip_to_window(b.clip)?;

    let dir = pb - pa;
    let len = dir.length();
    if len.is_nan() || len < MIN_SEGMENT_LENGTH {
        return None;
    }

    let half = a.line_width.max(b.line_width).max(1.0) * 0.5;
    let unit = dir / len;
    let normal = Vec2::new(-unit.y, unit.x);

    let lo = pa.min(pb) - Vec2::splat(half);
    let hi = pa.max(pb) + Vec2::splat(half);
    let span = hi - lo;
    let visible = Rect::new(lo.x, lo.y, span.x, span.y).intersect(fb.bounds())?;

    let (xs, ys) = visible.covered_pixels();
    let xs = xs.start..xs.end.min(fb.width());
    let ys = ys.start..ys.end.min(fb.height());
    let flat = a.color == b.color;

    let fragments = ys
        .into_par_iter()
        .flat_map_iter(|y| {
            let xs = xs.clone();
            xs.filter_map(move |x| {
                let rel = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - pa;
                let t = rel.dot(unit) / len;
                if !(0.0..=1.0).contains(&t) {
                    return None;
                }
                let across = rel.dot(normal);
                if across < -half || across >= half {
                    return None;
                }
                let color = if flat { a.color } else { a.color.mix(b.color, t) };
                Some((x, y, color))
            })
        })
        .collect();

    Some(fragments)
}

#[cfg(test)]
mod tests {
    use crate::scene::EdgeInstance;
    use super::*;

    /// NDC for the centre of pixel column/row `px` on a 32 px axis.
    fn ndc(px: f32) -> f32 {
        px / 16.0 - 1.0
    }

    fn render(frame: &GraphFrame) -> (Framebuffer, RasterStats) {
        let mut fb = Framebuffer::new(32, 32).unwrap();
        let stats = rasterize_edges(&mut fb, frame, &CameraTransform::identity());
        (fb, stats)
    }

    #[test]
    fn coincident_endpoints_draw_nothing() {
        let mut frame = GraphFrame::new();
        let e = EdgeInstance::simple(0.1, -0.2, 5.0, Rgba::black());
        frame.push_edge(e, e);
        let (fb, stats) = render(&frame);
        assert_eq!(stats.edges_drawn, 0);
        assert_eq!(stats.pixels_written, 0);
        assert!(fb.to_rgba8().iter().all(|&b| b == 0));
    }

    #[test]
    fn one_pixel_horizontal_line_covers_one_row() {
        // Window y = 10.5 is the centre of row 10; NDC y is flipped.
        let y = -ndc(10.5);
        let mut frame = GraphFrame::new();
        frame.push_edge(
            EdgeInstance::simple(ndc(2.0), y, 1.0, Rgba::black()),
            EdgeInstance::simple(ndc(30.0), y, 1.0, Rgba::black()),
        );
        let (fb, stats) = render(&frame);
        assert_eq!(stats.edges_drawn, 1);
        assert_eq!(stats.pixels_written, 28);
        assert_eq!(fb.pixel(15, 10), Some(Rgba::black()));
        assert_eq!(fb.pixel(15, 9), Some(Rgba::transparent()));
        assert_eq!(fb.pixel(15, 11), Some(Rgba::transparent()));
    }

    #[test]
    fn width_widens_coverage() {
        let y = -ndc(16.0);
        let mut frame = GraphFrame::new();
        frame.push_edge(
            EdgeInstance::simple(ndc(0.0), y, 4.0, Rgba::black()),
            EdgeInstance::simple(ndc(32.0), y, 4.0, Rgba::black()),
        );
        let (fb, _) = render(&frame);
        for row in 14..18 {
            assert_eq!(fb.pixel(8, row), Some(Rgba::black()), "row {row}");
        }
        assert_eq!(fb.pixel(8, 13), Some(Rgba::transparent()));
        assert_eq!(fb.pixel(8, 18), Some(Rgba::transparent()));
    }

    #[test]
    fn colors_interpolate_along_segment() {
        let y = -ndc(4.5);
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let blue = Rgba::new(0.0, 0.0, 1.0, 1.0);
        let mut frame = GraphFrame::new();
        frame.push_edge(
            EdgeInstance::simple(ndc(0.0), y, 1.0, red),
            EdgeInstance::simple(ndc(32.0), y, 1.0, blue),
        );
        let (fb, _) = render(&frame);
        let left = fb.pixel(1, 4).unwrap();
        let right = fb.pixel(30, 4).unwrap();
        assert!(left.r > 0.9 && left.b < 0.1);
        assert!(right.b > 0.9 && right.r < 0.1);
    }

    #[test]
    fn segment_behind_eye_is_skipped() {
        let mut frame = GraphFrame::new();
        let a = EdgeInstance::simple(0.0, 0.0, 1.0, Rgba::black());
        let b = EdgeInstance::simple(0.5, 0.5, 1.0, Rgba::black());
        frame.push_edge(a, b);
        let mut fb = Framebuffer::new(8, 8).unwrap();
        // Projection that flips w negative for every vertex.
        let flip_w = glam::Mat4::from_cols(
            glam::Vec4::X,
            glam::Vec4::Y,
            glam::Vec4::Z,
            glam::Vec4::new(0.0, 0.0, 0.0, -1.0),
        );
        let camera = CameraTransform::new(glam::Mat4::IDENTITY, glam::Mat4::IDENTITY, flip_w);
        let stats = rasterize_edges(&mut fb, &frame, &camera);
        assert_eq!(stats.edges_drawn, 0);
    }
}
