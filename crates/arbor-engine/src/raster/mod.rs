//! CPU reference rasterizer.
//!
//! Drives the pure stages in `shading` end to end without a GPU:
//! - nodes are expanded into square footprints and shaded per pixel centre
//! - edges are rasterized as flat-colored line-list segments
//!
//! Fragments of one primitive are shaded in parallel (rayon) and composited
//! sequentially in instance order, so paint order is deterministic.

mod framebuffer;
mod lines;
mod points;

pub use framebuffer::Framebuffer;
pub use lines::rasterize_edges;
pub use points::rasterize_nodes;

use crate::scene::GraphFrame;
use crate::shading::{CameraTransform, GlobalUniforms};

/// Counters for one rasterized frame.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RasterStats {
    pub nodes_drawn: usize,
    pub edges_drawn: usize,
    pub pixels_written: usize,
}

impl RasterStats {
    #[inline]
    fn merge(self, other: RasterStats) -> Self {
        Self {
            nodes_drawn: self.nodes_drawn + other.nodes_drawn,
            edges_drawn: self.edges_drawn + other.edges_drawn,
            pixels_written: self.pixels_written + other.pixels_written,
        }
    }
}

/// Draws `frame` into `fb`: all edges first, then all nodes on top.
pub fn render_frame(
    fb: &mut Framebuffer,
    frame: &GraphFrame,
    camera: &CameraTransform,
    uniforms: &GlobalUniforms,
) -> RasterStats {
    let edges = rasterize_edges(fb, frame, camera);
    let nodes = rasterize_nodes(fb, frame.nodes(), camera, uniforms);
    let stats = edges.merge(nodes);

    log::debug!(
        "raster frame {}x{}: {} nodes, {} edges, {} pixels",
        fb.width(),
        fb.height(),
        stats.nodes_drawn,
        stats.edges_drawn,
        stats.pixels_written
    );
    stats
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::paint::Rgba;
    use crate::scene::{NodeInstance, NodeStyle};
    use super::*;

    #[test]
    fn nodes_paint_over_edges() {
        let mut fb = Framebuffer::new(64, 64).unwrap();
        fb.clear(Rgba::white());

        let mut frame = GraphFrame::new();
        let style = NodeStyle {
            radius: 20.0,
            line_width: 2.0,
            foreground: Rgba::black(),
            background: Rgba::new(0.0, 0.0, 1.0, 1.0),
        };
        let a = frame.push_node(NodeInstance::new(Vec3::new(-0.5, 0.0, 0.0), &style));
        let b = frame.push_node(NodeInstance::new(Vec3::new(0.5, 0.0, 0.0), &style));
        frame.push_edge_between(a, b, Rgba::new(0.0, 1.0, 0.0, 1.0), 2.0);

        let camera = CameraTransform::identity();
        let stats = render_frame(&mut fb, &frame, &camera, &GlobalUniforms::default());
        assert_eq!(stats.nodes_drawn, 2);
        assert_eq!(stats.edges_drawn, 1);

        // Node A centre sits on the edge line but the node was drawn last.
        let centre = fb.pixel(16, 32).unwrap();
        assert!(centre.b > 0.99 && centre.g < 0.01);
        // Midpoint between the nodes shows the edge.
        let mid = fb.pixel(32, 32).unwrap();
        assert_eq!(mid, Rgba::new(0.0, 1.0, 0.0, 1.0));
    }
}
