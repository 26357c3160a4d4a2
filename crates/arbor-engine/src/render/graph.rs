use crate::render::{EdgeRenderer, NodeRenderer, RenderCtx, RenderTarget};
use crate::scene::GraphFrame;
use crate::shading::{CameraTransform, GlobalUniforms};

/// Draws a whole [`GraphFrame`]: edges first, then nodes on top.
#[derive(Default)]
pub struct GraphRenderer {
    edges: EdgeRenderer,
    nodes: NodeRenderer,
}

impl GraphRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        frame: &GraphFrame,
        camera: &CameraTransform,
        uniforms: &GlobalUniforms,
    ) {
        log::trace!(
            "gpu frame: {} segments, {} nodes",
            frame.segment_count(),
            frame.nodes().len()
        );
        self.edges.render(ctx, target, frame, camera);
        self.nodes.render(ctx, target, frame.nodes(), camera, uniforms);
    }
}
