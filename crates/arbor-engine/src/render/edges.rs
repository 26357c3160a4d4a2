use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{EdgeInstance, GraphFrame};
use crate::shading::CameraTransform;

use super::common::{
    CameraUniform, grow_capacity, primitive_state, straight_alpha_blend, uniform_bind_group_layout,
};

/// Renderer for graph edges as a flat-colored line list.
///
/// Hardware lines are one pixel wide; a requested width other than 1 is
/// accepted and reported once at debug level.
#[derive(Default)]
pub struct EdgeRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    camera_ubo: Option<wgpu::Buffer>,

    vertex_vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,

    warned_line_width: bool,
}

impl EdgeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws every complete segment of `frame` on top of the target.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        frame: &GraphFrame,
        camera: &CameraTransform,
    ) {
        let edges = frame.edges();
        let count = frame.segment_count() * 2;
        if count == 0 {
            return;
        }

        if !self.warned_line_width {
            if let Some(e) = edges[..count].iter().find(|e| e.line_width != 1.0) {
                log::debug!(
                    "edge line width {} requested; hardware lines are drawn 1px wide",
                    e.line_width
                );
                self.warned_line_width = true;
            }
        }

        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);

        let vertices: Vec<EdgeVertex> = edges[..count]
            .iter()
            .map(EdgeVertex::from_instance)
            .collect();

        self.write_camera(ctx, camera);
        self.ensure_vertex_capacity(ctx, vertices.len());

        let Some(vbo) = self.vertex_vbo.as_ref() else {
            return;
        };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&vertices));

        let Some(pipeline) = self.pipeline.as_ref() else {
            return;
        };
        let Some(bind_group) = self.bind_group.as_ref() else {
            return;
        };

        let mut rpass = target.begin_load_pass("arbor edge pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..vertices.len() as u32, 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }
        log::debug!("building edge pipeline for {:?}", ctx.surface_format);

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("arbor edge shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/edges.wgsl").into()),
        });

        let bind_group_layout =
            uniform_bind_group_layout::<CameraUniform>(ctx.device, "arbor edge bgl");

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("arbor edge pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("arbor edge pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[EdgeVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(straight_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: primitive_state(wgpu::PrimitiveTopology::LineList),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.camera_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.camera_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else {
            return;
        };

        let camera_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("arbor edge camera ubo"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("arbor edge bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_ubo.as_entire_binding(),
            }],
        });

        self.camera_ubo = Some(camera_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_camera(&mut self, ctx: &RenderCtx<'_>, camera: &CameraTransform) {
        let Some(ubo) = self.camera_ubo.as_ref() else {
            return;
        };
        let data = CameraUniform::from_camera(camera);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&data));
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vertex_capacity && self.vertex_vbo.is_some() {
            return;
        }
        let new_cap = grow_capacity(required);
        log::debug!("edge vertex buffer grown to {new_cap}");
        self.vertex_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("arbor edge vbo"),
            size: (new_cap * std::mem::size_of::<EdgeVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }
}

/// Line-list vertex (28 bytes): position at loc 0, color at loc 1.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct EdgeVertex {
    position: [f32; 3],
    color: [f32; 4],
}

impl EdgeVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x4  // color
    ];

    fn from_instance(edge: &EdgeInstance) -> Self {
        Self {
            position: edge.object_position().to_array(),
            color: edge.foreground.to_array(),
        }
    }

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<EdgeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
