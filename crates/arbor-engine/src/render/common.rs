//! Shared GPU types and utilities used by the node and edge renderers.

use bytemuck::{Pod, Zeroable};

use crate::coords::Viewport;
use crate::shading::{CameraTransform, GlobalUniforms};

// ── blend ─────────────────────────────────────────────────────────────────

/// Straight-alpha source-over on every channel.
pub(super) fn straight_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState {
        color: component,
        alpha: component,
    }
}

pub(super) fn primitive_state(topology: wgpu::PrimitiveTopology) -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: None,
        polygon_mode: wgpu::PolygonMode::Fill,
        unclipped_depth: false,
        conservative: false,
    }
}

// ── uniforms ──────────────────────────────────────────────────────────────

/// Camera matrices as uploaded to WGSL (`mat4x4<f32>` ×3, column-major).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct CameraUniform {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl CameraUniform {
    pub(super) fn from_camera(camera: &CameraTransform) -> Self {
        Self {
            model: camera.model.to_cols_array_2d(),
            view: camera.view.to_cols_array_2d(),
            projection: camera.projection.to_cols_array_2d(),
        }
    }
}

/// Node pipeline uniform: camera + per-draw globals (208 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct NodeUniform {
    pub camera: CameraUniform,
    pub viewport: [f32; 2],
    pub antialias_width: f32,
    pub radius_multiplier: f32,
}

impl NodeUniform {
    pub(super) fn new(
        camera: &CameraTransform,
        uniforms: &GlobalUniforms,
        viewport: Viewport,
    ) -> Self {
        Self {
            camera: CameraUniform::from_camera(camera),
            viewport: [viewport.width.max(1.0), viewport.height.max(1.0)],
            antialias_width: uniforms.antialias_width,
            radius_multiplier: uniforms.radius_multiplier,
        }
    }
}

/// Bind group layout with a single vertex+fragment uniform buffer of `T`.
pub(super) fn uniform_bind_group_layout<T>(
    device: &wgpu::Device,
    label: &str,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<T>() as u64),
            },
            count: None,
        }],
    })
}

// ── quad vertex ───────────────────────────────────────────────────────────

/// Unit-square corner; doubles as the footprint coordinate in the fragment stage.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub corner: [f32; 2], // 0..1, (0, 0) top-left
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { corner: [0.0, 0.0] },
    QuadVertex { corner: [1.0, 0.0] },
    QuadVertex { corner: [1.0, 1.0] },
    QuadVertex { corner: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Next instance-buffer capacity for `required` elements.
#[inline]
pub(super) fn grow_capacity(required: usize) -> usize {
    required.next_power_of_two().max(64)
}
