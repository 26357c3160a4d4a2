use glam::Vec3;

use crate::paint::Rgba;

/// One rendered node (vertex) of the graph.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NodeInstance {
    pub position: Vec3,
    pub foreground: Rgba,
    pub background: Rgba,
    /// Border stroke width in pixels, `>= 0`.
    pub line_width: f32,
    /// Nominal radius before `radius_multiplier`, `>= 0`.
    pub radius: f32,
}

impl NodeInstance {
    #[inline]
    pub fn new(position: Vec3, style: &NodeStyle) -> Self {
        Self {
            position,
            foreground: style.foreground,
            background: style.background,
            line_width: style.line_width,
            radius: style.radius,
        }
    }

    #[inline]
    pub fn with_background(self, background: Rgba) -> Self {
        Self { background, ..self }
    }
}

/// Default node appearance: black ring on a white fill.
///
/// Sizes are in device pixels; build with [`NodeStyle::for_pixel_scale`] on
/// HiDPI surfaces.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NodeStyle {
    pub radius: f32,
    pub line_width: f32,
    pub foreground: Rgba,
    pub background: Rgba,
}

impl NodeStyle {
    pub const BASE_RADIUS: f32 = 16.0;
    pub const BASE_LINE_WIDTH: f32 = 2.0;

    #[inline]
    pub fn for_pixel_scale(pixel_scale: f32) -> Self {
        Self {
            radius: Self::BASE_RADIUS * pixel_scale,
            line_width: Self::BASE_LINE_WIDTH * pixel_scale,
            ..Self::default()
        }
    }
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            radius: Self::BASE_RADIUS,
            line_width: Self::BASE_LINE_WIDTH,
            foreground: Rgba::black(),
            background: Rgba::white(),
        }
    }
}

/// Which attribute set an edge endpoint was built from.
///
/// `Rich` endpoints carry a full 3D position plus background color and size;
/// `Simple` endpoints carry only `x`, `y`, width and color and are placed at
/// `z = 1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EdgeAttributes {
    Rich,
    Simple,
}

/// One endpoint of a line-list edge segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EdgeInstance {
    pub position: Vec3,
    pub foreground: Rgba,
    /// Rich attribute set only. Carried for the host; never read by shading.
    pub background: Option<Rgba>,
    /// Rich attribute set only. Carried for the host; never read by shading.
    pub size: Option<f32>,
    /// Line width in pixels, forwarded to the rasterizer.
    pub line_width: f32,
    pub attributes: EdgeAttributes,
}

impl EdgeInstance {
    pub const SIMPLE_Z: f32 = 1.0;

    #[inline]
    pub fn rich(
        position: Vec3,
        foreground: Rgba,
        background: Rgba,
        size: f32,
        line_width: f32,
    ) -> Self {
        Self {
            position,
            foreground,
            background: Some(background),
            size: Some(size),
            line_width,
            attributes: EdgeAttributes::Rich,
        }
    }

    /// Object-space position fed to the transform composer.
    ///
    /// `Simple` endpoints have no depth of their own and always sit at
    /// [`SIMPLE_Z`](Self::SIMPLE_Z), whatever `position.z` holds.
    #[inline]
    pub fn object_position(&self) -> Vec3 {
        match self.attributes {
            EdgeAttributes::Rich => self.position,
            EdgeAttributes::Simple => self.position.truncate().extend(Self::SIMPLE_Z),
        }
    }

    #[inline]
    pub fn simple(x: f32, y: f32, width: f32, color: Rgba) -> Self {
        Self {
            position: Vec3::new(x, y, Self::SIMPLE_Z),
            foreground: color,
            background: None,
            size: None,
            line_width: width,
            attributes: EdgeAttributes::Simple,
        }
    }
}
