use glam::{Mat4, Vec3, Vec4};

/// Model / view / projection matrices for one draw call.
///
/// Owned by the host and recomposed every frame. Matrices are column-major
/// (`glam` convention) and applied right-to-left: object → world → view → clip.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraTransform {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl CameraTransform {
    #[inline]
    pub const fn new(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        Self { model, view, projection }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY)
    }

    /// Transforms an object-space position to clip space.
    #[inline]
    pub fn to_clip(&self, position: Vec3) -> Vec4 {
        compose(self, position)
    }
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// `clip = projection · view · model · vec4(position, 1)`.
///
/// No validation: non-invertible or NaN matrices propagate into the result.
#[inline]
pub fn compose(camera: &CameraTransform, position: Vec3) -> Vec4 {
    camera.projection * (camera.view * (camera.model * position.extend(1.0)))
}
