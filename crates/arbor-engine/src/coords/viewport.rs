use glam::{Vec2, Vec4};

/// Target surface size in pixels.
///
/// Both backends treat this as the basis for converting clip-space positions
/// to window pixels (and pixel sizes back to NDC offsets in the GPU shader).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Perspective-divides `clip` and maps NDC to window pixels (Y down).
    ///
    /// Returns `None` when `w <= 0` (behind the eye); there is no meaningful
    /// window position for such a vertex.
    #[inline]
    pub fn clip_to_window(self, clip: Vec4) -> Option<Vec2> {
        if clip.w <= 0.0 {
            return None;
        }
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        Some(Vec2::new(
            (ndc_x * 0.5 + 0.5) * self.width,
            (0.5 - ndc_y * 0.5) * self.height,
        ))
    }
}

/// GL point clipping: a point primitive survives only if its centre lies in the
/// clip volume. Z uses the wgpu convention `0 <= z <= w`.
#[inline]
pub fn clip_contains(clip: Vec4) -> bool {
    clip.w > 0.0
        && clip.x.abs() <= clip.w
        && clip.y.abs() <= clip.w
        && clip.z >= 0.0
        && clip.z <= clip.w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners_map_to_window_corners() {
        let vp = Viewport::new(200.0, 100.0);
        assert_eq!(vp.clip_to_window(Vec4::new(-1.0, 1.0, 0.0, 1.0)), Some(Vec2::new(0.0, 0.0)));
        assert_eq!(
            vp.clip_to_window(Vec4::new(1.0, -1.0, 0.0, 1.0)),
            Some(Vec2::new(200.0, 100.0))
        );
        assert_eq!(vp.clip_to_window(Vec4::new(0.0, 0.0, 0.0, 1.0)), Some(Vec2::new(100.0, 50.0)));
    }

    #[test]
    fn perspective_divide_applied() {
        let vp = Viewport::new(100.0, 100.0);
        let a = vp.clip_to_window(Vec4::new(0.5, 0.5, 0.0, 1.0));
        let b = vp.clip_to_window(Vec4::new(1.0, 1.0, 0.0, 2.0));
        assert_eq!(a, b);
    }

    #[test]
    fn behind_eye_is_rejected() {
        let vp = Viewport::new(100.0, 100.0);
        assert!(vp.clip_to_window(Vec4::new(0.0, 0.0, 0.0, 0.0)).is_none());
        assert!(vp.clip_to_window(Vec4::new(0.0, 0.0, 0.0, -1.0)).is_none());
    }

    #[test]
    fn clip_volume_is_inclusive() {
        assert!(clip_contains(Vec4::new(1.0, -1.0, 1.0, 1.0)));
        assert!(!clip_contains(Vec4::new(1.01, 0.0, 0.5, 1.0)));
        assert!(!clip_contains(Vec4::new(0.0, 0.0, -0.1, 1.0)));
    }
}
