use glam::Vec2;

/// Axis-aligned rectangle in window pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Square of side `side` centred on `center` (a node footprint).
    #[inline]
    pub fn square_around(center: Vec2, side: f32) -> Self {
        let half = side * 0.5;
        Self {
            origin: center - Vec2::splat(half),
            size: Vec2::splat(side),
        }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let min = self.origin.max(other.origin);
        let max = self.max().min(other.max());
        let size = max - min;

        if size.x <= 0.0 || size.y <= 0.0 {
            None
        } else {
            Some(Rect { origin: min, size })
        }
    }

    /// Pixel index ranges whose centres (`i + 0.5`) fall inside the rect.
    ///
    /// Returned as half-open `(x0..x1, y0..y1)` clamped at zero; callers clamp
    /// the upper end against their surface.
    #[inline]
    pub fn covered_pixels(self) -> (core::ops::Range<u32>, core::ops::Range<u32>) {
        let span = |lo: f32, hi: f32| {
            let a = (lo - 0.5).ceil().max(0.0) as u32;
            let b = (hi - 0.5).ceil().max(0.0) as u32;
            a..b.max(a)
        };
        let max = self.max();
        (span(self.origin.x, max.x), span(self.origin.y, max.y))
    }
}
