use glam::{Vec2, Vec3};

/// Axis-aligned XY bounds of a set of layout positions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Bounds of `points`' XY components, or `None` for an empty set.
    pub fn of_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?.truncate();
        let mut bounds = Self { min: first, max: first };
        for p in iter {
            let p = p.truncate();
            bounds.min = bounds.min.min(p);
            bounds.max = bounds.max.max(p);
        }
        Some(bounds)
    }

    #[inline]
    pub fn span(self) -> Vec2 {
        self.max - self.min
    }

    /// Maps `p` into `[-1, 1]²` with Y flipped (layout Y grows downward, clip Y
    /// grows upward). Z is preserved.
    ///
    /// An axis with zero span collapses to 0.
    #[inline]
    pub fn to_clip(self, p: Vec3) -> Vec3 {
        let span = self.span();
        let axis = |v: f32, min: f32, span: f32| {
            if span > 0.0 {
                (v - min - span / 2.0) / (span * 0.5)
            } else {
                0.0
            }
        };
        Vec3::new(
            axis(p.x, self.min.x, span.x),
            -axis(p.y, self.min.y, span.y),
            p.z,
        )
    }
}
