//! Per-pixel node shading: anti-aliased disc with a solid border ring.
//!
//! A footprint pixel is reduced to one scalar, the signed radial coordinate
//! `r` (zero on the disc's nominal boundary, negative inside), and classified
//! into one of four zones:
//!
//! ```text
//!            r_max
//!   fill  |  band  |  halo  |  outside
//!  -------+========+--------+----------> r
//!         -t   0   t        discard
//! ```
//!
//! - `Outside`: `r > r_max`, nothing is written.
//! - `Border`: `|r| < t`, solid foreground.
//! - `InnerFeather`: `r <= 0`, background blended toward foreground.
//! - `OuterFeather`: `r > 0`, foreground fading to transparent.
//!
//! Feather alpha is Gaussian in the distance from the band: `exp(-(d / aa)^2)`.

use glam::Vec2;

use crate::paint::Rgba;

/// Footprint centre in normalized footprint coordinates.
pub const FOOTPRINT_CENTER: Vec2 = Vec2::new(0.5, 0.5);

/// Disc parameters after radius scaling (`radius' = radius * radius_multiplier`).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DiscGeometry {
    /// Scaled radius `radius'`, in pixels.
    pub radius: f32,
    pub line_width: f32,
    pub antialias_width: f32,
}

impl DiscGeometry {
    #[inline]
    pub const fn new(radius: f32, line_width: f32, antialias_width: f32) -> Self {
        Self { radius, line_width, antialias_width }
    }

    /// Effective disc size used for the radial scale.
    ///
    /// Uses 1.0× antialias width; the rasterized footprint uses 1.5× (see
    /// `node::footprint_size`), so the disc sits inside a slightly larger square.
    #[inline]
    pub fn size(self) -> f32 {
        self.radius + 2.0 * (self.line_width + self.antialias_width)
    }

    /// Half border thickness minus the antialias margin (`t`).
    #[inline]
    pub fn half_band(self) -> f32 {
        self.line_width / 2.0 - self.antialias_width
    }

    /// Largest `r` that still produces output.
    #[inline]
    pub fn r_max(self) -> f32 {
        self.line_width / 2.0 + self.antialias_width
    }

    /// Signed radial coordinate of a footprint point `p` in `[0, 1]²`.
    #[inline]
    pub fn radial(self, p: Vec2) -> f32 {
        (p - FOOTPRINT_CENTER).length() * self.size() - self.radius / 2.0
    }

    /// Classifies a signed radial coordinate.
    pub fn classify(self, r: f32) -> DiscZone {
        if r > self.r_max() {
            return DiscZone::Outside;
        }

        let d = r.abs() - self.half_band();
        if d < 0.0 {
            return DiscZone::Border;
        }

        let alpha = feather_alpha(d, self.antialias_width);
        if r <= 0.0 {
            DiscZone::InnerFeather { alpha }
        } else {
            DiscZone::OuterFeather { alpha }
        }
    }
}

/// Shading outcome for one footprint pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DiscZone {
    Outside,
    Border,
    InnerFeather { alpha: f32 },
    OuterFeather { alpha: f32 },
}

impl DiscZone {
    /// Resolves the zone to a straight-alpha color. `None` means discard.
    #[inline]
    pub fn resolve(self, foreground: Rgba, background: Rgba) -> Option<Rgba> {
        match self {
            DiscZone::Outside => None,
            DiscZone::Border => Some(foreground),
            DiscZone::InnerFeather { alpha } => Some(background.mix(foreground, alpha)),
            DiscZone::OuterFeather { alpha } => Some(foreground.scale_alpha(alpha)),
        }
    }
}

/// Gaussian falloff `exp(-(d / aa)^2)` for `d >= 0`.
///
/// `aa <= 0` turns the falloff into a step (1 on the band edge, 0 beyond it)
/// instead of dividing by zero.
#[inline]
pub fn feather_alpha(d: f32, antialias_width: f32) -> f32 {
    if antialias_width > 0.0 {
        let x = d / antialias_width;
        (-x * x).exp()
    } else if d <= 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Shades footprint point `p` (`[0, 1]²`, centre at `(0.5, 0.5)`).
#[inline]
pub fn shade(geometry: DiscGeometry, p: Vec2, foreground: Rgba, background: Rgba) -> Option<Rgba> {
    let zone = geometry.classify(geometry.radial(p));
    zone.resolve(foreground, background)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FG: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    const BG: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn approx_rgba(a: Rgba, b: Rgba) -> bool {
        approx(a.r, b.r) && approx(a.g, b.g) && approx(a.b, b.b) && approx(a.a, b.a)
    }

    /// Footprint point at signed radial coordinate `r` along direction `angle`.
    fn point_at(g: DiscGeometry, r: f32, angle: f32) -> Vec2 {
        let d0 = (r + g.radius / 2.0) / g.size();
        FOOTPRINT_CENTER + Vec2::new(angle.cos(), angle.sin()) * d0
    }

    // ── derived quantities ────────────────────────────────────────────────

    #[test]
    fn derived_quantities() {
        let g = DiscGeometry::new(10.0, 2.0, 1.0);
        assert_eq!(g.size(), 16.0);
        assert_eq!(g.half_band(), 0.0);
        assert_eq!(g.r_max(), 2.0);
    }

    #[test]
    fn radial_is_zero_on_nominal_boundary() {
        let g = DiscGeometry::new(10.0, 2.0, 1.0);
        assert!(approx(g.radial(point_at(g, 0.0, 0.3)), 0.0));
        assert!(approx(g.radial(FOOTPRINT_CENTER), -5.0));
    }

    // ── classification ────────────────────────────────────────────────────

    #[test]
    fn beyond_r_max_is_discarded() {
        let g = DiscGeometry::new(20.0, 4.0, 1.5);
        for r in [g.r_max() + 1e-3, g.r_max() + 1.0, 50.0] {
            assert_eq!(g.classify(r), DiscZone::Outside);
            assert!(shade(g, point_at(g, r, 1.0), FG, BG).is_none());
        }
    }

    #[test]
    fn inside_band_is_exact_foreground() {
        let g = DiscGeometry::new(20.0, 6.0, 1.0);
        let t = g.half_band();
        assert_eq!(t, 2.0);
        for r in [-1.99, -1.0, 0.0, 0.5, 1.99] {
            assert_eq!(g.classify(r), DiscZone::Border);
            assert_eq!(g.classify(r).resolve(FG, BG), Some(FG));
        }
    }

    #[test]
    fn zero_line_width_boundary_blends_at_exp_minus_one() {
        let g = DiscGeometry::new(10.0, 0.0, 1.0);
        let e = (-1.0f32).exp();
        match g.classify(0.0) {
            DiscZone::InnerFeather { alpha } => assert!(approx(alpha, e)),
            other => panic!("unexpected zone {other:?}"),
        }
        let c = g.classify(0.0).resolve(FG, BG).unwrap();
        let expected = Rgba::new(
            BG.r * (1.0 - e) + FG.r * e,
            BG.g * (1.0 - e) + FG.g * e,
            BG.b * (1.0 - e) + FG.b * e,
            1.0,
        );
        assert!(approx_rgba(c, expected));
    }

    #[test]
    fn outer_feather_fades_foreground_alpha_only() {
        let g = DiscGeometry::new(10.0, 2.0, 1.0);
        let zone = g.classify(1.0);
        let DiscZone::OuterFeather { alpha } = zone else {
            panic!("unexpected zone {zone:?}");
        };
        assert!(approx(alpha, (-1.0f32).exp()));
        let c = zone.resolve(FG, BG).unwrap();
        assert_eq!((c.r, c.g, c.b), (FG.r, FG.g, FG.b));
        assert!(approx(c.a, alpha));
    }

    // ── invariants ────────────────────────────────────────────────────────

    #[test]
    fn shading_is_rotationally_symmetric() {
        let g = DiscGeometry::new(14.0, 3.0, 1.25);
        for r in [-6.0, -2.0, -0.3, 0.0, 1.1, 2.5, 2.9] {
            let reference = shade(g, point_at(g, r, 0.0), FG, BG);
            for k in 1..12 {
                let angle = k as f32 * core::f32::consts::TAU / 12.0;
                let c = shade(g, point_at(g, r, angle), FG, BG);
                match (reference, c) {
                    (None, None) => {}
                    (Some(a), Some(b)) => assert!(approx_rgba(a, b), "r={r} angle={angle}"),
                    _ => panic!("zone changed under rotation at r={r}"),
                }
            }
        }
    }

    #[test]
    fn feather_alpha_strictly_decreasing() {
        for aa in [0.5, 1.0, 3.0] {
            let mut prev = feather_alpha(0.0, aa);
            assert_eq!(prev, 1.0);
            for i in 1..40 {
                let a = feather_alpha(i as f32 * 0.1, aa);
                assert!(a < prev, "aa={aa} d={}", i as f32 * 0.1);
                prev = a;
            }
        }
    }

    #[test]
    fn zero_antialias_is_crisp_and_finite() {
        let g = DiscGeometry::new(10.0, 2.0, 0.0);
        assert_eq!(g.r_max(), 1.0);
        assert_eq!(g.classify(1.5), DiscZone::Outside);
        assert_eq!(g.classify(0.5), DiscZone::Border);
        assert_eq!(g.classify(1.0), DiscZone::OuterFeather { alpha: 1.0 });
        assert_eq!(g.classify(-3.0), DiscZone::InnerFeather { alpha: 0.0 });
        assert_eq!(g.classify(-3.0).resolve(FG, BG), Some(BG));
        for k in 0..=20 {
            let p = Vec2::new(k as f32 / 20.0, 0.5);
            if let Some(c) = shade(g, p, FG, BG) {
                assert!(c.is_finite());
            }
        }
    }

    #[test]
    fn degenerate_zero_radius_and_width_do_not_panic() {
        let g = DiscGeometry::new(0.0, 0.0, 0.0);
        assert_eq!(g.size(), 0.0);
        assert_eq!(shade(g, FOOTPRINT_CENTER, FG, BG), Some(FG));
        assert_eq!(shade(g, Vec2::ZERO, FG, BG), Some(FG));
    }

    // ── concrete scenario ─────────────────────────────────────────────────

    #[test]
    fn red_ring_on_blue_fill() {
        let g = DiscGeometry::new(10.0, 2.0, 1.0);

        // Centre: r = -5, d = 5, alpha = exp(-25), effectively background.
        let centre = shade(g, FOOTPRINT_CENTER, FG, BG).unwrap();
        assert!(approx_rgba(centre, BG));

        // Moving outward from the centre the blend leans monotonically to foreground.
        let mut prev_red = centre.r;
        for r in [-4.0, -3.0, -2.0, -1.0] {
            let c = shade(g, point_at(g, r, 0.7), FG, BG).unwrap();
            assert!(c.r > prev_red);
            prev_red = c.r;
        }

        // Nominal boundary: pure foreground.
        let edge = shade(g, point_at(g, 0.0, 2.0), FG, BG).unwrap();
        assert!(approx_rgba(edge, FG));
    }
}
