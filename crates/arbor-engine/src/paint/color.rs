/// Straight-alpha RGBA color.
///
/// Invariant:
/// - `rgb` is *not* multiplied by `a`. Final surface output is straight alpha,
///   blended with `SrcAlpha, OneMinusSrcAlpha`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Linear interpolation `self * (1 - t) + other * t`, all four channels.
    ///
    /// `t` is not clamped.
    #[inline]
    pub fn mix(self, other: Rgba, t: f32) -> Self {
        let s = 1.0 - t;
        Self::new(
            self.r * s + other.r * t,
            self.g * s + other.g * t,
            self.b * s + other.b * t,
            self.a * s + other.a * t,
        )
    }

    /// Same color with alpha multiplied by `factor`.
    #[inline]
    pub fn scale_alpha(self, factor: f32) -> Self {
        Self { a: self.a * factor, ..self }
    }

    /// Straight-alpha source-over: `src.rgb * src.a + dst.rgb * (1 - src.a)`.
    ///
    /// Alpha accumulates the same way (`SrcAlpha, OneMinusSrcAlpha` on every channel).
    #[inline]
    pub fn over(self, dst: Rgba) -> Self {
        let sa = self.a;
        let inv = 1.0 - sa;
        Self::new(
            self.r * sa + dst.r * inv,
            self.g * sa + dst.g * inv,
            self.b * sa + dst.b * inv,
            self.a * sa + dst.a * inv,
        )
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Quantizes to bytes, clamping each channel to `[0, 1]` first.
    #[inline]
    pub fn to_u8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgba, b: Rgba) -> bool {
        (a.r - b.r).abs() < 1e-6
            && (a.g - b.g).abs() < 1e-6
            && (a.b - b.b).abs() < 1e-6
            && (a.a - b.a).abs() < 1e-6
    }

    // ── mix ───────────────────────────────────────────────────────────────

    #[test]
    fn mix_endpoints() {
        let a = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let b = Rgba::new(0.0, 0.0, 1.0, 0.5);
        assert!(close(a.mix(b, 0.0), a));
        assert!(close(a.mix(b, 1.0), b));
    }

    #[test]
    fn mix_halfway() {
        let m = Rgba::black().mix(Rgba::white(), 0.5);
        assert!(close(m, Rgba::new(0.5, 0.5, 0.5, 1.0)));
    }

    // ── over ──────────────────────────────────────────────────────────────

    #[test]
    fn over_opaque_replaces_destination() {
        let src = Rgba::new(0.2, 0.4, 0.6, 1.0);
        assert!(close(src.over(Rgba::white()), src));
    }

    #[test]
    fn over_transparent_keeps_destination() {
        let dst = Rgba::new(0.3, 0.3, 0.3, 1.0);
        let src = Rgba::new(1.0, 0.0, 0.0, 0.0);
        assert!(close(src.over(dst), dst));
    }

    // ── quantization ──────────────────────────────────────────────────────

    #[test]
    fn to_u8_clamps_out_of_range() {
        assert_eq!(Rgba::new(-1.0, 2.0, 0.5, 1.0).to_u8(), [0, 255, 128, 255]);
    }

    #[test]
    fn from_u8_round_trips_grey() {
        let c = Rgba::from_u8(160, 160, 160, 255);
        assert_eq!(c.to_u8(), [160, 160, 160, 255]);
    }
}
