/// Per-draw-call parameters broadcast to every node invocation.
///
/// - `antialias_width`: feather radius in pixels. `0` disables the Gaussian
///   feather and gives a crisp edge.
/// - `radius_multiplier`: uniform scale on every node radius (zoom-independent
///   sizing).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlobalUniforms {
    pub antialias_width: f32,
    pub radius_multiplier: f32,
}

impl GlobalUniforms {
    #[inline]
    pub const fn new(antialias_width: f32, radius_multiplier: f32) -> Self {
        Self { antialias_width, radius_multiplier }
    }
}

impl Default for GlobalUniforms {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
