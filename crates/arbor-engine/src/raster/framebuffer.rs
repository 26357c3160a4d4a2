use anyhow::Result;

use crate::coords::{Rect, Viewport};
use crate::paint::Rgba;

/// Straight-alpha RGBA float target, row-major, origin top-left.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        anyhow::ensure!(width > 0 && height > 0, "framebuffer has zero size ({width}x{height})");
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| anyhow::anyhow!("framebuffer {width}x{height} overflows usize"))?;
        Ok(Self {
            width,
            height,
            pixels: vec![Rgba::transparent(); len],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }

    /// Whole surface as a window-space rect.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Source-over blends `src` at `(x, y)`. Out-of-bounds writes are dropped.
    #[inline]
    pub fn blend(&mut self, x: u32, y: u32, src: Rgba) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = src.over(self.pixels[i]);
                true
            }
            None => false,
        }
    }

    /// Packs the surface as RGBA8 rows (top row first).
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_u8()).collect()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}
