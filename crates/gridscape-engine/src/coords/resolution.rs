/// Viewport size in device pixels.
///
/// Queried from the surface every frame; never cached across frames since the
/// window may be resized in between.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Resolution {
    pub width: f64,
    pub height: f64,
}

impl Resolution {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Builds a resolution from a `winit` physical size.
    #[inline]
    pub fn from_physical(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width as f64, size.height as f64)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Pixel dimensions rounded for raster buffers. Non-positive sizes collapse to zero.
    #[inline]
    pub fn pixel_dims(self) -> (u32, u32) {
        (self.width.max(0.0).round() as u32, self.height.max(0.0).round() as u32)
    }
}
