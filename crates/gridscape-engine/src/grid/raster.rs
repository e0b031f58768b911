use crate::coords::{ColorRgba, Vec2};

use super::palette::GridPalette;
use super::pass::shade;
use super::uniforms::GridUniforms;

/// RGBA8 image produced by the CPU rasterizer.
///
/// Row-major, top row first (the same orientation a presented frame has).
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl RasterImage {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at column `x`, row `y` (row 0 is the top). `None` when out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y as usize) * (self.width as usize) + x as usize).copied()
    }

    #[inline]
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Flat RGBA bytes, e.g. for handing to an image encoder.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Shades every pixel of the viewport in `uniforms.resolution`.
///
/// Row `r` is evaluated at device `y = height - (r + 0.5)` since device space
/// has its origin at the bottom. Pixels are independent of each other.
pub fn rasterize(uniforms: &GridUniforms, palette: &GridPalette) -> RasterImage {
    let (width, height) = uniforms.resolution.pixel_dims();
    let rh = uniforms.resolution.height;

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for row in 0..height {
        let py = rh - (row as f64 + 0.5);
        for col in 0..width {
            let px = col as f64 + 0.5;
            let color: ColorRgba = shade(Vec2::new(px, py), uniforms, palette);
            pixels.push(color.to_rgba8());
        }
    }

    log::trace!("rasterized grid {width}x{height}");

    RasterImage { width, height, pixels }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Resolution;

    fn frame(position: Vec2) -> (RasterImage, GridPalette) {
        let palette = GridPalette::default();
        let u = GridUniforms::new(position, Resolution::new(800.0, 600.0), 1.0);
        (rasterize(&u, &palette), palette)
    }

    #[test]
    fn dimensions_match_resolution() {
        let (img, _) = frame(Vec2::zero());
        assert_eq!((img.width(), img.height()), (800, 600));
        assert_eq!(img.pixels().len(), 800 * 600);
        assert_eq!(img.as_bytes().len(), 800 * 600 * 4);
        assert_eq!(img.pixel(800, 0), None);
    }

    #[test]
    fn vertical_axis_runs_through_centre_columns() {
        let (img, palette) = frame(Vec2::zero());
        let green = palette.y_axis.to_rgba8();
        for row in [0, 100, 299, 300, 599] {
            assert_eq!(img.pixel(399, row), Some(green));
            assert_eq!(img.pixel(400, row), Some(green));
        }
        assert_ne!(img.pixel(402, 10), Some(green));
    }

    #[test]
    fn top_row_is_positive_world_y() {
        // Camera at y = -0.3 puts the horizontal axis at co.y = 0.3, above centre.
        let (img, palette) = frame(Vec2::new(0.0, -0.3));
        let red = palette.x_axis.to_rgba8();
        assert_eq!(img.pixel(10, 180), Some(red));
        assert_ne!(img.pixel(10, 420), Some(red));
        assert_eq!(img.pixel(10, 420), Some(palette.background.to_rgba8()));
    }

    #[test]
    fn dragging_right_moves_the_vertical_axis_right() {
        use crate::camera::{CameraController, CameraState};
        use crate::input::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};

        let ctl = CameraController::default();
        let mut cam = CameraState::new();
        let events = [
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x: 100.0,
                y: 100.0,
            }),
            InputEvent::PointerMoved(PointerMoveEvent { x: 150.0, y: 100.0 }),
        ];
        ctl.apply_all(&mut cam, &events);
        for _ in 0..100 {
            cam.advance(1.0 / 60.0);
        }

        // 100 frames at -50 * 0.00006 per frame -> camera x = -0.3.
        assert!((cam.position().x + 0.3).abs() < 1e-9);

        let palette = GridPalette::default();
        let u = GridUniforms::from_camera(&cam, Resolution::new(800.0, 600.0));
        let img = rasterize(&u, &palette);
        let green = palette.y_axis.to_rgba8();

        // World x = 0 now sits at co.x = 0.3, i.e. column 520.
        assert_eq!(img.pixel(519, 50), Some(green));
        assert_eq!(img.pixel(520, 50), Some(green));
        assert_ne!(img.pixel(400, 50), Some(green));
    }

    #[test]
    fn empty_resolution_gives_empty_image() {
        let u = GridUniforms::new(Vec2::zero(), Resolution::new(0.0, 0.0), 1.0);
        let img = rasterize(&u, &GridPalette::default());
        assert_eq!(img.pixels().len(), 0);
        assert_eq!(img.pixel(0, 0), None);
    }
}
