use crate::coords::{ColorRgba, Resolution, Vec2};

use super::palette::GridPalette;
use super::uniforms::GridUniforms;

/// Grid lines per unit of zoom; world spacing is `zoom / GRID_DIVISIONS`.
pub const GRID_DIVISIONS: f64 = 20.0;

/// What a pixel shows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GridCell {
    Background,
    GridLine,
    /// Horizontal axis (`y == 0`).
    XAxis,
    /// Vertical axis (`x == 0`). Wins over `XAxis` at the origin.
    YAxis,
}

/// Floored modulo, `x - y * floor(x / y)`.
///
/// Non-negative for positive `y`, unlike `%`.
#[inline]
pub fn floor_mod(x: f64, y: f64) -> f64 {
    x - y * (x / y).floor()
}

/// Per-axis line half-thickness in world units for a viewport.
///
/// `eps_y` is written in its unsimplified form with the `2.001` factor.
#[inline]
pub fn epsilon(resolution: Resolution) -> Vec2 {
    let (rw, rh) = (resolution.width, resolution.height);
    Vec2::new(2.0 / rw, (2.001 * rh) / (rw * rh))
}

/// Maps a device pixel to world space.
///
/// Normalizes to `[-1, 1]`, corrects aspect on Y, then offsets by the camera.
#[inline]
pub fn to_world(pixel: Vec2, uniforms: &GridUniforms) -> Vec2 {
    let res = uniforms.resolution;
    let mut co = Vec2::new(pixel.x / res.width * 2.0 - 1.0, pixel.y / res.height * 2.0 - 1.0);
    co.y *= res.height / res.width;
    co + uniforms.camera_position
}

/// Classifies a world-space point.
///
/// Order matters: grid test, then the X axis, then the Y axis, each later test
/// overriding the earlier ones.
pub fn classify_world(cu: Vec2, eps: Vec2, zoom: f64) -> GridCell {
    let spacing = zoom * 1.0 / GRID_DIVISIONS;

    let mut cell = if floor_mod(cu.x, spacing) <= eps.x || floor_mod(cu.y, spacing) <= eps.y {
        GridCell::GridLine
    } else {
        GridCell::Background
    };

    if cu.y >= -eps.y && cu.y <= eps.y {
        cell = GridCell::XAxis;
    }
    if cu.x >= -eps.x && cu.x <= eps.x {
        cell = GridCell::YAxis;
    }

    cell
}

/// Classifies the device pixel at `pixel`.
#[inline]
pub fn classify(pixel: Vec2, uniforms: &GridUniforms) -> GridCell {
    let cu = to_world(pixel, uniforms);
    classify_world(cu, epsilon(uniforms.resolution), uniforms.zoom)
}

/// Color of the device pixel at `pixel`. Always opaque.
#[inline]
pub fn shade(pixel: Vec2, uniforms: &GridUniforms, palette: &GridPalette) -> ColorRgba {
    palette.color_of(classify(pixel, uniforms))
}
