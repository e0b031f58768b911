//! Coordinate and color types shared by the camera, the grid pass and the runtime.
//!
//! Spaces:
//! - screen space: pointer coordinates in logical pixels, origin top-left, +Y down
//! - device space: framebuffer pixels, as seen by the grid pass
//! - world space: the camera-relative plane the grid and axes live in
//!
//! World-space math is done in `f64`; only the GPU upload narrows to `f32`.

mod color;
mod resolution;
mod vec2;

pub use color::ColorRgba;
pub use resolution::Resolution;
pub use vec2::Vec2;
