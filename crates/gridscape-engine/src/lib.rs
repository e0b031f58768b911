//! Gridscape engine crate.
//!
//! An infinitely pannable and zoomable 2D grid with highlighted axes, shaded
//! per pixel over a full-screen quad.
//!
//! - `camera`: view transform and input-to-camera mapping
//! - `grid`: the per-pixel grid/axis procedure (CPU reference + rasterizer)
//! - `render`: the same procedure as a wgpu pass
//! - `device`, `window`, `core`, `input`, `time`: platform + GPU runtime

pub mod camera;
pub mod coords;
pub mod core;
pub mod device;
pub mod grid;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
