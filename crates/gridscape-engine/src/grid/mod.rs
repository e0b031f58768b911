//! Grid shading.
//!
//! The per-pixel grid/axis procedure, expressed once on the CPU in `f64`
//! (`pass`) and mirrored by the WGSL program used by `render::GridRenderer`.
//! `raster` runs the CPU version over a whole viewport.
//!
//! Device coordinates follow the `gl_FragCoord` convention: origin bottom-left,
//! pixel centres at `+0.5`.

mod palette;
mod pass;
mod raster;
mod uniforms;

pub use palette::{GridPalette, GridPaletteBlock};
pub use pass::{classify, classify_world, epsilon, floor_mod, shade, to_world, GridCell, GRID_DIVISIONS};
pub use raster::{rasterize, RasterImage};
pub use uniforms::{GridUniformBlock, GridUniforms};
